use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::wire::Instruction;

pub mod openai;
pub mod anthropic;
pub mod ollama;

/// A remote text-completion service. One call returns one text blob.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, ins: &Instruction, debug: bool) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    let client = http_client(cfg.timeout_secs)?;
    let key = cfg.api_key.clone().unwrap_or_default();
    match cfg.provider {
        ProviderKind::Groq | ProviderKind::OpenAI => Ok(Box::new(openai::OpenAICompatible {
            client,
            api_base: cfg.api_base.clone(),
            api_key: key,
            model: cfg.model.clone(),
            temperature: cfg.temperature,
        })),
        ProviderKind::Anthropic => Ok(Box::new(anthropic::Anthropic {
            client,
            api_base: cfg.api_base.clone(),
            api_key: key,
            api_version: anthropic::API_VERSION.into(),
            model: cfg.model.clone(),
            temperature: cfg.temperature,
        })),
        ProviderKind::Ollama => Ok(Box::new(ollama::Ollama {
            client,
            url: cfg.api_base.clone(),
            model: cfg.model.clone(),
            temperature: cfg.temperature,
        })),
    }
}

/// No timeout unless configured; reqwest's default then applies.
fn http_client(timeout_secs: Option<u64>) -> Result<Client> {
    let mut b = Client::builder();
    if let Some(s) = timeout_secs {
        b = b.timeout(Duration::from_secs(s));
    }
    Ok(b.build()?)
}
