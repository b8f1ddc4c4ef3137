use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::wire::Instruction;
use super::Provider;

pub const API_VERSION: &str = "2023-06-01";

pub struct Anthropic {
    pub client: Client,
    pub api_base: String,
    pub api_key: String,
    pub api_version: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Msg<'a>>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[async_trait]
impl Provider for Anthropic {
    async fn complete(&self, ins: &Instruction, debug: bool) -> Result<String> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let body = MsgRequest {
            model: &self.model,
            max_tokens: 2048,
            // messages API caps temperature at 1.0
            temperature: self.temperature.min(1.0),
            system: &ins.system,
            messages: vec![Msg { role: "user", content: &ins.user }],
        };

        if debug {
            eprintln!("debug/anthropic: POST {}", url);
        }
        tracing::debug!(%url, model = %self.model, "sending messages request");

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("anthropic read body failed")?;
        if debug {
            eprintln!("debug/anthropic: raw body:\n{}\n", text);
        }
        if !status.is_success() {
            return Err(anyhow!("anthropic API error ({}): {}", status, text));
        }

        let parsed: MsgResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("anthropic response parse error: {}", e))?;

        parsed
            .content
            .into_iter()
            .find(|b| b.r#type == "text" || !b.text.is_empty())
            .map(|b| b.text.trim().to_string())
            .ok_or_else(|| anyhow!("anthropic: empty content"))
    }
}
