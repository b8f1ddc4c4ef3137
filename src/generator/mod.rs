use crate::config::Config;
use crate::errors::{NamerError, Result};
use crate::parse::{self, ParseOutcome};
use crate::prompt;
use crate::provider::{self, DynProvider};
use crate::wire::{CompletionRequest, CompletionResponse, GenerationRequest, NameRecord, Tx};

/// One completed round trip: what was sent, what came back and what it parsed to.
#[derive(Debug, Clone)]
pub struct Generation {
    pub request: CompletionRequest,
    pub raw: String,
    pub outcome: ParseOutcome,
}

impl Generation {
    pub fn response(&self) -> CompletionResponse {
        CompletionResponse {
            transaction: self.request.transaction.clone(),
            raw: self.raw.clone(),
            records: self.outcome.records.clone(),
            dropped_blocks: self.outcome.dropped,
        }
    }
}

pub struct Generator<'a> {
    cfg: &'a Config,
    provider: DynProvider,
    debug: bool,
}

impl<'a> Generator<'a> {
    pub fn new(cfg: &'a Config, debug: bool) -> Result<Self> {
        let provider = provider::make_provider(cfg).map_err(|e| NamerError::InvalidConfig {
            message: format!("{e:#}"),
        })?;
        Ok(Self::with_provider(cfg, provider, debug))
    }

    pub fn with_provider(cfg: &'a Config, provider: DynProvider, debug: bool) -> Self {
        Self { cfg, provider, debug }
    }

    /// Ask for six names and parse whatever comes back.
    pub async fn generate(&self, req: &GenerationRequest) -> Result<Vec<NameRecord>> {
        Ok(self.run(req).await?.outcome.records)
    }

    pub async fn run(&self, req: &GenerationRequest) -> Result<Generation> {
        let ins = prompt::instruction(req);
        let request = CompletionRequest {
            transaction: Tx::new(),
            model: self.cfg.model.clone(),
            temperature: self.cfg.temperature,
            messages: ins.messages(),
        };
        tracing::info!(
            business_type = %req.business_type,
            category = %req.category,
            provider = ?self.cfg.provider,
            model = %self.cfg.model,
            "requesting business names"
        );

        let raw = match self.provider.complete(&ins, self.debug).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "remote completion failed");
                return Err(NamerError::remote(&e));
            }
        };

        let outcome = parse::parse_reply(&raw);
        if outcome.dropped > 0 {
            tracing::debug!(dropped = outcome.dropped, "skipped blocks with fewer than three lines");
        }
        tracing::info!(records = outcome.records.len(), "parsed model reply");

        Ok(Generation { request, raw, outcome })
    }
}
