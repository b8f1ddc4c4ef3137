use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::wire::Category;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "groq")]
    Groq,
    #[value(alias = "open-ai", alias = "openai")]
    OpenAI,
    #[value(alias = "anthropic")]
    Anthropic,
    #[value(alias = "ollama")]
    Ollama,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Cards,
    Html,
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(name = "namecraft", version, about = "AI business name & tagline generator")]
pub struct Args {
    /// Business type, e.g. "Tech Startup" or "Clothing Brand". Prompted for when omitted.
    #[arg(long, short = 'b')]
    pub business_type: Option<String>,

    #[arg(long, short = 'c', value_enum, ignore_case = true)]
    pub category: Option<Category>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long)]
    pub temperature: Option<f32>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Cards)]
    pub format: OutputFormat,

    /// TOML file with provider/model defaults.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub out_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inputs_and_case_insensitive_category() {
        let args = Args::parse_from([
            "namecraft",
            "--business-type",
            "artisan bakery",
            "--category",
            "food",
            "--provider",
            "ollama",
            "--format",
            "json",
        ]);
        assert_eq!(args.business_type.as_deref(), Some("artisan bakery"));
        assert_eq!(args.category, Some(Category::Food));
        assert_eq!(args.provider, Some(ProviderKind::Ollama));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.debug);
    }

    #[test]
    fn rejects_unknown_category() {
        let res = Args::try_parse_from(["namecraft", "--category", "Gaming"]);
        assert!(res.is_err());
    }
}
