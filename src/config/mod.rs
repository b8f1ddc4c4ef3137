use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::{Args, ProviderKind};
use crate::errors::{NamerError, Result};

pub const DEFAULT_MODEL: &str = "qwen-2.5-32b";
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Process-wide settings, built once at startup and handed to the generator by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    pub api_base: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_secs: Option<u64>,
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Groq,
            model: DEFAULT_MODEL.into(),
            api_base: default_api_base(ProviderKind::Groq).into(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: None,
            out_dir: ".namecraft".into(),
        }
    }
}

/// Optional overrides read from a TOML file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
    pub out_dir: Option<String>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|e| NamerError::InvalidConfig {
            message: e.to_string(),
        })?;
        toml::from_str(&s).map_err(|e| NamerError::InvalidConfig {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

pub fn default_api_base(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Groq => "https://api.groq.com/openai/v1",
        ProviderKind::OpenAI => "https://api.openai.com/v1",
        ProviderKind::Anthropic => "https://api.anthropic.com",
        ProviderKind::Ollama => "http://localhost:11434",
    }
}

/// Environment variable holding the credential, if the provider needs one.
pub fn api_key_var(kind: ProviderKind) -> Option<&'static str> {
    match kind {
        ProviderKind::Groq => Some("GROQ_API_KEY"),
        ProviderKind::OpenAI => Some("OPENAI_API_KEY"),
        ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
        ProviderKind::Ollama => None,
    }
}

impl Config {
    /// Layer defaults, the optional TOML file, the environment and CLI flags.
    /// `.env` is loaded into the process environment first when present.
    pub fn load(args: &Args) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(args, |k| std::env::var(k).ok())
    }

    /// Same layering as [`Config::load`] with an injectable environment lookup.
    pub fn from_sources(args: &Args, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = match &args.config {
            Some(p) => FileConfig::read(Path::new(p))?,
            None => FileConfig::default(),
        };

        let mut cfg = Config::default();
        let provider = args.provider.or(file.provider).unwrap_or(cfg.provider);
        cfg.provider = provider;
        cfg.api_base = default_api_base(provider).into();

        if let Some(m) = file.model {
            cfg.model = m;
        }
        if let Some(m) = env("NAMECRAFT_MODEL").filter(|m| !m.trim().is_empty()) {
            cfg.model = m;
        }
        if let Some(m) = &args.model {
            cfg.model = m.clone();
        }

        if let Some(b) = file.api_base {
            cfg.api_base = b;
        }
        if let Some(b) = &args.api_base {
            cfg.api_base = b.clone();
        }

        cfg.temperature = args.temperature.or(file.temperature).unwrap_or(cfg.temperature);
        cfg.timeout_secs = args.timeout_secs.or(file.timeout_secs);
        if let Some(d) = args.out_dir.clone().or(file.out_dir) {
            cfg.out_dir = d;
        }

        if let Some(var) = api_key_var(provider) {
            match env(var).filter(|k| !k.trim().is_empty()) {
                Some(k) => cfg.api_key = Some(k),
                None => return Err(NamerError::ConfigurationMissing { var: var.to_string() }),
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(NamerError::InvalidConfig {
                message: format!("temperature must be within 0..=2, got {}", self.temperature),
            });
        }
        if self.model.trim().is_empty() {
            return Err(NamerError::InvalidConfig { message: "model must not be empty".into() });
        }
        if self.timeout_secs == Some(0) {
            return Err(NamerError::InvalidConfig { message: "timeout_secs must be positive".into() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn missing_groq_key_is_configuration_missing() {
        let err = Config::from_sources(&Args::default(), env_of(&[])).unwrap_err();
        match err {
            NamerError::ConfigurationMissing { var } => assert_eq!(var, "GROQ_API_KEY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Config::from_sources(&Args::default(), env_of(&[("GROQ_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, NamerError::ConfigurationMissing { .. }));
    }

    #[test]
    fn defaults_with_key() {
        let cfg = Config::from_sources(&Args::default(), env_of(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(cfg.provider, ProviderKind::Groq);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.temperature, 1.0);
        assert_eq!(cfg.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(cfg.api_base, "https://api.groq.com/openai/v1");
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn ollama_needs_no_key() {
        let args = Args { provider: Some(ProviderKind::Ollama), ..Default::default() };
        let cfg = Config::from_sources(&args, env_of(&[])).unwrap();
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.api_base, "http://localhost:11434");
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        let args = Args { temperature: Some(2.5), ..Default::default() };
        let err = Config::from_sources(&args, env_of(&[("GROQ_API_KEY", "k")])).unwrap_err();
        assert!(matches!(err, NamerError::InvalidConfig { .. }));
    }

    #[test]
    fn cli_overrides_toml_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "provider = \"openai\"\nmodel = \"from-file\"\ntemperature = 0.5\ntimeout_secs = 30").unwrap();
        let args = Args {
            config: Some(f.path().display().to_string()),
            model: Some("from-cli".into()),
            ..Default::default()
        };
        let cfg = Config::from_sources(&args, env_of(&[("OPENAI_API_KEY", "sk")])).unwrap();
        assert_eq!(cfg.provider, ProviderKind::OpenAI);
        assert_eq!(cfg.model, "from-cli");
        assert_eq!(cfg.temperature, 0.5);
        assert_eq!(cfg.timeout_secs, Some(30));
    }

    #[test]
    fn model_layers_file_then_env_then_cli() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"from-file\"").unwrap();
        let path = f.path().display().to_string();
        let env = env_of(&[("GROQ_API_KEY", "k"), ("NAMECRAFT_MODEL", "from-env")]);

        let args = Args { config: Some(path.clone()), ..Default::default() };
        let cfg = Config::from_sources(&args, &env).unwrap();
        assert_eq!(cfg.model, "from-env");

        let args = Args { config: Some(path), model: Some("from-cli".into()), ..Default::default() };
        let cfg = Config::from_sources(&args, &env).unwrap();
        assert_eq!(cfg.model, "from-cli");
    }

    #[test]
    fn toml_model_used_without_env() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"from-file\"").unwrap();
        let args = Args { config: Some(f.path().display().to_string()), ..Default::default() };
        let cfg = Config::from_sources(&args, env_of(&[("GROQ_API_KEY", "k")])).unwrap();
        assert_eq!(cfg.model, "from-file");
    }

    #[test]
    fn unknown_toml_key_is_invalid_config() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "colour = \"blue\"").unwrap();
        let args = Args { config: Some(f.path().display().to_string()), ..Default::default() };
        let err = Config::from_sources(&args, env_of(&[("GROQ_API_KEY", "k")])).unwrap_err();
        assert!(matches!(err, NamerError::InvalidConfig { .. }));
    }
}
