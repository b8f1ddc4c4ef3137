use namecraft::cli::{Args, ProviderKind};
use namecraft::config::Config;
use namecraft::NamerError;
use std::io::Write;

#[test]
fn missing_credential_halts_with_user_message() {
    let args = Args { provider: Some(ProviderKind::Groq), ..Default::default() };
    let err = Config::from_sources(&args, |_| None).unwrap_err();

    assert!(matches!(err, NamerError::ConfigurationMissing { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("GROQ_API_KEY"));
}

#[test]
fn credential_var_follows_provider() {
    let args = Args { provider: Some(ProviderKind::Anthropic), ..Default::default() };
    let err = Config::from_sources(&args, |k| (k == "GROQ_API_KEY").then(|| "x".to_string())).unwrap_err();
    assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
}

#[test]
fn toml_file_selects_provider_and_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("namecraft.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "provider = \"ollama\"\nmodel = \"llama3\"\napi_base = \"http://gpu-box:11434\"").unwrap();

    let args = Args { config: Some(path.display().to_string()), ..Default::default() };
    let cfg = Config::from_sources(&args, |_| None).unwrap();
    assert_eq!(cfg.provider, ProviderKind::Ollama);
    assert_eq!(cfg.model, "llama3");
    assert_eq!(cfg.api_base, "http://gpu-box:11434");
}

#[test]
fn missing_config_file_is_invalid_config() {
    let args = Args { config: Some("/definitely/not/here.toml".into()), ..Default::default() };
    let err = Config::from_sources(&args, |_| Some("k".into())).unwrap_err();
    assert!(matches!(err, NamerError::InvalidConfig { .. }));
}
