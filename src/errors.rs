use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamerError {
    #[error("API key missing! Please set the {var} environment variable.")] ConfigurationMissing { var: String },
    #[error("invalid configuration: {message}")] InvalidConfig { message: String },
    #[error("Please enter your business type!")] EmptyBusinessType,
    #[error("API request failed: {message}")] RemoteCall { message: String },
}

impl NamerError {
    /// Flattens the whole context chain so the underlying cause reaches the user.
    pub fn remote(err: &anyhow::Error) -> Self {
        NamerError::RemoteCall { message: format!("{err:#}") }
    }

    /// Process exit status for a failure that ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            NamerError::ConfigurationMissing { .. }
            | NamerError::InvalidConfig { .. }
            | NamerError::EmptyBusinessType => 1,
            NamerError::RemoteCall { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, NamerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_nonzero_exit_codes() {
        assert_eq!(NamerError::ConfigurationMissing { var: "GROQ_API_KEY".into() }.exit_code(), 1);
        assert_eq!(NamerError::InvalidConfig { message: "x".into() }.exit_code(), 1);
        assert_eq!(NamerError::EmptyBusinessType.exit_code(), 1);
        assert_eq!(NamerError::remote(&anyhow::anyhow!("boom")).exit_code(), 2);
    }

    #[test]
    fn remote_message_keeps_context_chain() {
        let err = anyhow::anyhow!("connection refused").context("chat completion request failed");
        let msg = NamerError::remote(&err).to_string();
        assert_eq!(msg, "API request failed: chat completion request failed: connection refused");
    }
}
