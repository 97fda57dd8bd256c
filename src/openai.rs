//! Clients for OpenAI-compatible APIs (embeddings and chat completions).

use crate::error::{Result, TutorError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Read an API key from the named environment variable.
///
/// A missing or blank key is a configuration failure, not a degradation.
pub fn api_key_from_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(TutorError::ConfigMissing(format!(
            "{} environment variable not set",
            var
        ))),
    }
}

/// Create a client for `api_base` with the default timeout.
pub fn create_client(api_base: &str, api_key: &str) -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(api_base, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create a client for `api_base` with a custom timeout.
pub fn create_client_with_timeout(
    api_base: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    let config = OpenAIConfig::new()
        .with_api_base(api_base.trim_end_matches('/'))
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_missing() {
        let err = api_key_from_env("TUTORSCOPE_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        assert!(err.is_config_missing());
    }

    #[test]
    fn test_client_builds() {
        assert!(create_client("https://api.groq.com/openai/v1/", "test-key").is_ok());
    }
}
