//! Pre-flight checks before operations that call hosted models.
//!
//! Validates that credentials are configured before starting work that
//! would otherwise fail midway.

use crate::config::Settings;
use crate::error::{Result, TutorError};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Analysis and chapters run locally.
    Analyze,
    /// Questions need the embedding and chat API keys.
    Ask,
    /// The server answers questions, so it needs the same keys.
    Serve,
}

/// Run pre-flight checks for the given operation.
///
/// Returns [`TutorError::ConfigMissing`] naming the first absent key.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Analyze => {}
        Operation::Ask | Operation::Serve => {
            check_api_key(&settings.generation.api_key_env)?;
            check_api_key(&settings.embedding.api_key_env)?;
        }
    }
    Ok(())
}

/// Check that an API key environment variable is set and non-empty.
fn check_api_key(var: &str) -> Result<()> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(()),
        Ok(_) => Err(TutorError::ConfigMissing(format!(
            "{} is empty. Set it with: export {}='...'",
            var, var
        ))),
        Err(_) => Err(TutorError::ConfigMissing(format!(
            "{} not set. Set it with: export {}='...'",
            var, var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_analyze_no_requirements() {
        assert!(check(Operation::Analyze, &Settings::default()).is_ok());
    }

    #[test]
    fn test_missing_key_is_config_missing() {
        let mut settings = Settings::default();
        settings.generation.api_key_env = "TUTORSCOPE_TEST_UNSET_KEY".to_string();

        let err = check(Operation::Ask, &settings).unwrap_err();
        assert!(err.is_config_missing());
        assert!(err.to_string().contains("TUTORSCOPE_TEST_UNSET_KEY"));
    }
}
