//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Rule file could not be loaded
    RulesError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RulesError(msg) => write!(f, "Rule file error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("missing.txt".to_string()).to_string(),
            "File not found: missing.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad format".to_string()).to_string(),
            "Configuration error: bad format"
        );
        assert_eq!(
            CliError::RulesError("unknown stage".to_string()).to_string(),
            "Rule file error: unknown stage"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("x".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
