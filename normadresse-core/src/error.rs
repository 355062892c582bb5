//! Rule table error types
//!
//! The shortening pipeline itself is total; every failure mode lives in
//! building the rule table it consumes.

use crate::rules::Stage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or compiling a rule table
#[derive(Error, Debug, Clone)]
pub enum RuleError {
    /// Rule file could not be read
    #[error("failed to read rule file '{path}': {message}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// Rule source is not valid TOML or does not match the schema
    #[error("failed to parse rule table: {0}")]
    Parse(String),

    /// Stage identifier outside the supported set
    #[error("unknown stage identifier {0} (expected one of 1, 2, 3, 4, 5, 6, 9)")]
    InvalidStage(i64),

    /// Rule pattern rejected by the regex engine
    #[error("invalid pattern '{pattern}' in stage {stage}: {source}")]
    InvalidPattern {
        stage: Stage,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Table is structurally wrong (missing metadata, empty pattern)
    #[error("invalid rule table: {0}")]
    Validation(String),
}

/// Result type for rule table operations
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_stage_display() {
        let error = RuleError::InvalidStage(7);
        assert_eq!(
            error.to_string(),
            "unknown stage identifier 7 (expected one of 1, 2, 3, 4, 5, 6, 9)"
        );
    }

    #[test]
    fn test_io_error_display_names_path() {
        let error = RuleError::Io {
            path: PathBuf::from("/etc/rules.toml"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to read rule file '/etc/rules.toml': permission denied"
        );
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = RuleError::InvalidPattern {
            stage: Stage::Title,
            pattern: "(".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern '(' in stage 2"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
