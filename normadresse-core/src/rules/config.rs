//! Rule file schema
//!
//! This module defines the TOML schema for rule tables:
//!
//! ```toml
//! [metadata]
//! code = "fr"
//! name = "French postal addresses"
//!
//! [[rules]]
//! stage = 1
//! pattern = '\bAVENUE\b'
//! short = "AV"
//! ```

use crate::error::RuleError;
use crate::rules::Stage;
use serde::{Deserialize, Serialize};

/// Root rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// One abbreviation rule, as written in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub stage: Stage,
    /// Regular expression matched against the working string
    pub pattern: String,
    /// Replacement; `\g<n>` echoes capture group `n`
    pub short: String,
}

impl Rule {
    pub fn new(stage: Stage, pattern: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            stage,
            pattern: pattern.into(),
            short: short.into(),
        }
    }
}

impl RuleSetConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), RuleError> {
        if self.metadata.code.trim().is_empty() {
            return Err(RuleError::Validation(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if let Some((index, rule)) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern.is_empty())
        {
            return Err(RuleError::Validation(format!(
                "rule #{} in stage {} has an empty pattern",
                index + 1,
                rule.stage
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<RuleSetConfig, toml::de::Error> {
        toml::from_str(source)
    }

    #[test]
    fn test_parse_rules_in_order() {
        let config = parse(
            r#"
[metadata]
code = "fr"
name = "Test"

[[rules]]
stage = 2
pattern = "GENERAL"
short = "GAL"

[[rules]]
stage = 1
pattern = '\bAVENUE\b'
short = "AV"
"#,
        )
        .unwrap();

        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0], Rule::new(Stage::Title, "GENERAL", "GAL"));
        assert_eq!(config.rules[1].pattern, r"\bAVENUE\b");
    }

    #[test]
    fn test_unknown_stage_is_a_parse_error() {
        let result = parse(
            r#"
[metadata]
code = "fr"
name = "Test"

[[rules]]
stage = 10
pattern = "LE"
short = ""
"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown stage identifier 10"), "{message}");
    }

    #[test]
    fn test_rules_default_to_empty() {
        let config = parse("[metadata]\ncode = \"x\"\nname = \"Empty\"\n").unwrap();
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let config = parse("[metadata]\ncode = \" \"\nname = \"Blank\"\n").unwrap();
        assert!(matches!(config.validate(), Err(RuleError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let config = RuleSetConfig {
            metadata: Metadata {
                code: "fr".to_string(),
                name: "Test".to_string(),
            },
            rules: vec![
                Rule::new(Stage::RoadType, "AVENUE", "AV"),
                Rule::new(Stage::Title, "", "X"),
            ],
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("rule #2 in stage 2"), "{message}");
    }
}
