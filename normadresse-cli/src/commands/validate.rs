//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use normadresse_core::{RuleTable, Stage};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match RuleTable::from_file(&self.rules) {
            Ok(table) => {
                println!("✓ Rule file is valid!");
                print!("{}", summary(&table));
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(CliError::RulesError(format!("validation failed: {e}")).into())
            }
        }
    }
}

fn summary(table: &RuleTable) -> String {
    let mut out = format!(
        "  Code: {}\n  Name: {}\n  Rules: {}\n",
        table.code(),
        table.name(),
        table.len()
    );
    for stage in Stage::ALL {
        out.push_str(&format!(
            "    stage {:>2} ({}): {}\n",
            stage.id(),
            stage.name(),
            table.rules(stage).len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[metadata]\ncode = \"test\"\nname = \"Test\"\n\n[[rules]]\nstage = 1\npattern = '\\bAVENUE\\b'\nshort = \"AV\"\n"
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[metadata]\ncode = \"\"\nname = \"Test\"\n").unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Rule file error: validation failed"));
    }

    #[test]
    fn test_summary_lists_every_stage() {
        let table = RuleTable::from_toml_str(normadresse_core::rules::loader::FRENCH_RULES).unwrap();
        let summary = summary(&table);

        assert!(summary.contains("  Code: fr\n"));
        for stage in Stage::ALL {
            assert!(summary.contains(&format!("({})", stage.name())));
        }
    }
}
