//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code identifying the new rule set
    #[arg(short, long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rule file template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule file template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to add your abbreviations");
        println!("2. Validate your rules:");
        println!("   normadresse validate --rules {}", self.output.display());
        println!("3. Use them for shortening:");
        println!(
            "   normadresse shorten --rules {} \"12 avenue du General Leclerc\"",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rule file content
    fn generate_template(&self) -> String {
        format!(
            r#"# Address abbreviation rules for '{}'
#
# Patterns are regular expressions matched against the canonical address:
# upper-case ASCII letters, digits and single spaces. Within a stage, rules
# apply in file order and each replaces its first match only.
# Replacements may echo capture groups with \g<1>. A '@' word in a
# replacement merges two original words into one abbreviated word.

[metadata]
code = "{}"
name = "Custom rules"

# Stage 1: road types, applied to the pattern as written
[[rules]]
stage = 1
pattern = '\bAVENUE\b'
short = "AV"

[[rules]]
stage = 1
pattern = '\bROND POINT\b'
short = "RPT @"

# Stage 2: titles, matched between spaces
[[rules]]
stage = 2
pattern = "GENERAL"
short = "GAL"

# Stage 3: given names, matched against a whole word
[[rules]]
stage = 3
pattern = "^JEAN$"
short = "J"

# Stage 4: general vocabulary, matched at a word start
[[rules]]
stage = 4
pattern = '(\d+)I?EME'
short = '\g<1>E'

# Stage 5: secondary road types, also tried at the start of the line
[[rules]]
stage = 5
pattern = "RUE"
short = "R"

# Stage 6: saint and extension words
[[rules]]
stage = 6
pattern = '\bSAINT\b'
short = "ST"

# Stage 9: proper-noun particles, written in lower case to survive
# article elision
[[rules]]
stage = 9
pattern = '\bDE GAULLE\b'
short = "de GAULLE"
"#,
            self.code, self.code
        )
    }
}
