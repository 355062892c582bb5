//! Shorten command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, ShortenedAddress, TextFormatter};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info, warn};
use normadresse_core::{Normalizer, RuleTable};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the shorten command
#[derive(Debug, Args)]
pub struct ShortenArgs {
    /// Addresses to shorten (read from stdin when neither these nor --input are given)
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Input files or patterns, one address per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Maximum length in characters [default: 32]
    #[arg(short = 'n', long, value_name = "MAX")]
    pub max_length: Option<usize>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rule file to use instead of the embedded French rules
    #[arg(short, long, value_name = "FILE", env = "NORMADRESSE_RULES")]
    pub rules: Option<PathBuf>,

    /// Shorten addresses in parallel; output keeps input order
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One shortened address per line
    Text,
    /// JSON array with input, output, length and fit status
    Json,
}

impl ShortenArgs {
    /// Execute the shorten command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let max_length = self.max_length.unwrap_or(config.shorten.max_length);
        let format = self.output_format(&config)?;
        let normalizer = self.normalizer(&config)?;
        let addresses = self.collect_addresses()?;

        info!(
            "Shortening {} addresses to {} characters with rules '{}'",
            addresses.len(),
            max_length,
            normalizer.rules().code()
        );

        let results = shorten_all(&normalizer, &addresses, max_length, self.parallel);

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for result in &results {
            formatter.format_address(result)?;
        }
        formatter.finish()?;

        let overflowing = results.iter().filter(|result| !result.fits).count();
        if overflowing > 0 {
            warn!("{overflowing} addresses still exceed {max_length} characters");
        }

        Ok(())
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn normalizer(&self, config: &CliConfig) -> Result<Normalizer> {
        match self.rules.as_ref().or(config.shorten.rules.as_ref()) {
            Some(path) => {
                let table = RuleTable::from_file(path)
                    .map_err(|e| CliError::RulesError(format!("{}: {e}", path.display())))?;
                info!("Loaded {} rules from {}", table.len(), path.display());
                Ok(Normalizer::new(Arc::new(table)))
            }
            None => Normalizer::embedded().context("Failed to load the embedded rules"),
        }
    }

    /// Addresses from arguments first, then from files in path order
    fn collect_addresses(&self) -> Result<Vec<String>> {
        let mut addresses = self.addresses.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                debug!("Reading {}", path.display());
                addresses.extend(FileReader::read_addresses(&path)?);
            }
        }

        if self.addresses.is_empty() && self.input.is_empty() {
            addresses = FileReader::read_addresses_from(io::stdin().lock())?;
        }

        Ok(addresses)
    }
}

/// Shorten every address, in input order
pub fn shorten_all(
    normalizer: &Normalizer,
    addresses: &[String],
    max_length: usize,
    parallel: bool,
) -> Vec<ShortenedAddress> {
    let shorten = |address: &String| {
        ShortenedAddress::new(address.as_str(), normalizer.normalize(address, max_length), max_length)
    };

    if parallel {
        addresses.par_iter().map(shorten).collect()
    } else {
        addresses.iter().map(shorten).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ShortenArgs {
        ShortenArgs {
            addresses: Vec::new(),
            input: Vec::new(),
            max_length: None,
            format: None,
            output: None,
            rules: None,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let normalizer = Normalizer::embedded().unwrap();
        let addresses: Vec<String> = (1..=50)
            .map(|n| format!("{n} boulevard Victor Hugo"))
            .collect();

        let sequential = shorten_all(&normalizer, &addresses, 15, false);
        let parallel = shorten_all(&normalizer, &addresses, 15, true);

        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0].input, "1 boulevard Victor Hugo");
        assert_eq!(parallel[49].input, "50 boulevard Victor Hugo");
    }

    #[test]
    fn test_fit_status() {
        let normalizer = Normalizer::embedded().unwrap();
        let addresses = vec!["15 boulevard Victor Hugo".to_string()];

        let results = shorten_all(&normalizer, &addresses, 15, false);
        assert_eq!(results[0].output, "15 BD v HUGO");
        assert!(results[0].fits);

        let results = shorten_all(&normalizer, &addresses, 3, false);
        assert!(!results[0].fits);
    }

    #[test]
    fn test_format_precedence() {
        let mut config = CliConfig::default();
        config.output.default_format = "JSON".to_string();

        let mut args = args();
        assert_eq!(args.output_format(&config).unwrap(), OutputFormat::Json);

        args.format = Some(OutputFormat::Text);
        assert_eq!(args.output_format(&config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_unknown_configured_format() {
        let mut config = CliConfig::default();
        config.output.default_format = "yaml".to_string();

        let err = args().output_format(&config).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_missing_rule_file() {
        let mut args = args();
        args.rules = Some(PathBuf::from("/nonexistent/rules.toml"));

        let err = args.normalizer(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Rule file error:"));
    }

    #[test]
    fn test_arguments_before_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("addresses.txt");
        std::fs::write(&path, "2 rue B\n\n3 rue C\n").unwrap();

        let mut args = args();
        args.addresses = vec!["1 rue A".to_string()];
        args.input = vec![path.display().to_string()];

        assert_eq!(
            args.collect_addresses().unwrap(),
            vec!["1 rue A", "2 rue B", "3 rue C"]
        );
    }
}
