//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use normadresse_core::PipelineStage;

pub mod generate_config;
pub mod shorten;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shorten address lines to a maximum length
    Shorten(shorten::ShortenArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Generate a rule file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the pipeline stages in execution order
    Stages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Shorten(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn render(&self) -> String {
        match self {
            ListCommands::Stages => PipelineStage::ORDER
                .iter()
                .map(|stage| format!("{:>5}  {}\n", stage.label(), stage.description()))
                .collect(),
            ListCommands::Formats => "text  one shortened address per line\n\
                 json  array of {input, output, length, fits}\n"
                .to_string(),
        }
    }
}

/// Install the terminal logger once, with a filter derived from verbosity.
/// `RUST_LOG` takes precedence.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Fails only when a logger is already installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
