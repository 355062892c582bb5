//! normadresse CLI library
//!
//! Command-line front end over `normadresse-core`: address input from
//! arguments, files or stdin, text and JSON output, and rule file tooling.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
