//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single shortened address
    fn format_address(&mut self, address: &ShortenedAddress) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// One input address with its shortened form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedAddress {
    /// Address as given
    pub input: String,
    /// Shortened address
    pub output: String,
    /// Length of `output` in characters
    pub length: usize,
    /// Whether `output` fits the requested maximum length
    pub fits: bool,
}

impl ShortenedAddress {
    pub fn new(input: impl Into<String>, output: String, max_length: usize) -> Self {
        let length = output.chars().count();
        Self {
            input: input.into(),
            output,
            length,
            fits: length <= max_length,
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
