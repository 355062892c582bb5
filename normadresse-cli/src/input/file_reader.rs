//! Address list reading
//!
//! Input files hold one address per line. Blank lines are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read the addresses of a file
    pub fn read_addresses(path: &Path) -> Result<Vec<String>> {
        Ok(Self::split_addresses(&Self::read_text(path)?))
    }

    /// Read addresses from any reader, such as stdin
    pub fn read_addresses_from(mut reader: impl Read) -> Result<Vec<String>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input")?;
        Ok(Self::split_addresses(&content))
    }

    /// One address per non-blank line, surrounding whitespace trimmed
    pub fn split_addresses(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
