//! Plain text output formatter

use super::{OutputFormatter, ShortenedAddress};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one shortened address per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_address(&mut self, address: &ShortenedAddress) -> Result<()> {
        writeln!(self.writer, "{}", address.output)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
