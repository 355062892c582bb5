//! JSON output formatter

use super::{OutputFormatter, ShortenedAddress};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs all addresses as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    addresses: Vec<ShortenedAddress>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            addresses: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_address(&mut self, address: &ShortenedAddress) -> Result<()> {
        self.addresses.push(address.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.addresses)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.addresses)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
