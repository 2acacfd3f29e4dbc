//! Plain text output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - writes each rewritten document as is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        self.writer.write_all(document.text.as_bytes())?;
        // Keep consecutive documents on separate lines
        if !document.text.is_empty() && !document.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
