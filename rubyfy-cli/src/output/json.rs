//! JSON output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input name
    pub path: String,
    /// Pairs annotated in the document
    pub pairs: usize,
    /// Lines whose text changed
    pub fragments_rewritten: usize,
    /// Lines left alone because of their scope or content
    pub fragments_skipped: usize,
    /// Rewritten text
    pub output: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        self.documents.push(DocumentData {
            path: document.name.clone(),
            pairs: document.stats.pairs,
            fragments_rewritten: document.stats.rewritten,
            fragments_skipped: document.stats.skipped,
            output: document.text.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
