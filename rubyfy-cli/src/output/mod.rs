//! Output formatting module

use anyhow::Result;
use rubyfy_core::RunStats;

/// One annotated input document
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// Display name of the input (`<stdin>` or a path)
    pub name: String,
    /// Rewritten text
    pub text: String,
    /// Counters from the annotation run
    pub stats: RunStats,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
