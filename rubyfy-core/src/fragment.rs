//! Fragment pipeline interfaces
//!
//! The engine does not know where text comes from. A caller feeds it
//! [`Fragment`]s in document order and receives one [`FragmentOutput`] per
//! fragment through a [`FragmentSink`], which splices the result back into
//! whatever structure held the text.

use serde::Serialize;
use std::io;

/// A piece of text to annotate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// Label of the enclosing region, e.g. `CODE`
    pub scope: Option<String>,
}

impl Fragment {
    /// Fragment outside any labelled region
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: None,
        }
    }

    /// Fragment inside the region `scope`
    pub fn scoped(text: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: Some(scope.into()),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::new(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::new(text)
    }
}

/// Supplier of fragments in document order
///
/// Every iterator of fragments is a source.
pub trait FragmentSource {
    /// Next fragment, or `None` when the document is exhausted
    fn next_fragment(&mut self) -> Option<Fragment>;
}

impl<I> FragmentSource for I
where
    I: Iterator<Item = Fragment>,
{
    fn next_fragment(&mut self) -> Option<Fragment> {
        self.next()
    }
}

/// What the engine decided for one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutput<'a> {
    /// Excluded scope or rejected by the acceptance predicate
    Skipped(&'a str),
    /// Eligible, but no pair was found
    Unchanged(&'a str),
    /// Rewritten markup
    Rewritten(String),
}

impl FragmentOutput<'_> {
    /// Text to splice back
    pub fn as_str(&self) -> &str {
        match self {
            FragmentOutput::Skipped(text) | FragmentOutput::Unchanged(text) => text,
            FragmentOutput::Rewritten(markup) => markup,
        }
    }
}

/// Receiver of per-fragment results, in source order
///
/// Skipped fragments are delivered too, so sinks that rebuild a stream can
/// keep them in place.
pub trait FragmentSink {
    /// Accept the result for `fragment`
    fn emit(&mut self, fragment: &Fragment, output: FragmentOutput<'_>) -> io::Result<()>;
}

impl FragmentSink for Vec<String> {
    fn emit(&mut self, _fragment: &Fragment, output: FragmentOutput<'_>) -> io::Result<()> {
        self.push(output.as_str().to_string());
        Ok(())
    }
}

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Fragments pulled from the source
    pub fragments: usize,
    /// Fragments not eligible for annotation
    pub skipped: usize,
    /// Fragments whose text changed
    pub rewritten: usize,
    /// Pairs annotated across all fragments
    pub pairs: usize,
}

impl std::ops::AddAssign for RunStats {
    fn add_assign(&mut self, other: Self) {
        self.fragments += other.fragments;
        self.skipped += other.skipped;
        self.rewritten += other.rewritten;
        self.pairs += other.pairs;
    }
}
