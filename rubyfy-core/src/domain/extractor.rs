//! Pair extraction
//!
//! A [`PairIter`] walks the source once, left to right. Matches never
//! overlap and the iterator is finite; calling
//! [`DelimiterGrammar::pairs`](crate::domain::grammar::DelimiterGrammar::pairs)
//! again restarts from offset 0.

use regex::{CaptureMatches, Captures};
use std::iter::FusedIterator;
use std::ops::Range;

/// One word/reading pair located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair<'t> {
    /// Byte offset of the word opening delimiter
    pub start: usize,
    /// Byte offset just past the reading closing delimiter
    pub end: usize,
    /// Honorific leading the word, possibly empty
    pub word_honorific: &'t str,
    /// Word body
    pub word: &'t str,
    /// Honorific leading the reading, possibly empty
    pub reading_honorific: &'t str,
    /// Reading body, segment delimiters included
    pub reading: &'t str,
}

impl<'t> MatchedPair<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Some(Self {
            start: whole.start(),
            end: whole.end(),
            word_honorific: group(1),
            word: group(2),
            reading_honorific: group(3),
            reading: group(4),
        })
    }

    /// Byte range of the whole match
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether word and reading carry different honorifics
    ///
    /// In that case the honorifics are annotated as part of the word rather
    /// than emitted as a bare prefix.
    pub fn has_distinct_honorifics(&self) -> bool {
        (!self.word_honorific.is_empty() || !self.reading_honorific.is_empty())
            && self.word_honorific != self.reading_honorific
    }
}

/// Lazy iterator over the pairs of one source string
pub struct PairIter<'g, 't> {
    captures: CaptureMatches<'g, 't>,
}

impl<'g, 't> PairIter<'g, 't> {
    pub(crate) fn new(captures: CaptureMatches<'g, 't>) -> Self {
        Self { captures }
    }
}

impl<'t> Iterator for PairIter<'_, 't> {
    type Item = MatchedPair<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.captures
            .by_ref()
            .find_map(|caps| MatchedPair::from_captures(&caps))
    }
}

impl FusedIterator for PairIter<'_, '_> {}

impl std::fmt::Debug for PairIter<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairIter").finish_non_exhaustive()
    }
}
