//! Reading alignment
//!
//! Decides, for one matched pair, whether the reading annotates the whole
//! word as a single block or each word character individually.
//!
//! Character mode is chosen when either
//! - per-character alignment is enabled, neither word nor reading contains
//!   kana, and both have the same number of characters, or
//! - the word has exactly as many characters as the reading has units.
//!
//! Reading units are the non-empty segments between segment delimiters.
//! With per-character alignment enabled, a reading that forms a single
//! segment is split into its characters instead.
//!
//! Block mode is the fallback and never fails.

use crate::domain::extractor::MatchedPair;
use crate::domain::grammar::DelimiterGrammar;
use crate::domain::script::{contains_kana, is_kana};
use smallvec::SmallVec;
use std::borrow::Cow;

/// One word character and the reading unit aligned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedUnit {
    pub base: char,
    /// Empty when the reading ran out of units
    pub reading: String,
    /// False for characters that read as themselves
    pub annotate: bool,
}

/// Annotation granularity chosen for a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// The whole word against the whole reading, segment delimiters removed
    Block { word: String, reading: String },
    /// One unit per word character
    Characters(SmallVec<[AlignedUnit; 8]>),
}

impl Alignment {
    /// Whether this is a per-character alignment
    pub fn is_per_character(&self) -> bool {
        matches!(self, Alignment::Characters(_))
    }
}

/// Alignment of a pair plus the literal text emitted before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair<'t> {
    /// Honorific emitted verbatim in front of the annotation
    pub prefix: &'t str,
    pub alignment: Alignment,
}

/// Alignment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingAligner {
    per_character: bool,
}

impl ReadingAligner {
    /// Create an aligner
    pub fn new(per_character: bool) -> Self {
        Self { per_character }
    }

    /// Whether per-character alignment is enabled
    pub fn per_character(&self) -> bool {
        self.per_character
    }

    /// Align a matched pair
    pub fn align<'t>(&self, pair: &MatchedPair<'t>, grammar: &DelimiterGrammar) -> AlignedPair<'t> {
        let (prefix, word, reading): (&'t str, Cow<'t, str>, Cow<'t, str>) =
            if pair.has_distinct_honorifics() {
                (
                    "",
                    Cow::Owned(format!("{}{}", pair.word_honorific, pair.word)),
                    Cow::Owned(format!("{}{}", pair.reading_honorific, pair.reading)),
                )
            } else {
                (
                    pair.word_honorific,
                    Cow::Borrowed(pair.word),
                    Cow::Borrowed(pair.reading),
                )
            };

        AlignedPair {
            prefix,
            alignment: self.align_bodies(&word, &reading, grammar),
        }
    }

    /// Align a word body against a reading body
    pub fn align_bodies(&self, word: &str, reading: &str, grammar: &DelimiterGrammar) -> Alignment {
        let word_len = word.chars().count();

        let mut units: SmallVec<[&str; 8]> = grammar.split_reading(reading).collect();
        if units.len() == 1 && self.per_character {
            let only = units[0];
            units = only
                .char_indices()
                .map(|(i, ch)| &only[i..i + ch.len_utf8()])
                .collect();
        }

        let same_length_latin = self.per_character
            && !contains_kana(word)
            && !contains_kana(reading)
            && word_len == reading.chars().count();

        if same_length_latin || word_len == units.len() {
            let aligned = word
                .chars()
                .enumerate()
                .map(|(i, base)| {
                    let unit = units.get(i).copied().unwrap_or("");
                    AlignedUnit {
                        base,
                        annotate: needs_annotation(base, unit),
                        reading: unit.to_string(),
                    }
                })
                .collect();
            Alignment::Characters(aligned)
        } else {
            Alignment::Block {
                word: word.to_string(),
                reading: grammar.strip_segments(reading).into_owned(),
            }
        }
    }
}

impl Default for ReadingAligner {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Kana always gets annotated; anything else only when it reads differently
fn needs_annotation(base: char, unit: &str) -> bool {
    is_kana(base) || (!unit.is_empty() && !unit.chars().eq(std::iter::once(base)))
}
