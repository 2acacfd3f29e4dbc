//! Delimiter grammar
//!
//! Compiles the configured delimiter sets into two patterns: the pair
//! matcher
//!
//! ```text
//! OPEN_W (honorific?) (word) CLOSE_W OPEN_R (honorific?) (reading) CLOSE_R
//! ```
//!
//! and the reading-segment splitter. Every configured character is written
//! as a `\x{HEX}` code-point literal, so punctuation that is also regex
//! syntax (`[`, `(`, `|`, `.`) is always matched literally.
//!
//! The compiled grammar holds no scan state. Each call to
//! [`DelimiterGrammar::pairs`] returns an iterator that owns its cursor, so
//! one grammar can be shared across threads.

use crate::config::DelimiterSet;
use crate::domain::extractor::PairIter;
use crate::error::ConfigError;
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;

/// Compiled pair matcher and segment splitter
#[derive(Debug, Clone)]
pub struct DelimiterGrammar {
    pair: Regex,
    /// `None` when no segment delimiters are configured
    segment: Option<Regex>,
}

impl DelimiterGrammar {
    /// Build the grammar from a delimiter set and the honorific prefixes
    pub fn build(delimiters: &DelimiterSet, honorifics: &[char]) -> Result<Self, ConfigError> {
        delimiters.validate()?;

        let honorific = if honorifics.is_empty() {
            "()".to_string()
        } else {
            format!("({}?)", class(honorifics))
        };

        // An unclosed reading must not run into the next pair
        let reading_stops: Vec<char> = delimiters
            .word_closing
            .iter()
            .chain(&delimiters.reading_closing)
            .copied()
            .collect();

        let pattern = format!(
            "(?:{open_w}){honorific}({word_body}+)(?:{close_w})(?:{open_r}){honorific}({reading_body}+)(?:{close_r})",
            open_w = alternation(&delimiters.word_opening),
            word_body = negated_class(&delimiters.word_closing),
            close_w = alternation(&delimiters.word_closing),
            open_r = alternation(&delimiters.reading_opening),
            reading_body = negated_class(&reading_stops),
            close_r = alternation(&delimiters.reading_closing),
        );
        let pair = Regex::new(&pattern)?;

        let segment = if delimiters.reading_segment.is_empty() {
            None
        } else {
            Some(Regex::new(&class(&delimiters.reading_segment))?)
        };

        log::debug!("compiled delimiter grammar: {pattern}");
        Ok(Self { pair, segment })
    }

    /// Scan `text` for pairs, left to right
    pub fn pairs<'g, 't>(&'g self, text: &'t str) -> PairIter<'g, 't> {
        PairIter::new(self.pair.captures_iter(text))
    }

    /// Cheap check for at least one pair
    pub fn has_pairs(&self, text: &str) -> bool {
        self.pair.is_match(text)
    }

    /// Number of pairs in `text`
    pub fn count_pairs(&self, text: &str) -> usize {
        self.pair.find_iter(text).count()
    }

    /// Split a reading into its non-empty segments
    pub fn split_reading<'a>(&'a self, reading: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let (split, whole) = match &self.segment {
            Some(segment) => (Some(segment.split(reading)), None),
            None => (None, Some(reading)),
        };
        split
            .into_iter()
            .flatten()
            .chain(whole)
            .filter(|s| !s.is_empty())
    }

    /// Remove every segment delimiter from a reading
    pub fn strip_segments<'t>(&self, reading: &'t str) -> Cow<'t, str> {
        match &self.segment {
            Some(segment) => segment.replace_all(reading, ""),
            None => Cow::Borrowed(reading),
        }
    }

    /// Source of the compiled pair pattern
    pub fn pattern(&self) -> &str {
        self.pair.as_str()
    }
}

fn literal(out: &mut String, ch: char) {
    // Writing to a String cannot fail
    let _ = write!(out, "\\x{{{:X}}}", ch as u32);
}

/// `a|b|c` over code-point literals
fn alternation(chars: &[char]) -> String {
    let mut out = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        literal(&mut out, ch);
    }
    out
}

fn class(chars: &[char]) -> String {
    let mut out = String::from("[");
    for &ch in chars {
        literal(&mut out, ch);
    }
    out.push(']');
    out
}

fn negated_class(chars: &[char]) -> String {
    let mut out = String::from("[^");
    for &ch in chars {
        literal(&mut out, ch);
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DelimiterRole;

    fn default_grammar() -> DelimiterGrammar {
        DelimiterGrammar::build(&DelimiterSet::default(), &['お', 'ご']).unwrap()
    }

    #[test]
    fn test_literal_escaping() {
        assert_eq!(alternation(&['{', '｛']), "\\x{7B}|\\x{FF5B}");
        assert_eq!(class(&['.', '、']), "[\\x{2E}\\x{3001}]");
        assert_eq!(negated_class(&[')']), "[^\\x{29}]");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let delimiters = DelimiterSet {
            word_opening: vec!['|'],
            word_closing: vec!['*'],
            reading_opening: vec!['^'],
            reading_closing: vec!['$'],
            reading_segment: vec!['\\', ']'],
        };
        let grammar = DelimiterGrammar::build(&delimiters, &[]).unwrap();

        let pairs: Vec<_> = grammar.pairs("a |漢字*^かん\\じ$ b").collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].word, "漢字");
        assert_eq!(pairs[0].reading, "かん\\じ");

        let segments: Vec<_> = grammar.split_reading("かん\\じ]").collect();
        assert_eq!(segments, vec!["かん", "じ"]);
    }

    #[test]
    fn test_build_rejects_empty_set() {
        let delimiters = DelimiterSet {
            word_closing: Vec::new(),
            ..DelimiterSet::default()
        };
        match DelimiterGrammar::build(&delimiters, &[]) {
            Err(ConfigError::EmptyDelimiterSet(DelimiterRole::WordClosing)) => {}
            other => panic!("Expected EmptyDelimiterSet, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_conflict() {
        let delimiters = DelimiterSet {
            reading_opening: vec!['{'],
            ..DelimiterSet::default()
        };
        assert!(matches!(
            DelimiterGrammar::build(&delimiters, &[]),
            Err(ConfigError::ConflictingDelimiter { ch: '{', .. })
        ));
    }

    #[test]
    fn test_full_width_and_lenticular_delimiters() {
        let grammar = default_grammar();
        assert!(grammar.has_pairs("｛漢字｝（かんじ）"));
        assert!(grammar.has_pairs("{漢字}【かんじ】"));
        // Closers of a different pair type still close
        assert!(grammar.has_pairs("{漢字}(かんじ）"));
        assert!(!grammar.has_pairs("{漢字} (かんじ)"));
        assert!(!grammar.has_pairs("漢字(かんじ)"));
    }

    #[test]
    fn test_reading_stops_at_word_closer() {
        let grammar = default_grammar();
        let pairs: Vec<_> = grammar.pairs("{a}(b {店}(てん)").collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].word, "店");
        assert_eq!(pairs[0].reading, "てん");

        assert!(!grammar.has_pairs("{a}(b}c)"));
    }

    #[test]
    fn test_count_pairs() {
        let grammar = default_grammar();
        assert_eq!(grammar.count_pairs("{東}(ひがし)と{西}(にし)"), 2);
        assert_eq!(grammar.count_pairs("no pairs"), 0);
    }

    #[test]
    fn test_split_reading_drops_empty_segments() {
        let grammar = default_grammar();
        let segments: Vec<_> = grammar.split_reading(".と..しょ・かん、").collect();
        assert_eq!(segments, vec!["と", "しょ", "かん"]);
        assert_eq!(grammar.split_reading("...").count(), 0);
    }

    #[test]
    fn test_strip_segments() {
        let grammar = default_grammar();
        assert_eq!(grammar.strip_segments("と.しょ・かん"), "としょかん");
        assert!(matches!(
            grammar.strip_segments("としょかん"),
            Cow::Borrowed("としょかん")
        ));
    }

    #[test]
    fn test_without_segment_delimiters() {
        let delimiters = DelimiterSet {
            reading_segment: Vec::new(),
            ..DelimiterSet::default()
        };
        let grammar = DelimiterGrammar::build(&delimiters, &[]).unwrap();
        let segments: Vec<_> = grammar.split_reading("a.b").collect();
        assert_eq!(segments, vec!["a.b"]);
        assert_eq!(grammar.strip_segments("a.b"), "a.b");
        assert_eq!(grammar.split_reading("").count(), 0);
    }
}
