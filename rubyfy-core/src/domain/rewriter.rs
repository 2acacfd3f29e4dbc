//! Span-based substitution
//!
//! Each match is replaced at its recorded byte range. Text between matches
//! is copied verbatim, so an identical pair elsewhere in the source is never
//! touched by mistake.

use crate::domain::extractor::MatchedPair;
use std::borrow::Cow;

/// Result of rewriting one source string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten<'t> {
    pub text: Cow<'t, str>,
    /// Number of pairs substituted
    pub pairs: usize,
}

impl Rewritten<'_> {
    /// Whether any pair was substituted
    pub fn is_changed(&self) -> bool {
        self.pairs > 0
    }
}

/// Replace each pair's span with the output of `render`
///
/// `pairs` must be ordered and non-overlapping, as produced by
/// [`PairIter`](crate::domain::extractor::PairIter). The source is borrowed
/// back unchanged when there are no pairs.
pub fn rewrite<'t, I, F>(source: &'t str, pairs: I, mut render: F) -> Rewritten<'t>
where
    I: IntoIterator<Item = MatchedPair<'t>>,
    F: FnMut(&MatchedPair<'t>, &mut String),
{
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut count = 0;

    for pair in pairs {
        debug_assert!(pair.start >= last, "pairs must not overlap");
        let buf = out.get_or_insert_with(|| String::with_capacity(source.len() * 2));
        buf.push_str(&source[last..pair.start]);
        render(&pair, buf);
        last = pair.end;
        count += 1;
    }

    let text = match out {
        Some(mut buf) => {
            buf.push_str(&source[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(source),
    };

    Rewritten { text, pairs: count }
}
