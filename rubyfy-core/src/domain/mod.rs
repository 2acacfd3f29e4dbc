//! Pattern matching and alignment engine
//!
//! Leaf-first: [`grammar`] compiles the delimiter sets, [`extractor`] scans
//! for pairs, [`aligner`] chooses the annotation granularity, [`render`]
//! produces markup and [`rewriter`] splices it back at each matched span.

pub mod aligner;
pub mod escape;
pub mod extractor;
pub mod grammar;
pub mod render;
pub mod rewriter;
pub mod script;

pub use aligner::{AlignedPair, AlignedUnit, Alignment, ReadingAligner};
pub use escape::escape_markup;
pub use extractor::{MatchedPair, PairIter};
pub use grammar::DelimiterGrammar;
pub use rewriter::{rewrite, Rewritten};
pub use script::{contains_kana, is_kana};
