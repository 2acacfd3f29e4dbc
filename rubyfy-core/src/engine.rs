//! Annotation engine
//!
//! [`Rubyfier`] ties the compiled grammar, the alignment policy and the
//! fragment acceptance policy together. It is immutable after construction
//! and `Send + Sync`; every scan uses its own cursor.

use crate::config::{DelimiterSet, RubyConfig};
use crate::domain::{
    grammar::DelimiterGrammar,
    render::render_into,
    rewriter::{rewrite, Rewritten},
    AlignedPair, MatchedPair, PairIter, ReadingAligner,
};
use crate::error::Result;
use crate::fragment::{Fragment, FragmentOutput, FragmentSink, FragmentSource, RunStats};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Fragment acceptance predicate
pub type AcceptFn = dyn Fn(&str) -> bool + Send + Sync;

fn non_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Ruby annotation engine
#[derive(Clone)]
pub struct Rubyfier {
    config: RubyConfig,
    grammar: DelimiterGrammar,
    aligner: ReadingAligner,
    accept: Arc<AcceptFn>,
}

impl Rubyfier {
    /// Compile a configuration
    ///
    /// Configuration errors surface here, before any text is scanned.
    pub fn new(config: RubyConfig) -> Result<Self> {
        Self::with_accept(config, Arc::new(non_blank))
    }

    fn with_accept(config: RubyConfig, accept: Arc<AcceptFn>) -> Result<Self> {
        let grammar = DelimiterGrammar::build(&config.delimiters, &config.alignment.honorifics)?;
        let aligner = ReadingAligner::new(config.alignment.per_character);

        Ok(Self {
            config,
            grammar,
            aligner,
            accept,
        })
    }

    /// Start a builder
    pub fn builder() -> RubyfierBuilder {
        RubyfierBuilder::new()
    }

    /// The configuration this engine was built from
    pub fn config(&self) -> &RubyConfig {
        &self.config
    }

    /// The compiled delimiter grammar
    pub fn grammar(&self) -> &DelimiterGrammar {
        &self.grammar
    }

    /// Cheap check for at least one pair
    pub fn has_pairs(&self, text: &str) -> bool {
        self.grammar.has_pairs(text)
    }

    /// Iterate over the pairs of `text`
    pub fn pairs<'g, 't>(&'g self, text: &'t str) -> PairIter<'g, 't> {
        self.grammar.pairs(text)
    }

    /// Align one pair
    pub fn align<'t>(&self, pair: &MatchedPair<'t>) -> AlignedPair<'t> {
        self.aligner.align(pair, &self.grammar)
    }

    /// Annotate every pair in `text`
    ///
    /// Text without pairs is borrowed back unchanged.
    pub fn rubyfy<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.rewrite(text).text
    }

    /// Annotate every pair in `text` and report how many were found
    pub fn rewrite<'t>(&self, text: &'t str) -> Rewritten<'t> {
        rewrite(text, self.grammar.pairs(text), |pair, out| {
            let aligned = self.align(pair);
            log::trace!(
                "pair {:?} at {}..{}: {}",
                pair.word,
                pair.start,
                pair.end,
                if aligned.alignment.is_per_character() {
                    "per character"
                } else {
                    "block"
                }
            );
            render_into(out, &aligned);
        })
    }

    /// Annotate many independent texts
    #[cfg(feature = "parallel")]
    pub fn rubyfy_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.rubyfy(text.as_ref()).into_owned())
            .collect()
    }

    /// Annotate many independent texts
    #[cfg(not(feature = "parallel"))]
    pub fn rubyfy_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .iter()
            .map(|text| self.rubyfy(text.as_ref()).into_owned())
            .collect()
    }

    /// Whether a fragment is eligible for annotation
    pub fn accepts(&self, fragment: &Fragment) -> bool {
        if let Some(scope) = &fragment.scope {
            if self.config.is_excluded_scope(scope) {
                return false;
            }
        }
        (self.accept)(&fragment.text)
    }

    /// Drive a source through the engine into a sink
    ///
    /// Fragments reach the sink in source order. The first sink error stops
    /// the run.
    pub fn run<S, K>(&self, mut source: S, sink: &mut K) -> Result<RunStats>
    where
        S: FragmentSource,
        K: FragmentSink + ?Sized,
    {
        let mut stats = RunStats::default();

        while let Some(fragment) = source.next_fragment() {
            stats.fragments += 1;

            if !self.accepts(&fragment) {
                log::trace!("skipping fragment in scope {:?}", fragment.scope);
                stats.skipped += 1;
                sink.emit(&fragment, FragmentOutput::Skipped(&fragment.text))?;
                continue;
            }

            if !self.has_pairs(&fragment.text) {
                sink.emit(&fragment, FragmentOutput::Unchanged(&fragment.text))?;
                continue;
            }

            let rewritten = self.rewrite(&fragment.text);
            stats.pairs += rewritten.pairs;
            stats.rewritten += 1;
            let markup = rewritten.text.into_owned();
            sink.emit(&fragment, FragmentOutput::Rewritten(markup))?;
        }

        log::debug!(
            "annotated {} pairs in {} of {} fragments ({} skipped)",
            stats.pairs,
            stats.rewritten,
            stats.fragments,
            stats.skipped
        );
        Ok(stats)
    }
}

impl fmt::Debug for Rubyfier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rubyfier")
            .field("config", &self.config)
            .field("grammar", &self.grammar)
            .field("aligner", &self.aligner)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Rubyfier`]
pub struct RubyfierBuilder {
    config: RubyConfig,
    accept: Option<Arc<AcceptFn>>,
}

impl Default for RubyfierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RubyfierBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: RubyConfig::default(),
            accept: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: RubyConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace all delimiter sets
    pub fn delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.config.delimiters = delimiters;
        self
    }

    /// Set the word delimiters
    pub fn word_delimiters(
        mut self,
        opening: impl IntoIterator<Item = char>,
        closing: impl IntoIterator<Item = char>,
    ) -> Self {
        self.config.delimiters.word_opening = opening.into_iter().collect();
        self.config.delimiters.word_closing = closing.into_iter().collect();
        self
    }

    /// Set the reading delimiters
    pub fn reading_delimiters(
        mut self,
        opening: impl IntoIterator<Item = char>,
        closing: impl IntoIterator<Item = char>,
    ) -> Self {
        self.config.delimiters.reading_opening = opening.into_iter().collect();
        self.config.delimiters.reading_closing = closing.into_iter().collect();
        self
    }

    /// Set the reading segment delimiters
    pub fn segment_delimiters(mut self, segment: impl IntoIterator<Item = char>) -> Self {
        self.config.delimiters.reading_segment = segment.into_iter().collect();
        self
    }

    /// Enable or disable per-character alignment
    pub fn per_character(mut self, enabled: bool) -> Self {
        self.config.alignment.per_character = enabled;
        self
    }

    /// Set the honorific prefixes
    pub fn honorifics(mut self, honorifics: impl IntoIterator<Item = char>) -> Self {
        self.config.alignment.honorifics = honorifics.into_iter().collect();
        self
    }

    /// Set the opaque traversal root
    pub fn root_scope(mut self, root: impl Into<String>) -> Self {
        self.config.scope.root = Some(root.into());
        self
    }

    /// Set the excluded scope labels
    pub fn excluded_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.scope.excluded = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fragment acceptance predicate (default: non-blank text)
    pub fn accept<F>(mut self, accept: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let accept: Arc<AcceptFn> = Arc::new(accept);
        self.accept = Some(accept);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<Rubyfier> {
        let accept: Arc<AcceptFn> = match self.accept {
            Some(accept) => accept,
            None => Arc::new(non_blank),
        };
        Rubyfier::with_accept(self.config, accept)
    }
}
