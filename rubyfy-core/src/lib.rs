//! Ruby (furigana) annotation for inline `{word}(reading)` pairs
//!
//! Authors mark a word and its pronunciation with configurable delimiters.
//! This crate finds every such pair in a text fragment, decides whether the
//! reading should be attached to the whole word or to each character, and
//! replaces the pair with `<ruby>` markup.
//!
//! # Architecture
//!
//! - **Domain layer**: delimiter grammar, pair extraction, reading
//!   alignment, markup rendering and span-based rewriting
//! - **Configuration**: serde/TOML configuration with strict and lenient
//!   loading
//! - **Engine**: [`Rubyfier`], which drives a [`FragmentSource`] into a
//!   [`FragmentSink`]
//!
//! # Example
//!
//! ```rust
//! use rubyfy_core::{RubyConfig, Rubyfier};
//!
//! let rubyfier = Rubyfier::new(RubyConfig::default()).unwrap();
//!
//! let html = rubyfier.rubyfy("{漢字}(かん.じ)");
//! assert_eq!(
//!     html,
//!     "<ruby>漢<rp>(</rp><rt>かん</rt><rp>)</rp></ruby>\
//!      <ruby>字<rp>(</rp><rt>じ</rt><rp>)</rp></ruby>"
//! );
//!
//! // Text without pairs is returned unchanged
//! assert_eq!(rubyfier.rubyfy("plain text"), "plain text");
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fragment;

pub use config::{AlignmentConfig, DelimiterSet, RubyConfig, ScopeConfig};
pub use domain::{AlignedPair, Alignment, MatchedPair, ReadingAligner};
pub use engine::{Rubyfier, RubyfierBuilder};
pub use error::{ConfigError, DelimiterRole, Result, RubyError};
pub use fragment::{Fragment, FragmentOutput, FragmentSink, FragmentSource, RunStats};

/// Annotate `text` with the default configuration
///
/// Builds a fresh engine on every call; keep a [`Rubyfier`] around when
/// annotating more than a handful of strings.
pub fn rubyfy(text: &str) -> Result<String> {
    let rubyfier = Rubyfier::new(RubyConfig::default())?;
    Ok(rubyfier.rubyfy(text).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_function() {
        assert_eq!(
            rubyfy("{店}(てん)").unwrap(),
            "<ruby>店<rp>(</rp><rt>てん</rt><rp>)</rp></ruby>"
        );
        assert_eq!(rubyfy("").unwrap(), "");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(RubyConfig::default().validate().is_ok());
        assert!(RubyConfig::ascii_brackets().validate().is_ok());
    }
}
