//! Error types
//!
//! Only configuration can fail. Scanning, alignment and rendering are total
//! over well-formed strings; text without pairs is returned unchanged.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Role of a boundary delimiter in the pair grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterRole {
    /// Opens the word part, `{` by default
    WordOpening,
    /// Closes the word part, `}` by default
    WordClosing,
    /// Opens the reading part, `(` by default
    ReadingOpening,
    /// Closes the reading part, `)` by default
    ReadingClosing,
}

impl DelimiterRole {
    /// All boundary roles, in pattern order
    pub const ALL: [DelimiterRole; 4] = [
        DelimiterRole::WordOpening,
        DelimiterRole::WordClosing,
        DelimiterRole::ReadingOpening,
        DelimiterRole::ReadingClosing,
    ];
}

impl fmt::Display for DelimiterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DelimiterRole::WordOpening => "word opening",
            DelimiterRole::WordClosing => "word closing",
            DelimiterRole::ReadingOpening => "reading opening",
            DelimiterRole::ReadingClosing => "reading closing",
        };
        f.write_str(name)
    }
}

/// Configuration loading or validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boundary delimiter set has no characters
    #[error("no {0} delimiters configured")]
    EmptyDelimiterSet(DelimiterRole),

    /// The same character was configured for two boundary roles
    #[error("delimiter {ch:?} is configured as both {first} and {second}")]
    ConflictingDelimiter {
        /// The offending character
        ch: char,
        /// Role it was first seen in
        first: DelimiterRole,
        /// Role it conflicts with
        second: DelimiterRole,
    },

    /// The assembled pattern was rejected by the regex engine
    #[error("failed to compile delimiter grammar: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed TOML or a strict-mode schema violation
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Top-level error for engine operations
#[derive(Debug, Error)]
pub enum RubyError {
    /// Invalid configuration, reported before any text is scanned
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A fragment sink failed to accept output
    #[error("fragment sink failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, RubyError>;
