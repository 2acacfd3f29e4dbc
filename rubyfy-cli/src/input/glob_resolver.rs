//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve input patterns to sources
///
/// `-` selects standard input; every other pattern is a glob. Files are
/// sorted and deduplicated, with standard input first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            sources.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                sources.push(InputSource::File(path));
            }
        }
    }

    if sources.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    sources.sort();
    sources.dedup();

    Ok(sources)
}
