//! Line fragments for plain text and Markdown documents
//!
//! Every line is one fragment. Lines inside a fenced code block, fences
//! included, carry the `CODE` scope so the default exclusions leave them
//! alone.

use rubyfy_core::{Fragment, FragmentOutput, FragmentSink};
use std::io;
use std::str::Split;

/// Scope label given to fenced code lines
pub const CODE_SCOPE: &str = "CODE";

/// Fragment source over the lines of a document
pub struct LineFragments<'a> {
    lines: Split<'a, char>,
    /// Marker of the open fence, if any
    fence: Option<&'static str>,
}

impl<'a> LineFragments<'a> {
    /// Split `text` on `\n`; a trailing newline yields a final empty line
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n'),
            fence: None,
        }
    }
}

fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

impl Iterator for LineFragments<'_> {
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        let line = self.lines.next()?;

        let in_code = match (self.fence, fence_marker(line)) {
            (None, Some(marker)) => {
                self.fence = Some(marker);
                true
            }
            (Some(open), Some(marker)) if open == marker => {
                self.fence = None;
                true
            }
            (Some(_), _) => true,
            (None, None) => false,
        };

        Some(if in_code {
            Fragment::scoped(line, CODE_SCOPE)
        } else {
            Fragment::new(line)
        })
    }
}

/// Sink that reassembles the lines of a document
#[derive(Debug, Default)]
pub struct LineSink {
    lines: Vec<String>,
}

impl LineSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the collected lines back with `\n`
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

impl FragmentSink for LineSink {
    fn emit(&mut self, _fragment: &Fragment, output: FragmentOutput<'_>) -> io::Result<()> {
        self.lines.push(match output {
            FragmentOutput::Rewritten(markup) => markup,
            other => other.as_str().to_string(),
        });
        Ok(())
    }
}
