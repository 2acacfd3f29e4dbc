//! HTML output formatter

use super::{AnnotatedDocument, OutputFormatter};
use anyhow::Result;
use rubyfy_core::domain::escape_markup;
use std::io::Write;

/// HTML formatter - wraps documents in a minimal page
///
/// Each document becomes a `<section>`; blank lines separate paragraphs and
/// the lines of a paragraph are joined with `<br>`. Document text is emitted
/// as markup, so text outside pairs must already be valid HTML.
pub struct HtmlFormatter<W: Write> {
    writer: W,
    started: bool,
    document_count: usize,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
            document_count: 0,
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn start(&mut self) -> Result<()> {
        if !self.started {
            writeln!(self.writer, "<!DOCTYPE html>")?;
            writeln!(self.writer, "<html lang=\"ja\">")?;
            writeln!(self.writer, "<head><meta charset=\"utf-8\"><title>rubyfy</title></head>")?;
            writeln!(self.writer, "<body>")?;
            self.started = true;
        }
        Ok(())
    }
}

fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut result = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current);
    }

    result
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_document(&mut self, document: &AnnotatedDocument) -> Result<()> {
        self.start()?;
        self.document_count += 1;

        writeln!(
            self.writer,
            "<section data-source=\"{}\">",
            escape_markup(&document.name)
        )?;
        for paragraph in paragraphs(&document.text) {
            writeln!(self.writer, "<p>{}</p>", paragraph.join("<br>\n"))?;
        }
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.start()?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        log::debug!("wrote {} documents as HTML", self.document_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubyfy_core::RunStats;

    fn render(text: &str) -> String {
        let mut formatter = HtmlFormatter::new(Vec::new());
        formatter
            .format_document(&AnnotatedDocument {
                name: "a&b.md".to_string(),
                text: text.to_string(),
                stats: RunStats::default(),
            })
            .unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_paragraph_split() {
        assert_eq!(
            paragraphs("a\nb\n\n\nc\n"),
            vec![vec!["a", "b"], vec!["c"]]
        );
        assert!(paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_page_structure() {
        let html = render("<ruby>店<rp>(</rp><rt>てん</rt><rp>)</rp></ruby>\n\n次");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<section data-source=\"a&amp;b.md\">"));
        assert!(html.contains("<p><ruby>店<rp>(</rp><rt>てん</rt><rp>)</rp></ruby></p>"));
        assert!(html.contains("<p>次</p>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_empty_run_is_a_valid_page() {
        let mut formatter = HtmlFormatter::new(Vec::new());
        formatter.finish().unwrap();
        let html = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(html.contains("<body>"));
        assert!(html.contains("</body>"));
    }
}
