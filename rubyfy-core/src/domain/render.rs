//! Ruby markup rendering
//!
//! Annotations use `<rp>` so that renderers without ruby support show
//! `base(reading)` instead.

use crate::domain::aligner::{AlignedPair, Alignment};
use crate::domain::escape::escape_markup;

/// Append `<ruby>base<rp>(</rp><rt>reading</rt><rp>)</rp></ruby>`
pub fn push_annotation(out: &mut String, base: &str, reading: &str) {
    out.push_str("<ruby>");
    out.push_str(&escape_markup(base));
    out.push_str("<rp>(</rp><rt>");
    out.push_str(&escape_markup(reading));
    out.push_str("</rt><rp>)</rp></ruby>");
}

/// Append the markup for an aligned pair
pub fn render_into(out: &mut String, aligned: &AlignedPair<'_>) {
    out.push_str(&escape_markup(aligned.prefix));

    match &aligned.alignment {
        Alignment::Block { word, reading } => push_annotation(out, word, reading),
        Alignment::Characters(units) => {
            let mut buf = [0u8; 4];
            for unit in units {
                let base = unit.base.encode_utf8(&mut buf);
                if unit.annotate {
                    push_annotation(out, base, &unit.reading);
                } else {
                    out.push_str(&escape_markup(base));
                }
            }
        }
    }
}

/// Render an aligned pair to a new string
pub fn render(aligned: &AlignedPair<'_>) -> String {
    let mut out = String::new();
    render_into(&mut out, aligned);
    out
}
