//! Markup escaping for annotation content

use std::borrow::Cow;

#[inline]
fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '/' => Some("&#x2F;"),
        _ => None,
    }
}

/// Escape the five reserved markup characters and `/`
///
/// Borrows the input when there is nothing to escape.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|ch| entity(ch).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match entity(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
