//! Kana classification
//!
//! Kana characters always receive their own annotation in per-character
//! mode, and a word or reading containing kana disables the
//! equal-length shortcut of the aligner.
//!
//! - Hiragana: U+3041..=U+3096
//! - Katakana (with the double hyphen and middle dot): U+30A0..=U+30FF
//! - Half-width forms and katakana: U+FF5F..=U+FF9F

/// Check if a character belongs to the kana class
#[inline]
pub fn is_kana(ch: char) -> bool {
    matches!(
        ch,
        '\u{3041}'..='\u{3096}' | '\u{30A0}'..='\u{30FF}' | '\u{FF5F}'..='\u{FF9F}'
    )
}

/// Check if any character of `text` is kana
#[inline]
pub fn contains_kana(text: &str) -> bool {
    text.chars().any(is_kana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana() {
        assert!(is_kana('ぁ'));
        assert!(is_kana('ひ'));
        assert!(is_kana('ゖ'));
        // Combining marks and iteration marks sit outside the range
        assert!(!is_kana('\u{3099}'));
        assert!(!is_kana('ゝ'));
    }

    #[test]
    fn test_katakana() {
        assert!(is_kana('カ'));
        assert!(is_kana('ー'));
        assert!(is_kana('・'));
        assert!(is_kana('ヿ'));
    }

    #[test]
    fn test_half_width() {
        assert!(is_kana('ｶ'));
        assert!(is_kana('ﾟ'));
        assert!(is_kana('ｦ'));
    }

    #[test]
    fn test_non_kana() {
        for ch in ['漢', 'A', 'z', '1', '。', '、', '　', 'Ａ'] {
            assert!(!is_kana(ch), "{ch} should not be kana");
        }
    }

    #[test]
    fn test_contains_kana() {
        assert!(contains_kana("東京タワー"));
        assert!(contains_kana("しごと"));
        assert!(!contains_kana("東京"));
        assert!(!contains_kana("hello"));
        assert!(!contains_kana(""));
    }
}
