//! Text normalization for extracted span content.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleans raw extracted text before it enters a section body.
///
/// Regexes are compiled once at construction and reused for every call.
pub struct TextNormalizer {
    whitespace: Regex,
    trailing_number: Regex,
    leading_nonword: Regex,
    bullets: Vec<Regex>,
}

impl TextNormalizer {
    /// Create a normalizer with pre-compiled patterns.
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
            // End-anchored on purpose: only a number that is the last
            // whitespace-delimited token is treated as a page-number artifact.
            trailing_number: Regex::new(r"\b\d+\s*$").unwrap(),
            leading_nonword: Regex::new(r"^\W*").unwrap(),
            bullets: vec![
                Regex::new(r"^\u{2022}\s+").unwrap(),
                Regex::new(r"^-\s+").unwrap(),
                Regex::new(r"^\*\s+").unwrap(),
                Regex::new(r"^\d+\.\s+").unwrap(),
                Regex::new(r"(?i)^[a-z]\.\s+").unwrap(),
                Regex::new(r"(?i)^[ivxlcdm]+\.\s+").unwrap(),
                Regex::new(r"(?i)^\([a-z0-9]+\)\s+").unwrap(),
            ],
        }
    }

    /// Clean a piece of raw extracted text.
    ///
    /// Collapses whitespace runs (including newlines) to single spaces,
    /// strips one trailing standalone integer token, strips any leading run
    /// of non-word characters, and trims. Never fails; empty or
    /// whitespace-only input yields an empty string.
    pub fn clean(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        let text = self.whitespace.replace_all(&text, " ");
        let text = self.trailing_number.replace(&text, "");
        let text = self.leading_nonword.replace(&text, "");
        text.trim().to_string()
    }

    /// Whether the text starts with a bullet or enumeration marker.
    ///
    /// Recognizes bullet glyphs, `-`, `*`, `1.`, `a.`, lowercase roman
    /// numerals, and parenthesized tokens like `(a)` or `(12)`, each
    /// followed by whitespace.
    pub fn is_bullet(&self, text: &str) -> bool {
        self.bullets.iter().any(|p| p.is_match(text))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace() {
        let n = TextNormalizer::new();
        assert_eq!(n.clean("a  b\n\tc"), "a b c");
        assert!(!n.clean("x \n y \t\t z").contains("  "));
    }

    #[test]
    fn test_clean_strips_trailing_number() {
        let n = TextNormalizer::new();
        assert_eq!(n.clean("Introduction 12"), "Introduction");
        assert_eq!(n.clean("Results   7  "), "Results");
    }

    #[test]
    fn test_clean_keeps_mid_string_numbers() {
        let n = TextNormalizer::new();
        assert_eq!(n.clean("chapter 3 overview"), "chapter 3 overview");
    }

    #[test]
    fn test_clean_trailing_number_glued_to_word_survives() {
        // "v2" has no word boundary before the digits, so nothing is stripped.
        let n = TextNormalizer::new();
        assert_eq!(n.clean("spec v2"), "spec v2");
    }

    #[test]
    fn test_clean_strips_leading_punctuation() {
        let n = TextNormalizer::new();
        assert_eq!(n.clean("\u{2022} item one"), "item one");
        assert_eq!(n.clean("--- heading"), "heading");
        let cleaned = n.clean("*** note about setup");
        assert!(cleaned.starts_with("note"));
    }

    #[test]
    fn test_clean_empty_and_whitespace_only() {
        let n = TextNormalizer::new();
        assert_eq!(n.clean(""), "");
        assert_eq!(n.clean("   \n\t "), "");
    }

    #[test]
    fn test_clean_output_never_starts_with_nonword() {
        let n = TextNormalizer::new();
        for input in ["...abc", "  !x", "\u{2022}\u{2022} y", "(z) w", "plain"] {
            let cleaned = n.clean(input);
            if let Some(first) = cleaned.chars().next() {
                assert!(
                    first.is_alphanumeric() || first == '_',
                    "{:?} cleaned to {:?}",
                    input,
                    cleaned
                );
            }
        }
    }

    #[test]
    fn test_is_bullet_patterns() {
        let n = TextNormalizer::new();
        assert!(n.is_bullet("\u{2022} first"));
        assert!(n.is_bullet("- dash item"));
        assert!(n.is_bullet("* star item"));
        assert!(n.is_bullet("3. numbered"));
        assert!(n.is_bullet("a. lettered"));
        assert!(n.is_bullet("iv. roman"));
        assert!(n.is_bullet("(b) parenthesized"));
        assert!(n.is_bullet("(12) parenthesized number"));
    }

    #[test]
    fn test_is_bullet_rejects_plain_text() {
        let n = TextNormalizer::new();
        assert!(!n.is_bullet("plain sentence"));
        assert!(!n.is_bullet("3.2 decimal heading"));
        assert!(!n.is_bullet("-nospace"));
    }
}
