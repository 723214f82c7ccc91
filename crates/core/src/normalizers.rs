//! Text normalizers
//!
//! Provides the `Normalizer` trait and the implementations used by the
//! preprocessing pipeline. Each normalizer is a pure `&str -> String`
//! transformation.

/// Trait for text normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize the input text
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Get metadata about this normalizer (e.g., configuration)
    fn metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Converts all text to lowercase
#[derive(Clone)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Whitespace as matched by the `\s` class and `trim` of ECMAScript.
///
/// Differs from [`char::is_whitespace`]: U+0085 is excluded, U+FEFF is
/// included.
pub fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Collapses runs of whitespace into a single space and trims both ends
#[derive(Clone, Default)]
pub struct WhitespaceNormalizer;

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        let source = input.trim_matches(is_js_whitespace);
        let mut normalized = String::with_capacity(source.len());
        let mut in_whitespace = false;

        for ch in source.chars() {
            if is_js_whitespace(ch) {
                if !in_whitespace {
                    normalized.push(' ');
                    in_whitespace = true;
                }
            } else {
                normalized.push(ch);
                in_whitespace = false;
            }
        }

        normalized
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}
