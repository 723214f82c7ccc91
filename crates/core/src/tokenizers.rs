//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and one implementation per [`Granularity`].
//! Each token carries the separator that follows it when output is
//! reconstructed, so the aligner never needs to know which mode produced it.

use crate::config::Granularity;
use crate::normalizers::is_js_whitespace;

/// Represents a single comparable unit of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text (from the normalized input)
    pub text: String,

    /// Separator appended when rendering this token
    pub separator: &'static str,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, separator: &'static str) -> Self {
        Self {
            text: text.into(),
            separator,
        }
    }

    /// The token text followed by its separator
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.separator.len());
        out.push_str(&self.text);
        out.push_str(self.separator);
        out
    }
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Tokenize already-normalized text.
    ///
    /// Empty input yields no tokens.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Separator attached to every token this tokenizer produces
    fn separator(&self) -> &'static str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl Granularity {
    /// The tokenizer for this granularity
    pub fn tokenizer(&self) -> Box<dyn Tokenizer> {
        match self {
            Granularity::Character => Box::new(CharacterTokenizer),
            Granularity::Word => Box::new(WordTokenizer),
            Granularity::Line => Box::new(LineTokenizer),
        }
    }

    /// Separator used between tokens of this granularity
    pub fn separator(&self) -> &'static str {
        match self {
            Granularity::Character => "",
            Granularity::Word => " ",
            Granularity::Line => "\n",
        }
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Character-level tokenizer (one token per Unicode scalar value)
///
/// Tokens are `char`s, not UTF-16 code units. A character outside the Basic
/// Multilingual Plane is a single token, so `"😀"` against `"😃"` is one
/// Removed and one Added segment rather than a shared leading surrogate
/// followed by a changed trailing one.
#[derive(Clone)]
pub struct CharacterTokenizer;

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.chars()
            .map(|ch| Token::new(ch.to_string(), self.separator()))
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn separator(&self) -> &'static str {
        ""
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Word tokenizer (splits on runs of whitespace, drops empty pieces)
///
/// Whitespace is the ECMAScript `\s` class, see [`is_js_whitespace`].
#[derive(Clone)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(is_js_whitespace)
            .filter(|word| !word.is_empty())
            .map(|word| Token::new(word, self.separator()))
            .collect()
    }

    fn name(&self) -> &str {
        "word"
    }

    fn separator(&self) -> &'static str {
        " "
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Line tokenizer (splits on `'\n'`)
///
/// Empty lines are kept, including the one after a trailing newline. A
/// `'\r'` before the newline stays part of the line.
#[derive(Clone)]
pub struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }

        text.split('\n')
            .map(|line| Token::new(line, self.separator()))
            .collect()
    }

    fn name(&self) -> &str {
        "line"
    }

    fn separator(&self) -> &'static str {
        "\n"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
