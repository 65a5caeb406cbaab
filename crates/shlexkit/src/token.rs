//! Lexed token carrying both processed and raw text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wordbreak::WordbreakKind;

/// A single token produced by a shell-style lexer.
///
/// Keeps the raw source spelling next to the processed value because
/// classification is keyed on what the user actually typed: quote removal
/// or expansion applied to `value` must not change how the operator is
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    /// Processed text, after any quote removal the lexer applied
    pub value: String,

    /// Raw source text, exactly as written
    pub raw_value: String,

    /// Byte offset in the source line where this token starts
    pub index: usize,
}

impl Token {
    /// Create a token from processed and raw text.
    pub fn new(value: impl Into<String>, raw_value: impl Into<String>, index: usize) -> Self {
        Self {
            value: value.into(),
            raw_value: raw_value.into(),
            index,
        }
    }

    /// Create an operator token, where the raw and processed text coincide.
    ///
    /// Operators cannot be quoted, so a lexer emitting one never rewrites
    /// its text.
    pub fn operator(raw: impl Into<String>, index: usize) -> Self {
        let raw = raw.into();
        Self {
            value: raw.clone(),
            raw_value: raw,
            index,
        }
    }

    /// Classify this token's raw text as a word-break operator.
    ///
    /// Always keyed on [`Token::raw_value`]; a token whose `value` was
    /// rewritten by quoting (`"|"` lexed to `|`) still classifies by its
    /// source spelling.
    pub fn wordbreak_kind(&self) -> WordbreakKind {
        WordbreakKind::classify(&self.raw_value)
    }
}
