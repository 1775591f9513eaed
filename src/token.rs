// src/token.rs
//! Morphological token model and the pluggable tokenizer boundary.
//!
//! The core never talks to a linguistic engine directly. It depends only on
//! the `Tokenize` capability: raw text in, ordered `(surface, part of
//! speech, base form)` triples out. Any engine (MeCab/Janome bindings, a
//! remote service, a test fixture) can sit behind it.

use serde::{Deserialize, Serialize};

/// One morphological token as produced by the tokenizer adapter.
/// Immutable once created; all downstream components consume it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the text.
    pub surface: String,
    /// Part-of-speech tag attached by the tokenizer (e.g. 名詞, 動詞).
    pub part_of_speech: String,
    /// Dictionary/lemma form; the canonical key for counting and lexicon lookup.
    pub base_form: String,
}

impl Token {
    pub fn new(
        surface: impl Into<String>,
        part_of_speech: impl Into<String>,
        base_form: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            part_of_speech: part_of_speech.into(),
            base_form: base_form.into(),
        }
    }

    /// Surface length in characters, not bytes. Japanese text makes the
    /// distinction matter: "猫" is one character but three bytes.
    pub fn surface_chars(&self) -> usize {
        self.surface.chars().count()
    }
}

/// The tokenizer capability the core depends on.
///
/// Implementations are treated as blocking black boxes; errors are
/// propagated verbatim and never retried here.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<Token>>;
}

/// Reference adapter that parses pre-tagged text instead of running a
/// morphological engine.
///
/// Input is whitespace-separated items of the form `surface/pos/base`;
/// `pos` and `base` may be omitted (`base` defaults to the surface, `pos`
/// to 未知語). Used by the demo binary and the integration tests; real
/// deployments plug in an actual engine behind `Tokenize`.
#[derive(Debug, Clone, Default)]
pub struct TaggedTextTokenizer;

impl Tokenize for TaggedTextTokenizer {
    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<Token>> {
        let mut out = Vec::new();
        for item in text.split_whitespace() {
            let mut parts = item.splitn(3, '/');
            let surface = match parts.next() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            let pos = parts.next().filter(|p| !p.is_empty()).unwrap_or("未知語");
            let base = parts.next().filter(|b| !b.is_empty()).unwrap_or(surface);
            out.push(Token::new(surface, pos, base));
        }
        Ok(out)
    }
}
