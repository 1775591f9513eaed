// src/filter.rs
//! Token filtering: part-of-speech allow-list, stop words, minimum length.
//!
//! Filtering is a pure function of `(Token, FilterConfig)` — no hidden
//! state, order-preserving, deterministic. The output is always a
//! subsequence of the input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Configuration for the token filter.
///
/// Deserialized from the `[filter]` table of the analysis TOML; see
/// `config/analysis.toml` for the shipped defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Parts of speech to keep. Empty means allow all.
    #[serde(default)]
    pub allowed_parts_of_speech: HashSet<String>,
    /// Base forms dropped outright.
    #[serde(default)]
    pub stop_words: HashSet<String>,
    /// Tokens whose surface has fewer characters than this are dropped.
    /// The shipped default of 2 excludes single-character noise.
    #[serde(default = "default_min_surface_length")]
    pub min_surface_length: usize,
}

fn default_min_surface_length() -> usize {
    1
}

impl Default for FilterConfig {
    /// Neutral filter: every part of speech allowed, no stop words,
    /// minimum length 1 (nothing pruned by length).
    fn default() -> Self {
        Self {
            allowed_parts_of_speech: HashSet::new(),
            stop_words: HashSet::new(),
            min_surface_length: 1,
        }
    }
}

impl FilterConfig {
    /// True when `token` survives all three rules.
    pub fn keeps(&self, token: &Token) -> bool {
        if !self.allowed_parts_of_speech.is_empty()
            && !self.allowed_parts_of_speech.contains(&token.part_of_speech)
        {
            return false;
        }
        if self.stop_words.contains(&token.base_form) {
            return false;
        }
        token.surface_chars() >= self.min_surface_length
    }
}

/// Apply `config` to `tokens`, preserving order.
pub fn filter(tokens: Vec<Token>, config: &FilterConfig) -> Vec<Token> {
    tokens.into_iter().filter(|t| config.keeps(t)).collect()
}
