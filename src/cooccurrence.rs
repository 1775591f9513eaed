// src/cooccurrence.rs
//! Sentence-wise co-occurrence counting within a sliding window.
//!
//! The text is split into sentences, each sentence is tokenized and
//! filtered to content words (noun/verb/adjective), and every pair of
//! words within `window_size` positions of each other is counted under a
//! canonical (lexicographically sorted) key. The window never crosses a
//! sentence boundary.
//!
//! Word counts taken here reflect only this pass; they use a narrower
//! allow-list than the frequency analyzer and the two tallies may
//! legitimately diverge.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::filter::{filter, FilterConfig};
use crate::token::Tokenize;

/// Fixed content-word allow-list for this pass, independent of the
/// configurable frequency/sentiment filter.
const CONTENT_POS: [&str; 3] = ["名詞", "動詞", "形容詞"];

/// Sentence terminators: full stop variants and newline.
static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。．.\n]").expect("sentence regex"));

/// Split `text` into sentence units, skipping empty/whitespace-only ones.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// One canonical co-occurrence pair: `word1 <= word2` always holds, so
/// (A, B) and (B, A) collapse to the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub word1: String,
    pub word2: String,
    pub count: usize,
}

/// Pair counts in first-accumulation order. Order matters: the network
/// ranker's sort is stable, so ties keep this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PairCounts {
    entries: Vec<PairCount>,
    #[serde(skip)]
    index: HashMap<(String, String), usize>,
}

impl PairCounts {
    fn increment(&mut self, a: &str, b: &str) {
        let (w1, w2) = if a <= b { (a, b) } else { (b, a) };
        let key = (w1.to_string(), w2.to_string());
        match self.index.get(&key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(PairCount {
                    word1: w1.to_string(),
                    word2: w2.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Count for a pair in either orientation.
    pub fn get(&self, a: &str, b: &str) -> usize {
        let (w1, w2) = if a <= b { (a, b) } else { (b, a) };
        self.index
            .get(&(w1.to_string(), w2.to_string()))
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retain pairs whose count and both endpoint word counts reach
    /// `min_count`, preserving accumulation order.
    fn filtered(&self, words: &WordCounts, min_count: usize) -> PairCounts {
        let mut out = PairCounts::default();
        for p in &self.entries {
            if p.count >= min_count
                && words.get(&p.word1) >= min_count
                && words.get(&p.word2) >= min_count
            {
                out.index
                    .insert((p.word1.clone(), p.word2.clone()), out.entries.len());
                out.entries.push(p.clone());
            }
        }
        out
    }
}

/// Per-word occurrence counts from the co-occurrence pass only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCounts(HashMap<String, usize>);

impl WordCounts {
    fn increment(&mut self, word: &str) {
        *self.0.entry(word.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scan `text` sentence by sentence and accumulate windowed co-occurrence
/// counts plus per-word counts.
///
/// Both directions are counted: for every position pair (i, j) with
/// `0 < |i - j| <= window_size` inside one sentence, the canonical pair of
/// base forms accrues one increment. The returned pairs are already
/// filtered by `min_count` (on the pair and on both endpoints); the word
/// counts are returned unfiltered.
///
/// `shared` supplies the stop words and minimum surface length; its
/// part-of-speech allow-list is ignored in favor of the fixed content-word
/// list.
pub fn build(
    text: &str,
    tokenizer: &dyn Tokenize,
    shared: &FilterConfig,
    window_size: usize,
    min_count: usize,
) -> Result<(PairCounts, WordCounts), AnalysisError> {
    if window_size < 1 {
        return Err(AnalysisError::invalid("window_size must be at least 1"));
    }
    if min_count < 1 {
        return Err(AnalysisError::invalid("min_count must be at least 1"));
    }

    let content_filter = FilterConfig {
        allowed_parts_of_speech: CONTENT_POS.iter().map(|s| s.to_string()).collect(),
        stop_words: shared.stop_words.clone(),
        min_surface_length: shared.min_surface_length,
    };

    let mut pairs = PairCounts::default();
    let mut words = WordCounts::default();

    for sentence in split_sentences(text) {
        let tokens = tokenizer
            .tokenize(sentence)
            .map_err(AnalysisError::Tokenizer)?;
        let bases: Vec<String> = filter(tokens, &content_filter)
            .into_iter()
            .map(|t| t.base_form)
            .collect();

        for base in &bases {
            words.increment(base);
        }

        for i in 0..bases.len() {
            let start = i.saturating_sub(window_size);
            let end = bases.len().min(i + window_size + 1);
            for j in start..end {
                if j != i {
                    pairs.increment(&bases[i], &bases[j]);
                }
            }
        }
    }

    let filtered = pairs.filtered(&words, min_count);
    debug!(
        raw_pairs = pairs.len(),
        retained_pairs = filtered.len(),
        words = words.len(),
        window_size,
        min_count,
        "co-occurrence pass complete"
    );

    Ok((filtered, words))
}
