// src/analyzer.rs
//! The analysis pipeline: one text blob in, one report out.
//!
//! Data flows one way: raw text → filtered tokens → {frequency, sentiment},
//! and raw text (re-tokenized per sentence) → co-occurrence counts → ranked
//! network. Each run builds everything from scratch; the analyzer itself is
//! read-only after construction and safe to share across runs.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::cooccurrence;
use crate::error::AnalysisError;
use crate::filter::filter;
use crate::frequency::{frequencies, FrequencyReport};
use crate::network::{rank, NetworkGraph};
use crate::sentiment::{score, SentimentLexicon, SentimentResult};
use crate::token::Tokenize;

/// Full result of one analysis run. Plain serializable data for a
/// presentation layer; the core renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Characters in the raw input text.
    pub char_count: usize,
    pub frequency: FrequencyReport,
    pub sentiment: SentimentResult,
    /// `None` means no pair survived filtering — skip rendering.
    pub network: Option<NetworkGraph>,
}

/// Configured pipeline front end.
///
/// Construction validates configuration and lexicon up front, so `analyze`
/// can only fail at the tokenizer boundary. A failed run exposes no
/// partial results.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    lexicon: SentimentLexicon,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig, lexicon: SentimentLexicon) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    /// Embedded configuration and lexicon, both known valid.
    pub fn with_defaults() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            lexicon: SentimentLexicon::embedded().clone(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full pipeline over `text` with the given tokenizer.
    ///
    /// Deterministic: identical `(text, config, lexicon)` yields an
    /// identical report. Empty or whitespace-only text is not an error and
    /// produces a well-formed zero report with no graph.
    pub fn analyze(
        &self,
        tokenizer: &dyn Tokenize,
        text: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let char_count = text.chars().count();

        // Frequency/sentiment branch: whole-text tokenization, configurable filter.
        let raw_tokens = tokenizer.tokenize(text).map_err(AnalysisError::Tokenizer)?;
        let tokens = filter(raw_tokens, &self.config.filter);
        debug!(char_count, tokens = tokens.len(), "tokenized and filtered");

        let frequency = frequencies(&tokens);
        let sentiment = score(&tokens, &self.lexicon);

        // Co-occurrence branch: independent sentence-wise re-tokenization
        // with the fixed content-word allow-list.
        let (pairs, words) = cooccurrence::build(
            text,
            tokenizer,
            &self.config.filter,
            self.config.network.window_size,
            self.config.network.min_count,
        )?;
        let network = rank(&pairs, &words, self.config.network.top_n)?;

        info!(
            tokens = frequency.total_count,
            unique = frequency.unique_count,
            sentiment_score = sentiment.score,
            edges = network.as_ref().map(|g| g.edges.len()).unwrap_or(0),
            "analysis complete"
        );

        Ok(AnalysisReport {
            char_count,
            frequency,
            sentiment,
            network,
        })
    }
}
