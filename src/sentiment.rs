// src/sentiment.rs
//! Lexicon-based sentiment scoring.
//!
//! Each token is classified once by base-form membership in the positive
//! or negative set; everything else is neutral. The aggregate score is
//! `(positive - negative) / total`, always in [-1, 1], and defined as 0
//! for empty input.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::token::Token;

static EMBEDDED_LEXICON: Lazy<SentimentLexicon> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    let file: LexiconFile = serde_json::from_str(raw).expect("valid sentiment lexicon");
    SentimentLexicon::new(file.positive, file.negative).expect("embedded lexicon sets are disjoint")
});

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Two disjoint sets of base forms. Overlap is a configuration defect and
/// is rejected at construction rather than tie-broken silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<I, J>(positive: I, negative: J) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let positive: HashSet<String> = positive.into_iter().collect();
        let negative: HashSet<String> = negative.into_iter().collect();

        let mut overlap: Vec<&str> = positive
            .intersection(&negative)
            .map(|s| s.as_str())
            .collect();
        if !overlap.is_empty() {
            overlap.sort_unstable();
            return Err(AnalysisError::invalid(format!(
                "sentiment lexicon entries appear in both polarity sets: {}",
                overlap.join(", ")
            )));
        }

        Ok(Self { positive, negative })
    }

    /// The built-in dictionary shipped with the crate.
    pub fn embedded() -> &'static SentimentLexicon {
        &EMBEDDED_LEXICON
    }

    fn polarity_of(&self, base_form: &str) -> Option<Polarity> {
        if self.positive.contains(base_form) {
            Some(Polarity::Positive)
        } else if self.negative.contains(base_form) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// A classified word, kept in token-encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentWord {
    pub word: String,
    pub polarity: Polarity,
}

/// Aggregate sentiment over one token sequence.
///
/// Counts are always present, even for empty input (all zero); ratios and
/// score are 0 when no tokens were seen, so the result is well-formed for
/// every input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    /// (positive - negative) / total, in [-1, 1]; 0 when total is 0.
    pub score: f64,
    pub sentiment_words: Vec<SentimentWord>,
}

/// Classify every token exactly once and aggregate.
pub fn score(tokens: &[Token], lexicon: &SentimentLexicon) -> SentimentResult {
    let mut positive_count = 0usize;
    let mut negative_count = 0usize;
    let mut neutral_count = 0usize;
    let mut sentiment_words = Vec::new();

    for token in tokens {
        match lexicon.polarity_of(&token.base_form) {
            Some(polarity) => {
                match polarity {
                    Polarity::Positive => positive_count += 1,
                    Polarity::Negative => negative_count += 1,
                }
                sentiment_words.push(SentimentWord {
                    word: token.base_form.clone(),
                    polarity,
                });
            }
            None => neutral_count += 1,
        }
    }

    let total = positive_count + negative_count + neutral_count;
    let (positive_ratio, negative_ratio, neutral_ratio, score) = if total > 0 {
        let t = total as f64;
        (
            positive_count as f64 / t,
            negative_count as f64 / t,
            neutral_count as f64 / t,
            (positive_count as f64 - negative_count as f64) / t,
        )
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };

    SentimentResult {
        positive_count,
        negative_count,
        neutral_count,
        positive_ratio,
        negative_ratio,
        neutral_ratio,
        score,
        sentiment_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(pos: &[&str], neg: &[&str]) -> SentimentLexicon {
        SentimentLexicon::new(
            pos.iter().map(|s| s.to_string()),
            neg.iter().map(|s| s.to_string()),
        )
        .unwrap()
    }

    fn tok(base: &str) -> Token {
        Token::new(base, "形容詞", base)
    }

    #[test]
    fn counts_partition_the_token_sequence() {
        let lexicon = lex(&["良い"], &["悪い"]);
        let tokens: Vec<Token> = ["良い", "悪い", "良い"].iter().map(|b| tok(b)).collect();
        let r = score(&tokens, &lexicon);

        assert_eq!(r.positive_count, 2);
        assert_eq!(r.negative_count, 1);
        assert_eq!(r.neutral_count, 0);
        assert_eq!(
            r.positive_count + r.negative_count + r.neutral_count,
            tokens.len()
        );
        assert!((r.score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sentiment_words_keep_encounter_order() {
        let lexicon = lex(&["良い"], &["悪い"]);
        let tokens: Vec<Token> = ["悪い", "普通", "良い"].iter().map(|b| tok(b)).collect();
        let r = score(&tokens, &lexicon);
        let words: Vec<(&str, Polarity)> = r
            .sentiment_words
            .iter()
            .map(|w| (w.word.as_str(), w.polarity))
            .collect();
        assert_eq!(
            words,
            vec![("悪い", Polarity::Negative), ("良い", Polarity::Positive)]
        );
        assert_eq!(r.neutral_count, 1);
    }

    #[test]
    fn empty_input_is_well_formed() {
        let r = score(&[], SentimentLexicon::embedded());
        assert_eq!(r.positive_count, 0);
        assert_eq!(r.negative_count, 0);
        assert_eq!(r.neutral_count, 0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.positive_ratio, 0.0);
        assert!(r.sentiment_words.is_empty());
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let lexicon = lex(&["良い"], &["悪い"]);
        let all_pos: Vec<Token> = ["良い", "良い"].iter().map(|b| tok(b)).collect();
        let all_neg: Vec<Token> = ["悪い", "悪い"].iter().map(|b| tok(b)).collect();
        assert_eq!(score(&all_pos, &lexicon).score, 1.0);
        assert_eq!(score(&all_neg, &lexicon).score, -1.0);
    }

    #[test]
    fn ratios_sum_to_one_when_nonempty() {
        let lexicon = lex(&["良い"], &["悪い"]);
        let tokens: Vec<Token> = ["良い", "悪い", "空", "山"]
            .iter()
            .map(|b| tok(b))
            .collect();
        let r = score(&tokens, &lexicon);
        let sum = r.positive_ratio + r.negative_ratio + r.neutral_ratio;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn overlapping_lexicon_is_rejected() {
        let err = SentimentLexicon::new(
            vec!["良い".to_string(), "妙".to_string()],
            vec!["妙".to_string()],
        )
        .unwrap_err();
        match err {
            AnalysisError::InvalidConfiguration(msg) => assert!(msg.contains("妙")),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn embedded_lexicon_loads_and_is_disjoint() {
        let lexicon = SentimentLexicon::embedded();
        assert_eq!(lexicon.polarity_of("良い"), Some(Polarity::Positive));
        assert_eq!(lexicon.polarity_of("悪い"), Some(Polarity::Negative));
        assert_eq!(lexicon.polarity_of("机"), None);
    }
}
