// src/frequency.rs
//! Term frequency over base forms, with lexical richness.
//!
//! Counts here are taken over the frequency/sentiment filter set and can
//! legitimately diverge from the co-occurrence pass's word counts, which
//! use a narrower fixed allow-list (see `cooccurrence`). The two tallies
//! are deliberately kept as distinctly named outputs.

use std::collections::HashMap;

use serde::Serialize;

use crate::token::Token;

/// One ranked term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Ranked frequencies plus the summary statistics the caller displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    /// Count-descending; ties keep first-encounter order.
    pub ranking: Vec<TermCount>,
    /// Total tokens counted (after filtering).
    pub total_count: usize,
    /// Distinct base forms.
    pub unique_count: usize,
    /// unique / total. `None` when no tokens were counted — reported as
    /// "not applicable" rather than dividing by zero.
    pub lexical_richness: Option<f64>,
}

impl FrequencyReport {
    /// The `n` most frequent terms.
    pub fn top(&self, n: usize) -> &[TermCount] {
        &self.ranking[..self.ranking.len().min(n)]
    }
}

/// Count base forms in encounter order, then rank by count descending.
/// The sort is stable, so equal counts stay in first-encounter order.
pub fn frequencies(tokens: &[Token]) -> FrequencyReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranking: Vec<TermCount> = Vec::new();

    for token in tokens {
        match index.get(token.base_form.as_str()) {
            Some(&i) => ranking[i].count += 1,
            None => {
                index.insert(token.base_form.as_str(), ranking.len());
                ranking.push(TermCount {
                    term: token.base_form.clone(),
                    count: 1,
                });
            }
        }
    }

    let total_count = tokens.len();
    let unique_count = ranking.len();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));

    let lexical_richness = if total_count > 0 {
        Some(unique_count as f64 / total_count as f64)
    } else {
        None
    };

    FrequencyReport {
        ranking,
        total_count,
        unique_count,
        lexical_richness,
    }
}
