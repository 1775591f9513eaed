// src/network.rs
//! Ranking co-occurrence pairs into a renderable graph structure.
//!
//! Plain data only: nodes, weighted edges, and per-node occurrence counts
//! for the presentation layer to size nodes with. Layout and drawing live
//! outside the core.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::cooccurrence::{PairCount, PairCounts, WordCounts};
use crate::error::AnalysisError;

/// One weighted, undirected edge; endpoints are canonically ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub word1: String,
    pub word2: String,
    pub weight: usize,
}

/// Weighted, undirected co-occurrence graph.
///
/// Built fresh per analysis run and never mutated afterwards. Every node
/// is an endpoint of at least one retained edge; a word filtered out of
/// every surviving pair is not a node regardless of its solo word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkGraph {
    pub nodes: BTreeSet<String>,
    /// Weight-descending; ties keep pair-accumulation order.
    pub edges: Vec<Edge>,
    /// Occurrence count (from the co-occurrence pass) for each node, for
    /// external rendering.
    pub occurrences: BTreeMap<String, usize>,
}

/// Rank filtered pairs by count descending, keep the top `top_n`, and
/// build the graph from the retained edges' endpoints.
///
/// Returns `Ok(None)` when no pair survived filtering — an explicit
/// "no graph" signal telling the caller to skip rendering, distinct from
/// an empty graph.
pub fn rank(
    pairs: &PairCounts,
    words: &WordCounts,
    top_n: usize,
) -> Result<Option<NetworkGraph>, AnalysisError> {
    if top_n < 1 {
        return Err(AnalysisError::invalid("top_n must be at least 1"));
    }
    if pairs.is_empty() {
        return Ok(None);
    }

    let mut ranked: Vec<&PairCount> = pairs.iter().collect();
    // Stable sort: equal counts stay in accumulation order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);

    let mut nodes = BTreeSet::new();
    let mut edges = Vec::with_capacity(ranked.len());
    for p in ranked {
        nodes.insert(p.word1.clone());
        nodes.insert(p.word2.clone());
        edges.push(Edge {
            word1: p.word1.clone(),
            word2: p.word2.clone(),
            weight: p.count,
        });
    }

    let occurrences: BTreeMap<String, usize> = nodes
        .iter()
        .map(|n| (n.clone(), words.get(n)))
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        top_n,
        "network ranked"
    );

    Ok(Some(NetworkGraph {
        nodes,
        edges,
        occurrences,
    }))
}
