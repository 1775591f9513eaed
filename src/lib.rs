// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod config;
pub mod cooccurrence;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod network;
pub mod sentiment;
pub mod token;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{AnalysisReport, Analyzer};
pub use crate::config::{AnalyzerConfig, NetworkConfig};
pub use crate::error::AnalysisError;
pub use crate::filter::FilterConfig;
pub use crate::frequency::FrequencyReport;
pub use crate::network::NetworkGraph;
pub use crate::sentiment::{Polarity, SentimentLexicon, SentimentResult};
pub use crate::token::{TaggedTextTokenizer, Token, Tokenize};
