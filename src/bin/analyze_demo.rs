// src/bin/analyze_demo.rs
//! Demo: run the analysis pipeline over pre-tagged text from stdin and
//! print the report as JSON.
//!
//! Input format is the `TaggedTextTokenizer` one: whitespace-separated
//! `surface/pos/base` items, newlines as sentence breaks. Example:
//!
//! ```text
//! echo "天気/名詞/天気 素晴らしい/形容詞/素晴らしい" | cargo run --bin analyze_demo
//! ```

use std::io::Read;

use ja_text_analyzer::{Analyzer, TaggedTextTokenizer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let analyzer = Analyzer::with_defaults();
    let report = analyzer.analyze(&TaggedTextTokenizer, &text)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
