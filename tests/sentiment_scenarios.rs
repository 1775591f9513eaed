// tests/sentiment_scenarios.rs
// Sentiment scoring through the full pipeline, embedded and custom lexicons.

mod common;

use common::DictTokenizer;
use ja_text_analyzer::{Analyzer, AnalyzerConfig, Polarity, SentimentLexicon};

#[test]
fn embedded_lexicon_scores_a_pleasant_day() {
    let analyzer = Analyzer::with_defaults();
    let report = analyzer
        .analyze(&DictTokenizer::new(), "今日は素晴らしい天気で公園でとても楽しく遊び")
        .unwrap();

    // Kept tokens: 今日 素晴らしい 天気 公園 とても 楽しい(←楽しく) 遊ぶ(←遊び).
    assert_eq!(report.frequency.total_count, 7);
    assert_eq!(report.sentiment.positive_count, 2);
    assert_eq!(report.sentiment.negative_count, 0);
    assert_eq!(report.sentiment.neutral_count, 5);
    assert!((report.sentiment.score - 2.0 / 7.0).abs() < 1e-12);

    let words: Vec<(&str, Polarity)> = report
        .sentiment
        .sentiment_words
        .iter()
        .map(|w| (w.word.as_str(), w.polarity))
        .collect();
    assert_eq!(
        words,
        vec![
            ("素晴らしい", Polarity::Positive),
            ("楽しい", Polarity::Positive),
        ]
    );
}

#[test]
fn custom_lexicon_balances_positive_and_negative() {
    let lexicon = SentimentLexicon::new(
        vec!["良い".to_string()],
        vec!["悪い".to_string()],
    )
    .unwrap();
    let analyzer = Analyzer::new(AnalyzerConfig::default(), lexicon).unwrap();

    let report = analyzer
        .analyze(&DictTokenizer::new(), "良い天気。悪い天気。良い天気。")
        .unwrap();

    // Tokens: 良い 天気 悪い 天気 良い 天気.
    assert_eq!(report.sentiment.positive_count, 2);
    assert_eq!(report.sentiment.negative_count, 1);
    assert_eq!(report.sentiment.neutral_count, 3);
    assert!((report.sentiment.score - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn classification_uses_base_forms() {
    // 楽しく only matches the lexicon through its base form 楽しい.
    let analyzer = Analyzer::with_defaults();
    let report = analyzer
        .analyze(&DictTokenizer::new(), "公園でとても楽しく遊び")
        .unwrap();
    assert_eq!(report.sentiment.positive_count, 1);
    assert_eq!(report.sentiment.sentiment_words[0].word, "楽しい");
}
