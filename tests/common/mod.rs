// tests/common/mod.rs
// Shared fixture tokenizer: greedy longest-match over a tiny fixed
// dictionary, standing in for a real morphological engine behind the
// `Tokenize` boundary. Unknown characters become 未知語 tokens so the
// filters decide their fate, like an engine's unknown-word handling.

use ja_text_analyzer::{Token, Tokenize};

pub struct DictTokenizer {
    // (surface, pos, base), longest surfaces first.
    entries: Vec<(&'static str, &'static str, &'static str)>,
}

impl DictTokenizer {
    pub fn new() -> Self {
        let mut entries = vec![
            ("素晴らしい", "形容詞", "素晴らしい"),
            ("今日", "名詞", "今日"),
            ("明日", "名詞", "明日"),
            ("天気", "名詞", "天気"),
            ("公園", "名詞", "公園"),
            ("好き", "名詞", "好き"),
            ("良い", "形容詞", "良い"),
            ("悪い", "形容詞", "悪い"),
            ("楽しく", "形容詞", "楽しい"),
            ("とても", "副詞", "とても"),
            ("遊び", "動詞", "遊ぶ"),
            ("猫", "名詞", "猫"),
            ("犬", "名詞", "犬"),
            ("が", "助詞", "が"),
            ("は", "助詞", "は"),
            ("で", "助詞", "で"),
            ("と", "助詞", "と"),
        ];
        entries.sort_by_key(|(s, _, _)| std::cmp::Reverse(s.chars().count()));
        Self { entries }
    }
}

impl Tokenize for DictTokenizer {
    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<Token>> {
        let mut out = Vec::new();
        let mut rest = text;
        'outer: while let Some(c) = rest.chars().next() {
            if c.is_whitespace() {
                rest = &rest[c.len_utf8()..];
                continue;
            }
            for (surface, pos, base) in &self.entries {
                if let Some(tail) = rest.strip_prefix(surface) {
                    out.push(Token::new(*surface, *pos, *base));
                    rest = tail;
                    continue 'outer;
                }
            }
            out.push(Token::new(c.to_string(), "未知語", c.to_string()));
            rest = &rest[c.len_utf8()..];
        }
        Ok(out)
    }
}

/// Tokenizer that always fails; for error-propagation tests.
pub struct FailingTokenizer;

impl Tokenize for FailingTokenizer {
    fn tokenize(&self, _text: &str) -> anyhow::Result<Vec<Token>> {
        anyhow::bail!("morphological engine crashed")
    }
}
