use crate::report::{SeparatorSet, Token};

/// Splits report text into words and single-character separators.
///
/// Lossless: joining the token texts in order gives back `report`.
/// Never emits an empty word.
pub fn tokenize(report: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in report.char_indices() {
        if SeparatorSet::contains(c) {
            if start < i {
                tokens.push(Token::word(&report[start..i], tokens.len()));
            }
            tokens.push(Token::separator(c, tokens.len()));
            start = i + c.len_utf8();
        }
    }

    if start < report.len() {
        tokens.push(Token::word(&report[start..], tokens.len()));
    }

    tokens
}

/// Concatenates the texts of `tokens[lo..=hi]`.
pub fn join_range(tokens: &[Token], lo: usize, hi: usize) -> String {
    if lo > hi || hi >= tokens.len() {
        return String::new();
    }
    tokens[lo..=hi].iter().map(|t| t.text.as_str()).collect()
}
