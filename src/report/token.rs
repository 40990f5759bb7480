/// Kind of a report token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// Token struct for report annotation.
///
/// Tokens are plain values; the view renders one element per token and
/// refers back to it by `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// 0-based position in the produced sequence.
    pub index: usize,
}

impl Token {
    pub fn word(text: &str, index: usize) -> Self {
        Self {
            text: text.to_string(),
            kind: TokenKind::Word,
            index,
        }
    }

    pub fn separator(c: char, index: usize) -> Self {
        Self {
            text: c.to_string(),
            kind: TokenKind::Separator,
            index,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }
}

/// Characters that always form their own single-character token.
pub struct SeparatorSet;

impl SeparatorSet {
    pub const CHARS: [char; 8] = ['\n', '\t', '\r', ' ', ',', '.', ';', '!'];

    pub fn contains(c: char) -> bool {
        Self::CHARS.contains(&c)
    }
}
