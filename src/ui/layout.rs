//! Token flow layout and hit testing
//!
//! Tokens are flowed left to right like text: a token that does not fit on
//! the remaining row wraps to the next one and `\n` forces a new row. The
//! same layout drives both rendering and mapping mouse cells back to token
//! indices, so what is drawn is what gets hit.

use crate::report::Token;
use unicode_width::UnicodeWidthStr;

/// Placement of one token, relative to the token area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCell {
    pub index: usize,
    pub row: usize,
    pub col: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Default)]
pub struct TokenLayout {
    cells: Vec<TokenCell>,
    rows: usize,
}

/// Text drawn for a token; control separators are normalized.
pub fn display_text(token: &Token) -> &str {
    match token.text.as_str() {
        "\t" => " ",
        "\r" | "\n" => "",
        text => text,
    }
}

fn display_width(token: &Token) -> u16 {
    UnicodeWidthStr::width(display_text(token)).min(u16::MAX as usize) as u16
}

pub fn layout_tokens(tokens: &[Token], width: u16) -> TokenLayout {
    let width = width.max(1);
    let mut cells = Vec::with_capacity(tokens.len());
    let mut row: usize = 0;
    let mut col: u16 = 0;

    for token in tokens {
        if token.text == "\n" {
            cells.push(TokenCell {
                index: token.index,
                row,
                col,
                width: 0,
            });
            row += 1;
            col = 0;
            continue;
        }

        let w = display_width(token);
        if col > 0 && col.saturating_add(w) > width {
            row += 1;
            col = 0;
        }

        cells.push(TokenCell {
            index: token.index,
            row,
            col,
            width: w,
        });
        col = col.saturating_add(w);
    }

    let rows = if tokens.is_empty() { 0 } else { row + 1 };
    TokenLayout { cells, rows }
}

impl TokenLayout {
    pub fn cells(&self) -> &[TokenCell] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cells on `row`, in column order.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &TokenCell> {
        let start = self.cells.partition_point(|c| c.row < row);
        self.cells[start..].iter().take_while(move |c| c.row == row)
    }

    /// Token index under the cell at `(col, row)`, if any.
    pub fn hit_test(&self, col: u16, row: usize) -> Option<usize> {
        self.row_cells(row)
            .find(|c| c.width > 0 && c.col <= col && u32::from(col) < u32::from(c.col) + u32::from(c.width))
            .map(|c| c.index)
    }
}
