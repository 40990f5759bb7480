pub mod selection;
pub mod session;
pub mod token;
pub mod tokenizer;

pub use selection::{SelectionError, SelectionModel, SelectionPhase, SelectionRange};
pub use session::{Entity, ReportSession};
pub use token::{SeparatorSet, Token, TokenKind};
pub use tokenizer::{join_range, tokenize};
