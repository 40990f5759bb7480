use crate::app::mode::AppMode;
use crate::app::status::StatusMessage;
use crate::report::{Entity, ReportSession, Token};
use std::collections::BTreeSet;

/// Visual flags of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenStyle {
    pub selected: bool,
    pub anchor: bool,
    pub in_entity: bool,
}

/// Render state for UI components
pub struct RenderState {
    pub mode: AppMode,
    /// Wizard step shown behind the command deck
    pub step: AppMode,
    pub draft: String,
    pub source: Option<String>,
    pub tokens: Vec<Token>,
    pub selected: BTreeSet<usize>,
    pub anchor: Option<usize>,
    pub entities: Vec<Entity>,
    pub status: Option<StatusMessage>,
    pub command_buffer: String,
    pub scroll: usize,
}

impl RenderState {
    /// Create a render state for the edit step, before any tokenization
    pub fn empty(mode: AppMode, step: AppMode, draft: &str) -> Self {
        Self {
            mode,
            step,
            draft: draft.to_string(),
            source: None,
            tokens: vec![],
            selected: BTreeSet::new(),
            anchor: None,
            entities: vec![],
            status: None,
            command_buffer: String::new(),
            scroll: 0,
        }
    }

    /// Create render state from a tokenized report
    pub fn from_session(mode: AppMode, step: AppMode, draft: &str, session: &ReportSession) -> Self {
        Self {
            tokens: session.tokens().to_vec(),
            selected: session.selection().current_selection(),
            anchor: session.selection().anchor(),
            entities: session.entities().to_vec(),
            ..Self::empty(mode, step, draft)
        }
    }

    pub fn token_style(&self, index: usize) -> TokenStyle {
        TokenStyle {
            selected: self.selected.contains(&index),
            anchor: self.anchor == Some(index),
            in_entity: self.entities.iter().any(|e| e.range.contains(index)),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
