use crate::engine::config::SelectionConfig;
use crate::report::selection::{SelectionError, SelectionModel, SelectionRange};
use crate::report::tokenizer::{join_range, tokenize};
use crate::report::Token;

/// A span of tokens marked as an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub range: SelectionRange,
    pub text: String,
}

/// One tokenized report with its selection gesture and annotated entities.
///
/// Created from the report text when the wizard enters the entities step;
/// dropped as a whole when the text changes.
pub struct ReportSession {
    tokens: Vec<Token>,
    selection: SelectionModel,
    entities: Vec<Entity>,
    config: SelectionConfig,
}

impl ReportSession {
    pub fn new(text: &str, config: SelectionConfig) -> Self {
        let tokens = tokenize(text);
        let selection = SelectionModel::new(tokens.len(), config.clone());
        Self {
            tokens,
            selection,
            entities: Vec::new(),
            config,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn press(&mut self, index: usize) -> Result<(), SelectionError> {
        self.selection.on_press(index)
    }

    pub fn drag_enter(&mut self, index: usize) -> Result<(), SelectionError> {
        self.selection.on_drag_enter(index)
    }

    pub fn release(&mut self) {
        self.selection.on_release();
    }

    /// Text covered by the current selection, if any.
    pub fn selected_text(&self) -> Option<String> {
        self.selection
            .range()
            .map(|r| join_range(&self.tokens, r.lo, r.hi))
    }

    /// Records the current selection as an entity and starts a fresh gesture.
    pub fn annotate(&mut self) -> Option<&Entity> {
        let range = self.selection.range()?;
        let entity = Entity {
            range,
            text: join_range(&self.tokens, range.lo, range.hi),
        };
        tracing::debug!(lo = range.lo, hi = range.hi, text = %entity.text, "entity annotated");

        self.entities.push(entity);
        self.selection = SelectionModel::new(self.tokens.len(), self.config.clone());
        self.entities.last()
    }

    pub fn is_in_entity(&self, index: usize) -> bool {
        self.entities.iter().any(|e| e.range.contains(index))
    }
}
