//! Click/drag selection over a tokenized report.
//!
//! The model is toolkit-agnostic: the view forwards press, drag-enter and
//! release events tagged with a token index, then restyles so that exactly
//! `current_selection()` is highlighted.

use crate::engine::config::SelectionConfig;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Token index {index} out of range (report has {len} tokens)")]
    OutOfRange { index: usize, len: usize },
}

/// Closed interval of token indices, always `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub lo: usize,
    pub hi: usize,
}

impl SelectionRange {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.lo <= index && index <= self.hi
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Anchored,
}

pub struct SelectionModel {
    token_count: usize,
    anchor: Option<usize>,
    active_range: Option<SelectionRange>,
    config: SelectionConfig,
}

impl SelectionModel {
    pub fn new(token_count: usize, config: SelectionConfig) -> Self {
        Self {
            token_count,
            anchor: None,
            active_range: None,
            config,
        }
    }

    pub fn new_with_default_config(token_count: usize) -> Self {
        Self::new(token_count, SelectionConfig::default())
    }

    fn check_index(&self, index: usize) -> Result<(), SelectionError> {
        if index >= self.token_count {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.token_count,
            });
        }
        Ok(())
    }

    /// Starts a new gesture at `index`.
    pub fn on_press(&mut self, index: usize) -> Result<(), SelectionError> {
        self.check_index(index)?;

        if self.config.keep_range_on_inner_press
            && self.active_range.is_some_and(|r| r.contains(index))
        {
            tracing::debug!(index, "press inside selection, range kept");
            return Ok(());
        }

        self.anchor = Some(index);
        self.active_range = Some(SelectionRange::new(index, index));
        tracing::debug!(index, "selection anchored");
        Ok(())
    }

    /// Extends the range from the anchor to `index`. No-op while idle.
    pub fn on_drag_enter(&mut self, index: usize) -> Result<(), SelectionError> {
        self.check_index(index)?;

        if let Some(anchor) = self.anchor {
            let range = SelectionRange::new(anchor, index);
            self.active_range = Some(range);
            tracing::debug!(anchor, lo = range.lo, hi = range.hi, "selection extended");
        }
        Ok(())
    }

    /// Ends the gesture; the range stays as the committed selection.
    pub fn on_release(&mut self) {
        if self.anchor.take().is_some() {
            tracing::debug!(range = ?self.active_range, "selection released");
        }
    }

    pub fn current_selection(&self) -> BTreeSet<usize> {
        match self.active_range {
            Some(range) => (range.lo..=range.hi).collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn range(&self) -> Option<SelectionRange> {
        self.active_range
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.anchor.is_some() {
            SelectionPhase::Anchored
        } else {
            SelectionPhase::Idle
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.active_range.is_some_and(|r| r.contains(index))
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }
}
