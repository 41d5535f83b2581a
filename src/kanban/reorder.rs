//! Drag-and-drop reordering of a card's checklist

use crate::error::{BoardError, BoardResult};
use crate::kanban::card::CardPatch;
use crate::kanban::column::ColumnId;
use crate::kanban::lifecycle::CardHost;

/// Move one element to a new position, shifting everything in between
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let item = list.remove(from);
    list.insert(to, item);
}

/// State of a drag gesture over one card's checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistDrag {
    source: Option<usize>,
}

impl ChecklistDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index recorded by `begin`, if a drag is in progress
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn begin(&mut self, index: usize) {
        self.source = Some(index);
    }

    /// Signal that the pointer is over a candidate item
    ///
    /// Changes nothing; reports whether a drop there would be accepted.
    pub fn over(&self) -> bool {
        self.source.is_some()
    }

    /// Drop onto the item at `target`
    ///
    /// Moves the recorded item to `target` and persists the list through the
    /// host, even when the item is dropped onto itself. Without a recorded
    /// source, or when either index is outside the checklist, nothing
    /// happens. Returns whether the list was written.
    pub fn drop<H: CardHost + ?Sized>(
        &mut self,
        host: &mut H,
        column: ColumnId,
        card: usize,
        target: Option<usize>,
    ) -> BoardResult<bool> {
        let (Some(source), Some(target)) = (self.source.take(), target) else {
            return Ok(false);
        };
        let mut list = host
            .card(column, card)
            .ok_or(BoardError::CardNotFound { column, index: card })?
            .list
            .clone();
        if source >= list.len() || target >= list.len() {
            return Ok(false);
        }
        move_item(&mut list, source, target);
        host.update_card(card, column, CardPatch::list(list))?;
        Ok(true)
    }

    /// Finish or cancel the gesture
    pub fn end(&mut self) {
        self.source = None;
    }
}
