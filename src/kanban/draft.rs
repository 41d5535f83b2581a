use crate::error::BoardResult;
use crate::kanban::board::Board;
use crate::kanban::card::{MAX_ITEMS, MIN_ITEMS};

/// Input state for a card that has not been created yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    items: Vec<String>,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            items: vec![String::new(); MIN_ITEMS],
        }
    }
}

impl CardDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from already-entered values
    ///
    /// The item count is not checked here; `Board::add_card` rejects drafts
    /// outside 3 to 5 items.
    pub fn from_parts(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Add a blank item slot; returns `false` at the maximum
    pub fn add_item(&mut self) -> bool {
        if self.items.len() >= MAX_ITEMS {
            return false;
        }
        self.items.push(String::new());
        true
    }

    /// Remove an item slot; returns `false` at the minimum or for a bad index
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= MIN_ITEMS || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Set the text of an item slot; returns `false` for a bad index
    pub fn set_item(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Clear back to a blank title and three blank slots
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create the card on the board, resetting the draft on success
    pub fn submit(&mut self, board: &mut Board) -> BoardResult<()> {
        board.add_card(&self.title, &self.items)?;
        self.reset();
        Ok(())
    }
}
