//! Checklist checks and column promotion
//!
//! A card never mutates the board directly. `CardActions` is built with a
//! handle to the owning board (anything implementing `CardHost`) and routes
//! every change through the host's move/update/recompute operations.

use crate::error::{BoardError, BoardResult};
use crate::kanban::board::card_blocked;
use crate::kanban::card::{Card, CardPatch, local_timestamp};
use crate::kanban::column::ColumnId;

/// Completion a first-column card must exceed to be promoted
pub const PROMOTE_FROM_FIRST_ABOVE: u32 = 50;

/// Board operations a card relies on
pub trait CardHost {
    /// Read access to a card
    fn card(&self, column: ColumnId, index: usize) -> Option<&Card>;

    /// Number of cards currently in the second column
    fn second_column_len(&self) -> usize;

    fn move_card(&mut self, from: ColumnId, index: usize, to: ColumnId) -> BoardResult<()>;

    fn update_card(&mut self, index: usize, column: ColumnId, patch: CardPatch) -> BoardResult<()>;

    fn recompute_block_first_column(&mut self);
}

/// Result of a check event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// `false` when the item was already done and nothing ran
    pub checked: bool,
    /// Completion after the check
    pub completion: u32,
    /// Whether this check stamped `completed_at`
    pub completed_now: bool,
    /// Column the card was promoted to, if any
    pub promoted_to: Option<ColumnId>,
}

/// Column a card should move to at the given completion, if any
pub fn promotion_target(column: ColumnId, completion: u32) -> Option<ColumnId> {
    match column {
        ColumnId::Backlog if completion > PROMOTE_FROM_FIRST_ABOVE => Some(ColumnId::InProgress),
        ColumnId::InProgress if completion == 100 => Some(ColumnId::Done),
        _ => None,
    }
}

/// Operations on one card, bound to its host board
pub struct CardActions<'a, H: CardHost + ?Sized> {
    host: &'a mut H,
    column: ColumnId,
    index: usize,
}

impl<'a, H: CardHost + ?Sized> CardActions<'a, H> {
    pub fn new(host: &'a mut H, column: ColumnId, index: usize) -> Self {
        Self { host, column, index }
    }

    fn card(&self) -> BoardResult<&Card> {
        self.host.card(self.column, self.index).ok_or(BoardError::CardNotFound {
            column: self.column,
            index: self.index,
        })
    }

    pub fn completion(&self) -> BoardResult<u32> {
        Ok(self.card()?.completion())
    }

    /// Whether checks on this card are refused
    pub fn is_blocked(&self) -> BoardResult<bool> {
        let card = self.card()?;
        Ok(card_blocked(self.column, card, self.host.second_column_len()))
    }

    /// Check one item
    ///
    /// Refused with `CardBlocked` while the card is locked. Checking an item
    /// that is already done changes nothing. Otherwise the item is marked
    /// done, the first transition to 100% stamps `completed_at`, the card is
    /// promoted if its column's threshold is crossed, and the host's block
    /// flag is re-evaluated.
    pub fn check_item(mut self, item: usize) -> BoardResult<CheckOutcome> {
        if self.is_blocked()? {
            return Err(BoardError::CardBlocked);
        }
        let mut card = self.card()?.clone();
        let Some(entry) = card.list.get_mut(item) else {
            return Err(BoardError::ItemNotFound { index: item });
        };
        if entry.done {
            return Ok(CheckOutcome {
                checked: false,
                completion: card.completion(),
                completed_now: false,
                promoted_to: None,
            });
        }
        entry.done = true;
        self.host
            .update_card(self.index, self.column, CardPatch::list(card.list.clone()))?;

        let completion = card.completion();
        let completed_now = completion == 100 && card.completed_at.is_none();
        if completed_now {
            self.host
                .update_card(self.index, self.column, CardPatch::completed_at(local_timestamp()))?;
            tracing::info!(title = %card.title, "Card completed");
        }

        let promoted_to = promotion_target(self.column, completion);
        if let Some(target) = promoted_to {
            self.host.move_card(self.column, self.index, target)?;
        }
        self.host.recompute_block_first_column();

        Ok(CheckOutcome {
            checked: true,
            completion,
            completed_now,
            promoted_to,
        })
    }
}
