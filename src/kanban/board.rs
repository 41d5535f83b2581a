use anyhow::Result;

use crate::error::{BoardError, BoardResult};
use crate::kanban::card::{Card, CardPatch, MAX_ITEMS, MIN_ITEMS};
use crate::kanban::column::{ColumnId, FIRST_COLUMN_CAPACITY, SECOND_COLUMN_LIMIT};
use crate::kanban::lifecycle::{CardActions, CardHost, CheckOutcome};
use crate::notify::Notifier;
use crate::storage::{self, KeyValueStore};

/// The three-column board
///
/// Owns every card, the derived first-column block flag, the store the
/// columns are persisted to after each mutation, and the notifier used to
/// report rejected input.
pub struct Board {
    columns: [Vec<Card>; 3],
    block_first_column: bool,
    store: Box<dyn KeyValueStore>,
    notifier: Box<dyn Notifier>,
}

impl Board {
    /// Load the columns from the store; absent keys are empty columns
    ///
    /// The block flag always starts cleared and is first evaluated on the
    /// next move or check.
    pub fn load(store: Box<dyn KeyValueStore>, notifier: Box<dyn Notifier>) -> Result<Self> {
        let columns = [
            storage::load_column(store.as_ref(), ColumnId::Backlog)?,
            storage::load_column(store.as_ref(), ColumnId::InProgress)?,
            storage::load_column(store.as_ref(), ColumnId::Done)?,
        ];
        tracing::debug!(
            backlog = columns[0].len(),
            in_progress = columns[1].len(),
            done = columns[2].len(),
            "Loaded board"
        );
        Ok(Self {
            columns,
            block_first_column: false,
            store,
            notifier,
        })
    }

    /// Cards in a column, in order
    pub fn cards(&self, column: ColumnId) -> &[Card] {
        &self.columns[column.slot()]
    }

    /// Find a card by column and position
    pub fn card(&self, column: ColumnId, index: usize) -> Option<&Card> {
        self.columns[column.slot()].get(index)
    }

    /// Whether new cards and "move all" are currently refused
    pub fn block_first_column(&self) -> bool {
        self.block_first_column
    }

    /// Whether the checklist of the addressed card is locked
    pub fn is_card_blocked(&self, column: ColumnId, index: usize) -> bool {
        self.card(column, index)
            .is_some_and(|card| card_blocked(column, card, self.cards(ColumnId::InProgress).len()))
    }

    /// Total number of cards on the board
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Create a card in the first column
    ///
    /// Rejected when the first column is blocked, when the title or any item
    /// is blank, when there are not 3 to 5 items, or when the first column
    /// is at capacity.
    pub fn add_card<S: AsRef<str>>(&mut self, title: &str, items: &[S]) -> BoardResult<()> {
        if self.block_first_column {
            return Err(self.reject(BoardError::Blocked));
        }
        let items_valid = (MIN_ITEMS..=MAX_ITEMS).contains(&items.len())
            && items.iter().all(|item| !item.as_ref().trim().is_empty());
        if title.trim().is_empty() || !items_valid {
            return Err(self.reject(BoardError::InvalidCard));
        }
        if self.columns[ColumnId::Backlog.slot()].len() >= FIRST_COLUMN_CAPACITY {
            return Err(self.reject(BoardError::FirstColumnFull));
        }

        let card = Card::new(title, items.iter().map(|item| item.as_ref().to_string()));
        tracing::info!(title = %card.title, items = card.list.len(), "Added card");
        self.columns[ColumnId::Backlog.slot()].push(card);
        self.save()?;
        Ok(())
    }

    /// Move a card to the end of another column
    ///
    /// The remaining cards of the source column keep their relative order.
    pub fn move_card(&mut self, from: ColumnId, index: usize, to: ColumnId) -> BoardResult<()> {
        let source = &mut self.columns[from.slot()];
        if index >= source.len() {
            return Err(BoardError::CardNotFound { column: from, index });
        }
        let card = source.remove(index);
        tracing::info!(title = %card.title, from = from.number(), to = to.number(), "Moved card");
        self.columns[to.slot()].push(card);
        self.save()?;
        self.recompute_block_first_column();
        Ok(())
    }

    /// Merge fields into a card in place
    pub fn update_card(&mut self, index: usize, column: ColumnId, patch: CardPatch) -> BoardResult<()> {
        let card = self.columns[column.slot()]
            .get_mut(index)
            .ok_or(BoardError::CardNotFound { column, index })?;
        card.apply(patch);
        self.save()?;
        Ok(())
    }

    /// Move every card of the first two columns to the end of the last one
    ///
    /// Cards keep their order, first column before second. Returns the number
    /// of cards moved.
    pub fn move_all_to_last_column(&mut self) -> BoardResult<usize> {
        if self.block_first_column {
            return Err(self.reject(BoardError::Blocked));
        }
        let [backlog, in_progress, done] = &mut self.columns;
        let moved = backlog.len() + in_progress.len();
        done.append(backlog);
        done.append(in_progress);
        tracing::info!(moved, "Moved all cards to the last column");
        self.save()?;
        self.recompute_block_first_column();
        Ok(moved)
    }

    /// Empty every column after the user confirms
    ///
    /// Returns `false` and leaves the board untouched when the user declines.
    pub fn delete_all(&mut self) -> BoardResult<bool> {
        if !self
            .notifier
            .confirm("Are you sure you want to delete all notes? This cannot be undone.")
        {
            return Ok(false);
        }
        for column in &mut self.columns {
            column.clear();
        }
        tracing::info!("Deleted all cards");
        self.save()?;
        self.recompute_block_first_column();
        self.notifier.alert("All notes deleted.");
        Ok(true)
    }

    /// Re-evaluate the first-column block flag
    ///
    /// Sets when the second column holds at least 5 cards and some
    /// first-column card is more than half complete. Clears only when the
    /// second column drops below 5; otherwise the previous value is kept.
    pub fn recompute_block_first_column(&mut self) {
        let second_len = self.columns[ColumnId::InProgress.slot()].len();
        let progressing = self.columns[ColumnId::Backlog.slot()]
            .iter()
            .any(|card| card.completion() > 50);

        let previous = self.block_first_column;
        if second_len >= SECOND_COLUMN_LIMIT && progressing {
            self.block_first_column = true;
        } else if second_len < SECOND_COLUMN_LIMIT {
            self.block_first_column = false;
        }
        if previous != self.block_first_column {
            tracing::info!(blocked = self.block_first_column, "First column block changed");
        }
    }

    /// Check a checklist item, running completion stamping and promotion
    pub fn check_item(&mut self, column: ColumnId, index: usize, item: usize) -> BoardResult<CheckOutcome> {
        CardActions::new(self, column, index).check_item(item)
    }

    fn reject(&self, err: BoardError) -> BoardError {
        self.notifier.alert(&err.to_string());
        err
    }

    fn save(&mut self) -> Result<()> {
        for column in ColumnId::ALL {
            storage::save_column(self.store.as_mut(), column, &self.columns[column.slot()])?;
        }
        Ok(())
    }
}

impl CardHost for Board {
    fn card(&self, column: ColumnId, index: usize) -> Option<&Card> {
        Board::card(self, column, index)
    }

    fn second_column_len(&self) -> usize {
        self.cards(ColumnId::InProgress).len()
    }

    fn move_card(&mut self, from: ColumnId, index: usize, to: ColumnId) -> BoardResult<()> {
        Board::move_card(self, from, index, to)
    }

    fn update_card(&mut self, index: usize, column: ColumnId, patch: CardPatch) -> BoardResult<()> {
        Board::update_card(self, index, column, patch)
    }

    fn recompute_block_first_column(&mut self) {
        Board::recompute_block_first_column(self)
    }
}

/// Per-card lock: a first-column card that is not complete cannot be
/// checked while the second column is at its limit
pub(crate) fn card_blocked(column: ColumnId, card: &Card, second_column_len: usize) -> bool {
    column == ColumnId::Backlog && second_column_len >= SECOND_COLUMN_LIMIT && card.completion() < 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SessionNotifier;
    use crate::storage::MemoryStore;

    fn new_board() -> (Board, SessionNotifier) {
        let notifier = SessionNotifier::new();
        let board = Board::load(Box::new(MemoryStore::new()), Box::new(notifier.clone())).unwrap();
        (board, notifier)
    }

    fn add(board: &mut Board, title: &str) {
        board.add_card(title, &["one", "two", "three"]).unwrap();
    }

    fn checked_card(title: &str, total: usize, done: usize) -> Card {
        let mut card = Card::new(title, (0..total).map(|i| format!("{} {}", title, i)));
        for item in card.list.iter_mut().take(done) {
            item.done = true;
        }
        card
    }

    #[test]
    fn test_add_card_appends_to_first_column() {
        let (mut board, notifier) = new_board();
        board.add_card("Errands", &["post", "bank", "shop", "gym"]).unwrap();

        let cards = board.cards(ColumnId::Backlog);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Errands");
        assert_eq!(cards[0].list.len(), 4);
        assert!(cards[0].list.iter().all(|item| !item.done));
        assert!(cards[0].completed_at.is_none());
        assert!(notifier.take_alerts().is_empty());
    }

    #[test]
    fn test_add_card_rejects_blank_input() {
        let (mut board, notifier) = new_board();

        assert!(matches!(
            board.add_card("   ", &["a", "b", "c"]),
            Err(BoardError::InvalidCard)
        ));
        assert!(matches!(
            board.add_card("Title", &["a", " ", "c"]),
            Err(BoardError::InvalidCard)
        ));
        assert!(matches!(
            board.add_card("Title", &["a", "b"]),
            Err(BoardError::InvalidCard)
        ));
        assert!(matches!(
            board.add_card("Title", &["a", "b", "c", "d", "e", "f"]),
            Err(BoardError::InvalidCard)
        ));

        assert_eq!(board.card_count(), 0);
        assert_eq!(notifier.take_alerts().len(), 4);
    }

    #[test]
    fn test_add_card_rejects_fourth_card() {
        let (mut board, notifier) = new_board();
        add(&mut board, "A");
        add(&mut board, "B");
        add(&mut board, "C");

        let result = board.add_card("D", &["1", "2", "3"]);
        assert!(matches!(result, Err(BoardError::FirstColumnFull)));
        assert_eq!(board.cards(ColumnId::Backlog).len(), 3);
        assert_eq!(
            notifier.take_alerts(),
            vec!["The first column holds no more than 3 cards"]
        );
    }

    #[test]
    fn test_move_card_preserves_order() {
        let (mut board, _) = new_board();
        add(&mut board, "A");
        add(&mut board, "B");
        add(&mut board, "C");

        board.move_card(ColumnId::Backlog, 1, ColumnId::InProgress).unwrap();

        let titles: Vec<_> = board.cards(ColumnId::Backlog).iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(board.cards(ColumnId::InProgress)[0].title, "B");
    }

    #[test]
    fn test_move_card_out_of_range() {
        let (mut board, _) = new_board();
        let result = board.move_card(ColumnId::InProgress, 0, ColumnId::Done);
        assert!(matches!(
            result,
            Err(BoardError::CardNotFound { column: ColumnId::InProgress, index: 0 })
        ));
    }

    #[test]
    fn test_update_card_merges_fields() {
        let (mut board, _) = new_board();
        add(&mut board, "A");

        board
            .update_card(0, ColumnId::Backlog, CardPatch::completed_at("now"))
            .unwrap();
        let card = board.card(ColumnId::Backlog, 0).unwrap();
        assert_eq!(card.completed_at.as_deref(), Some("now"));
        assert_eq!(card.list.len(), 3);

        assert!(board
            .update_card(5, ColumnId::Backlog, CardPatch::default())
            .is_err());
    }

    #[test]
    fn test_move_all_to_last_column() {
        let (mut board, _) = new_board();
        board.columns[0] = vec![checked_card("X", 3, 0)];
        board.columns[1] = vec![checked_card("Y", 3, 2), checked_card("Z", 3, 2)];

        assert_eq!(board.move_all_to_last_column().unwrap(), 3);

        let titles: Vec<_> = board.cards(ColumnId::Done).iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["X", "Y", "Z"]);
        assert!(board.cards(ColumnId::Backlog).is_empty());
        assert!(board.cards(ColumnId::InProgress).is_empty());
    }

    #[test]
    fn test_delete_all_requires_confirmation() {
        let (mut board, notifier) = new_board();
        add(&mut board, "A");

        notifier.answer_with(false);
        assert!(!board.delete_all().unwrap());
        assert_eq!(board.card_count(), 1);
        assert!(notifier.take_alerts().is_empty());

        notifier.answer_with(true);
        assert!(board.delete_all().unwrap());
        assert_eq!(board.card_count(), 0);
        assert_eq!(notifier.take_alerts(), vec!["All notes deleted."]);
    }

    #[test]
    fn test_block_sets_with_full_second_column_and_progressing_card() {
        let (mut board, _) = new_board();
        board.columns[0] = vec![checked_card("P", 3, 2)];
        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();

        board.recompute_block_first_column();
        assert!(board.block_first_column());
    }

    #[test]
    fn test_block_not_set_without_progressing_card() {
        let (mut board, _) = new_board();
        board.columns[0] = vec![checked_card("P", 4, 2)];
        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();

        board.recompute_block_first_column();
        assert!(!board.block_first_column());
    }

    #[test]
    fn test_block_hysteresis_holds_until_second_column_shrinks() {
        let (mut board, _) = new_board();
        board.columns[0] = vec![checked_card("P", 3, 2)];
        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();
        board.recompute_block_first_column();
        assert!(board.block_first_column());

        // The qualifying card leaves the first column; the flag stays set
        // because the second column is still at its limit.
        board.move_card(ColumnId::Backlog, 0, ColumnId::Done).unwrap();
        assert!(board.block_first_column());

        board.move_card(ColumnId::InProgress, 0, ColumnId::Done).unwrap();
        assert!(!board.block_first_column());
    }

    #[test]
    fn test_blocked_board_rejects_add_and_move_all() {
        let (mut board, notifier) = new_board();
        board.columns[0] = vec![checked_card("P", 3, 2)];
        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();
        board.recompute_block_first_column();

        assert!(matches!(board.add_card("N", &["a", "b", "c"]), Err(BoardError::Blocked)));
        assert!(matches!(board.move_all_to_last_column(), Err(BoardError::Blocked)));
        assert_eq!(board.cards(ColumnId::Backlog).len(), 1);
        assert_eq!(notifier.take_alerts().len(), 2);
    }

    #[test]
    fn test_second_column_limit_not_enforced_on_insert() {
        let (mut board, _) = new_board();
        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();
        board.columns[0] = vec![checked_card("P", 3, 0)];

        board.move_card(ColumnId::Backlog, 0, ColumnId::InProgress).unwrap();
        assert_eq!(board.cards(ColumnId::InProgress).len(), 6);
    }

    #[test]
    fn test_is_card_blocked() {
        let (mut board, _) = new_board();
        board.columns[0] = vec![checked_card("P", 3, 1), checked_card("Q", 3, 3)];
        assert!(!board.is_card_blocked(ColumnId::Backlog, 0));

        board.columns[1] = (0..5).map(|i| checked_card(&format!("S{}", i), 3, 2)).collect();
        assert!(board.is_card_blocked(ColumnId::Backlog, 0));
        assert!(!board.is_card_blocked(ColumnId::Backlog, 1));
        assert!(!board.is_card_blocked(ColumnId::InProgress, 0));
        assert!(!board.is_card_blocked(ColumnId::Backlog, 9));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = MemoryStore::new();
        let mut board = Board::load(Box::new(store), Box::new(SessionNotifier::new())).unwrap();
        add(&mut board, "A");
        board.move_card(ColumnId::Backlog, 0, ColumnId::Done).unwrap();

        let saved = storage::load_column(board.store.as_ref(), ColumnId::Done).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "A");
        assert!(storage::load_column(board.store.as_ref(), ColumnId::Backlog)
            .unwrap()
            .is_empty());
    }
}
