//! Common test utilities for integration tests
#![allow(dead_code)]

use kanban_mcp::storage::save_column;
use kanban_mcp::{Board, Card, ColumnId, KanbanServerHandler, MemoryStore, SessionNotifier};

/// Create a card with the first `done` of `total` items checked
pub fn card_with_done(title: &str, total: usize, done: usize) -> Card {
    let mut card = Card::new(title, (0..total).map(|i| format!("{} item {}", title, i)));
    for item in card.list.iter_mut().take(done) {
        item.done = true;
    }
    card
}

/// Create a store already holding the given columns
pub fn store_with(columns: [Vec<Card>; 3]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (column, cards) in ColumnId::ALL.into_iter().zip(columns.iter()) {
        save_column(&mut store, column, cards).unwrap();
    }
    store
}

/// Load a board from preset columns, returning the notifier it reports to
pub fn board_with(columns: [Vec<Card>; 3]) -> (Board, SessionNotifier) {
    let notifier = SessionNotifier::new();
    let board = Board::load(Box::new(store_with(columns)), Box::new(notifier.clone())).unwrap();
    (board, notifier)
}

/// Create an empty board
pub fn empty_board() -> (Board, SessionNotifier) {
    board_with([Vec::new(), Vec::new(), Vec::new()])
}

/// Create a test handler over an in-memory store
pub fn get_test_handler() -> KanbanServerHandler {
    KanbanServerHandler::with_store(Box::new(MemoryStore::new())).unwrap()
}

/// Titles of a column, in order
pub fn titles(board: &Board, column: ColumnId) -> Vec<String> {
    board.cards(column).iter().map(|c| c.title.clone()).collect()
}
