//! Move handlers for kanban MCP server

use crate::KanbanServerHandler;
use crate::error::BoardError;
use crate::kanban::{Board, ColumnId, FIRST_COLUMN_CAPACITY};
use crate::notify::Notifier;
use crate::validation;
use mcp_attr::Result as McpResult;

/// Check a manual move against the column rules automatic promotion never breaks
///
/// The last column is terminal, and the first column cannot receive a card
/// from elsewhere once it holds its capacity.
fn check_manual_move(board: &Board, from: ColumnId, to: ColumnId) -> Result<(), BoardError> {
    if from == ColumnId::Done {
        return Err(BoardError::LastColumnIsFinal);
    }
    if to == ColumnId::Backlog
        && from != ColumnId::Backlog
        && board.cards(ColumnId::Backlog).len() >= FIRST_COLUMN_CAPACITY
    {
        return Err(BoardError::FirstColumnFull);
    }
    Ok(())
}

impl KanbanServerHandler {
    /// Moves a card to the end of another column.
    pub async fn handle_move_card(
        &self,
        from_column: String,
        card: usize,
        to_column: String,
    ) -> McpResult<String> {
        let from = validation::parse_column(&from_column)?;
        let to = validation::parse_column(&to_column)?;

        let mut board = self.board.lock().unwrap();
        if let Err(e) = check_manual_move(&board, from, to) {
            self.notifier.alert(&e.to_string());
            return self.fail(&board, e);
        }

        match board.move_card(from, card, to) {
            Ok(()) => Ok(self.respond(&board, format!("Card {} moved from {} to {}", card, from, to))),
            Err(e) => self.fail(&board, e),
        }
    }

    /// Moves every card of the first two columns to the last one.
    pub async fn handle_move_all_to_last_column(&self) -> McpResult<String> {
        let mut board = self.board.lock().unwrap();
        match board.move_all_to_last_column() {
            Ok(moved) => Ok(self.respond(&board, format!("Moved {} card(s) to the last column", moved))),
            Err(e) => self.fail(&board, e),
        }
    }
}
