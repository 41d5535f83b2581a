//! Add card handler for kanban MCP server

use crate::KanbanServerHandler;
use crate::kanban::CardDraft;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Creates a card in the first column from a title and 3 to 5 checklist items.
    pub async fn handle_add_card(&self, title: String, items: Vec<String>) -> McpResult<String> {
        let mut draft = CardDraft::from_parts(title, items);
        let title = draft.title.clone();

        let mut board = self.board.lock().unwrap();
        match draft.submit(&mut board) {
            Ok(()) => Ok(self.respond(&board, format!("Card '{}' added to the first column", title))),
            Err(e) => self.fail(&board, e),
        }
    }
}
