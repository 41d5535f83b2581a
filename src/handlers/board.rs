//! Board view handler for kanban MCP server

use crate::KanbanServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Renders every column, card and checklist.
    pub async fn handle_board(&self) -> McpResult<String> {
        let board = self.board.lock().unwrap();
        Ok(formatting::format_board(&board))
    }
}
