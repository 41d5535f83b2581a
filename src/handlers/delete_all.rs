//! Delete all handler for kanban MCP server

use crate::KanbanServerHandler;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Empties every column. `confirm` is the answer to the confirmation prompt.
    pub async fn handle_delete_all(&self, confirm: bool) -> McpResult<String> {
        // The answer is shared by all calls, so it is only set under the lock
        let mut board = self.board.lock().unwrap();
        self.notifier.answer_with(confirm);

        match board.delete_all() {
            Ok(true) => Ok(self.respond(&board, "Deleted every card".to_string())),
            Ok(false) => Ok(self.respond(&board, "Nothing deleted: not confirmed".to_string())),
            Err(e) => self.fail(&board, e),
        }
    }
}
