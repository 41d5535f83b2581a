//! Checklist reorder handler for kanban MCP server

use crate::KanbanServerHandler;
use crate::kanban::ChecklistDrag;
use crate::validation;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Runs a complete drag gesture: picks up item `from` and drops it on item `to`.
    pub async fn handle_reorder_item(
        &self,
        column: String,
        card: usize,
        from: usize,
        to: usize,
    ) -> McpResult<String> {
        let column = validation::parse_column(&column)?;

        let mut drag = ChecklistDrag::new();
        drag.begin(from);
        let mut board = self.board.lock().unwrap();
        let result = if drag.over() {
            drag.drop(&mut *board, column, card, Some(to))
        } else {
            Ok(false)
        };
        drag.end();

        match result {
            Ok(true) => Ok(self.respond(&board, format!("Moved item {} to position {}", from, to))),
            Ok(false) => Ok(self.respond(
                &board,
                format!(
                    "Nothing moved: item {} or position {} is outside the checklist",
                    from, to
                ),
            )),
            Err(e) => self.fail(&board, e),
        }
    }
}
