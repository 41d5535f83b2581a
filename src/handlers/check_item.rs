//! Check item handler for kanban MCP server

use crate::KanbanServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl KanbanServerHandler {
    /// Marks a checklist item done, then applies completion stamping and promotion.
    pub async fn handle_check_item(
        &self,
        column: String,
        card: usize,
        item: usize,
    ) -> McpResult<String> {
        let column = validation::parse_column(&column)?;

        let mut board = self.board.lock().unwrap();
        let outcome = match board.check_item(column, card, item) {
            Ok(outcome) => outcome,
            Err(e) => return self.fail(&board, e),
        };

        if !outcome.checked {
            return Ok(self.respond(&board, format!("Item {} is already done", item)));
        }

        let mut response = format!("Item {} checked, card is {}% complete", item, outcome.completion);
        if outcome.completed_now {
            response.push_str("\nCard completed");
        }
        if let Some(target) = outcome.promoted_to {
            response.push_str(&format!("\nCard moved to {}", target));
        }
        Ok(self.respond(&board, response))
    }
}
