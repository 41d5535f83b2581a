//! Kanban MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! three-column kanban note board. Each card carries a checklist of 3 to 5
//! items; checking items drives the card from column to column.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `KanbanServerHandler` - Exposes board operations as MCP tools
//! - **Domain Layer**: `kanban` module - Cards, columns, board rules and promotion
//! - **Persistence Layer**: `storage` module - Key-value store holding one entry per column
//!
//! # Rules
//!
//! - New cards enter column 1, which holds at most 3 cards.
//! - A column-1 card more than 50% complete moves to column 2.
//! - A column-2 card at 100% moves to column 3, which is terminal.
//! - While column 2 holds 5 or more cards and a column-1 card is past 50%,
//!   the first column is blocked: no new cards and no "move all".
//!
//! # Example
//!
//! ```no_run
//! use kanban_mcp::KanbanServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = KanbanServerHandler::new("board.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
pub mod handlers;
pub mod kanban;
pub mod notify;
pub mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::Mutex;

// Re-export commonly used types
pub use error::{BoardError, BoardResult};
pub use kanban::{Board, Card, CardDraft, CardPatch, ChecklistDrag, ChecklistItem, ColumnId};
pub use notify::{LogNotifier, Notifier, SessionNotifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// MCP Server handler for the kanban board
///
/// Owns the board behind a mutex. Every mutation is persisted by the board
/// itself before the tool call returns.
pub struct KanbanServerHandler {
    pub(crate) board: Mutex<Board>,
    pub(crate) notifier: SessionNotifier,
}

impl KanbanServerHandler {
    /// Create a handler backed by a board file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the board file (TOML, created on first save)
    ///
    /// # Example
    /// ```no_run
    /// # use kanban_mcp::KanbanServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = KanbanServerHandler::new("board.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let store = FileStore::open(storage_path)?;
        tracing::info!("Using board file {}", storage_path);
        Self::with_store(Box::new(store))
    }

    /// Create a handler over any key-value store
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let notifier = SessionNotifier::new();
        let board = Board::load(store, Box::new(notifier.clone()))?;
        Ok(Self {
            board: Mutex::new(board),
            notifier,
        })
    }

    /// Append alerts raised during the call to a successful response
    ///
    /// Takes the locked board so alerts are drained before another call can
    /// raise its own.
    pub(crate) fn respond(&self, _board: &Board, message: String) -> String {
        let alerts = self.notifier.take_alerts();
        if alerts.is_empty() {
            return message;
        }
        format!("{}\n{}", message, alerts.join("\n"))
    }

    /// Turn a board error into a tool error
    ///
    /// Rejection alerts are dropped since the error carries the same text.
    /// Takes the locked board for the same reason as `respond`.
    pub(crate) fn fail(&self, _board: &Board, err: BoardError) -> McpResult<String> {
        self.notifier.take_alerts();
        if !err.is_rejection() {
            tracing::error!("{}", err);
            bail_public!(_, "{}", err);
        }
        Err(validation::rejection(&err))
    }
}

/// Kanban note board with checklist-driven columns.
///
/// Columns: 1 = backlog (max 3 cards, new cards land here), 2 = in_progress,
/// 3 = done (terminal). Checking items moves a card automatically: column 1
/// to 2 past 50% completion, column 2 to 3 at 100%.
///
/// Cards and checklist items are addressed by zero-based position within
/// their column / card. Use `board` to see current positions.
#[mcp_server]
impl McpServer for KanbanServerHandler {
    /// **Create**: Add a card with a title and 3 to 5 checklist items to column 1.
    /// **Rejected** when column 1 already holds 3 cards, when input is blank, or while the first column is blocked.
    #[tool]
    async fn add_card(
        &self,
        /// Card title
        title: String,
        /// Checklist items, 3 to 5 non-empty strings
        items: Vec<String>,
    ) -> McpResult<String> {
        self.handle_add_card(title, items).await
    }

    /// **Progress**: Check one checklist item. Checked items cannot be unchecked.
    /// **Effect**: May stamp the completion time and move the card to the next column.
    #[tool]
    async fn check_item(
        &self,
        /// Column of the card: 1/2/3 or backlog/in_progress/done
        column: String,
        /// Zero-based card position within the column
        card: usize,
        /// Zero-based checklist item position
        item: usize,
    ) -> McpResult<String> {
        self.handle_check_item(column, card, item).await
    }

    /// **Move**: Move a card to the end of another column.
    #[tool]
    async fn move_card(
        &self,
        /// Source column: 1/2/3 or backlog/in_progress/done
        from_column: String,
        /// Zero-based card position within the source column
        card: usize,
        /// Destination column: 1/2/3 or backlog/in_progress/done
        to_column: String,
    ) -> McpResult<String> {
        self.handle_move_card(from_column, card, to_column).await
    }

    /// **Archive**: Move every card of columns 1 and 2 to column 3, in order.
    /// **Rejected** while the first column is blocked.
    #[tool]
    async fn move_all_to_last_column(&self) -> McpResult<String> {
        self.handle_move_all_to_last_column().await
    }

    /// **Purge**: Delete every card on the board. Cannot be undone.
    #[tool]
    async fn delete_all(
        &self,
        /// Must be true to actually delete
        confirm: bool,
    ) -> McpResult<String> {
        self.handle_delete_all(confirm).await
    }

    /// **Reorder**: Move a checklist item to another position within its card.
    #[tool]
    async fn reorder_item(
        &self,
        /// Column of the card: 1/2/3 or backlog/in_progress/done
        column: String,
        /// Zero-based card position within the column
        card: usize,
        /// Zero-based position of the item to move
        from: usize,
        /// Zero-based position to drop it at
        to: usize,
    ) -> McpResult<String> {
        self.handle_reorder_item(column, card, from, to).await
    }

    /// **Review**: Show all columns, cards, checklists and completion.
    #[tool]
    async fn board(&self) -> McpResult<String> {
        self.handle_board().await
    }
}
