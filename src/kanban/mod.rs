//! Kanban domain models and business rules
//!
//! - `card`: checklist items, cards and completion
//! - `column`: the three fixed columns and their limits
//! - `board`: the board and its mutation operations
//! - `lifecycle`: check events and column promotion
//! - `reorder`: drag-and-drop checklist reordering
//! - `draft`: input state for new cards

mod board;
mod card;
mod column;
mod draft;
mod lifecycle;
mod reorder;

pub use board::Board;
pub use card::{Card, CardPatch, ChecklistItem, MAX_ITEMS, MIN_ITEMS, local_timestamp};
pub use column::{ColumnId, FIRST_COLUMN_CAPACITY, SECOND_COLUMN_LIMIT};
pub use draft::CardDraft;
pub use lifecycle::{CardActions, CardHost, CheckOutcome, promotion_target};
pub use reorder::{ChecklistDrag, move_item};
