//! MCP tool handlers for the kanban server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file.

pub mod add_card;
pub mod board;
pub mod check_item;
pub mod delete_all;
pub mod move_card;
pub mod reorder;
