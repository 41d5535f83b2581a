//! Parameter parsing and error mapping for the tool surface

use crate::error::BoardError;
use crate::kanban::ColumnId;
use mcp_attr::Result as McpResult;

/// Parse a column parameter (`1`-`3` or `backlog`/`in_progress`/`done`)
///
/// # Arguments
/// * `column_str` - Column parameter as sent by the client
///
/// # Returns
/// Result containing the parsed column or an invalid-params error
pub fn parse_column(column_str: &str) -> McpResult<ColumnId> {
    column_str.parse::<ColumnId>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Convert a user-input rejection into an invalid-params error carrying the
/// message the user would have been shown
pub fn rejection(err: &BoardError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(err.to_string(), true)
}
