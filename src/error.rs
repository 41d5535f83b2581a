//! Error type for board operations
//!
//! Every variant except `Storage` is a user-input rejection: the operation was
//! refused up front and the board is unchanged. Its `Display` text is the
//! message shown to the user.

use crate::kanban::ColumnId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("The first column is blocked until the second column has free space")]
    Blocked,

    #[error("Enter a title and 3 to 5 non-empty items")]
    InvalidCard,

    #[error("The first column holds no more than 3 cards")]
    FirstColumnFull,

    #[error("Cards in the last column cannot be moved")]
    LastColumnIsFinal,

    #[error("This card is blocked while the second column is full")]
    CardBlocked,

    #[error("No card at position {index} in {column}")]
    CardNotFound { column: ColumnId, index: usize },

    #[error("No checklist item at position {index}")]
    ItemNotFound { index: usize },

    #[error("Failed to save: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl BoardError {
    /// Check if this error is a user-input rejection rather than a storage failure
    pub fn is_rejection(&self) -> bool {
        !matches!(self, BoardError::Storage(_))
    }
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;
