use chrono::Local;
use serde::{Deserialize, Serialize};

/// Minimum number of checklist items a card is created with
pub const MIN_ITEMS: usize = 3;

/// Maximum number of checklist items a card is created with
pub const MAX_ITEMS: usize = 5;

/// Format used for `completed_at` stamps
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get the current local time rendered as a completion stamp
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single line of a card's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Text entered when the card was created
    pub text: String,
    /// Whether the item has been checked. Once set it is never cleared.
    #[serde(default)]
    pub done: bool,
}

impl ChecklistItem {
    /// Create an unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A titled unit of work with a fixed-size checklist
///
/// Serialized with the field names of the stored card records:
/// `title`, `list` and `completedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub list: Vec<ChecklistItem>,
    /// Local time the checklist first reached 100%
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<String>,
}

impl Card {
    /// Create a card with every item unchecked and no completion stamp
    pub fn new<S: Into<String>>(title: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: title.into(),
            list: items.into_iter().map(ChecklistItem::new).collect(),
            completed_at: None,
        }
    }

    /// Number of checked items
    pub fn done_count(&self) -> usize {
        self.list.iter().filter(|item| item.done).count()
    }

    /// Completion percentage, `floor(100 * done / total)`
    ///
    /// An empty checklist reports 0; cards are never created that way.
    pub fn completion(&self) -> u32 {
        if self.list.is_empty() {
            return 0;
        }
        (100 * self.done_count() / self.list.len()) as u32
    }

    /// Check if every item is done
    pub fn is_complete(&self) -> bool {
        self.completion() == 100
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = Some(completed_at);
        }
        if let Some(list) = patch.list {
            self.list = list;
        }
    }
}

/// Fields that `Board::update_card` merges into an existing card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub completed_at: Option<String>,
    pub list: Option<Vec<ChecklistItem>>,
}

impl CardPatch {
    /// Patch that stamps the completion time
    pub fn completed_at(stamp: impl Into<String>) -> Self {
        Self {
            completed_at: Some(stamp.into()),
            ..Self::default()
        }
    }

    /// Patch that replaces the checklist
    pub fn list(list: Vec<ChecklistItem>) -> Self {
        Self {
            list: Some(list),
            ..Self::default()
        }
    }
}
