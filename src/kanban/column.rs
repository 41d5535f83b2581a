use std::fmt;
use std::str::FromStr;

/// Cards the first column may hold
pub const FIRST_COLUMN_CAPACITY: usize = 3;

/// Second-column size at which the first column becomes blocked
///
/// Never enforced when cards move into the second column.
pub const SECOND_COLUMN_LIMIT: usize = 5;

/// One of the three fixed workflow columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    /// Column 1: new cards land here
    Backlog,
    /// Column 2: cards past half completion
    InProgress,
    /// Column 3: terminal
    Done,
}

impl ColumnId {
    /// All columns in display order
    pub const ALL: [ColumnId; 3] = [ColumnId::Backlog, ColumnId::InProgress, ColumnId::Done];

    /// One-based column number
    pub fn number(self) -> usize {
        self.slot() + 1
    }

    /// Zero-based position in the board's column array
    pub(crate) fn slot(self) -> usize {
        match self {
            ColumnId::Backlog => 0,
            ColumnId::InProgress => 1,
            ColumnId::Done => 2,
        }
    }

    /// Look up a column by its one-based number
    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(ColumnId::Backlog),
            2 => Some(ColumnId::InProgress),
            3 => Some(ColumnId::Done),
            _ => None,
        }
    }

    /// Persistence key for this column's cards
    pub fn storage_key(self) -> &'static str {
        match self {
            ColumnId::Backlog => "column1",
            ColumnId::InProgress => "column2",
            ColumnId::Done => "column3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColumnId::Backlog => "backlog",
            ColumnId::InProgress => "in_progress",
            ColumnId::Done => "done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column {} ({})", self.number(), self.name())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "backlog" => Ok(ColumnId::Backlog),
            "2" | "in_progress" => Ok(ColumnId::InProgress),
            "3" | "done" => Ok(ColumnId::Done),
            other => Err(format!(
                "Invalid column '{}'. Valid options are: 1, 2, 3, backlog, in_progress, done",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_numbers_and_keys() {
        assert_eq!(ColumnId::Backlog.number(), 1);
        assert_eq!(ColumnId::Done.number(), 3);
        assert_eq!(ColumnId::InProgress.storage_key(), "column2");
        assert_eq!(ColumnId::from_number(2), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::from_number(0), None);
        assert_eq!(ColumnId::from_number(4), None);
    }

    #[test]
    fn test_parse_column() {
        assert_eq!("1".parse::<ColumnId>(), Ok(ColumnId::Backlog));
        assert_eq!(" in_progress ".parse::<ColumnId>(), Ok(ColumnId::InProgress));
        assert_eq!("done".parse::<ColumnId>(), Ok(ColumnId::Done));
        assert!("4".parse::<ColumnId>().is_err());
        assert!("todo".parse::<ColumnId>().is_err());
    }
}
