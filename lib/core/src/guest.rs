//! Guest records and table identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The table a guest is seated at.
///
/// Table identifiers are opaque: "7", "T7" and "Table 7" are three different
/// tables. A missing cell is `Unassigned`; unassigned guests are kept in the
/// list but never seated with anyone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum TableLabel {
    /// A table identifier exactly as written in the seating list (trimmed).
    Assigned(String),
    /// No table identifier was given.
    Unassigned,
}

impl TableLabel {
    /// Builds a label from a raw seating-list cell.
    #[must_use]
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            Self::Unassigned
        } else {
            Self::Assigned(trimmed.to_string())
        }
    }

    /// Returns the identifier text, if assigned.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Assigned(label) => Some(label),
            Self::Unassigned => None,
        }
    }

    /// Returns true if no table identifier was given.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl fmt::Display for TableLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(label) => f.write_str(label),
            Self::Unassigned => f.write_str("unassigned"),
        }
    }
}

impl From<Option<String>> for TableLabel {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unassigned, |cell| Self::from_cell(&cell))
    }
}

impl From<TableLabel> for Option<String> {
    fn from(value: TableLabel) -> Self {
        match value {
            TableLabel::Assigned(label) => Some(label),
            TableLabel::Unassigned => None,
        }
    }
}

impl From<&str> for TableLabel {
    fn from(cell: &str) -> Self {
        Self::from_cell(cell)
    }
}

/// A guest on the seating list.
///
/// A person is identified by their `(first_name, last_name)` pair. Two rows
/// with the same pair and table are the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    /// Given name(s), possibly more than one word.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned table.
    pub table: TableLabel,
}

impl Guest {
    /// Creates a guest record.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        table: impl Into<TableLabel>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            table: table.into(),
        }
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, _) => self.last_name.clone(),
        }
    }

    /// Returns true if both records name the same person.
    #[must_use]
    pub fn is_same_person(&self, other: &Guest) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }

    /// Returns true if both guests are seated at the same table.
    ///
    /// Guests without a table share it with nobody.
    #[must_use]
    pub fn shares_table_with(&self, other: &Guest) -> bool {
        !self.table.is_unassigned() && self.table == other.table
    }
}
