//! Seating list configuration.
//!
//! Seating lists come in slightly different shapes: some use
//! `first_name`/`last_name`, others `firstname`/`lastname`, and table
//! identifiers may be written "T1" or "1". These differences are handled
//! here rather than in the lookup logic.

use serde::Deserialize;
use std::path::PathBuf;
use table_finder_core::TableLabel;

/// Where to load the seating list from and how to read it.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Path to the seating list CSV file.
    pub path: PathBuf,

    /// Header names for the guest fields.
    #[serde(default)]
    pub columns: ColumnMapping,

    /// How table identifiers are shown to guests.
    #[serde(default)]
    pub table_label: TableLabelStyle,
}

/// Header names for the three guest fields.
///
/// Names are compared after trimming, ignoring ASCII case. If the table
/// column is not found by name, the first header containing "table" is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_first_name")]
    pub first_name: String,

    #[serde(default = "default_last_name")]
    pub last_name: String,

    #[serde(default = "default_table")]
    pub table: String,
}

fn default_first_name() -> String {
    "first_name".to_string()
}

fn default_last_name() -> String {
    "last_name".to_string()
}

fn default_table() -> String {
    "table_number".to_string()
}

impl ColumnMapping {
    /// `first_name`, `last_name`, `table_number`.
    #[must_use]
    pub fn snake_case() -> Self {
        Self {
            first_name: default_first_name(),
            last_name: default_last_name(),
            table: default_table(),
        }
    }

    /// `firstname`, `lastname`, `table`.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            first_name: "firstname".to_string(),
            last_name: "lastname".to_string(),
            table: "table".to_string(),
        }
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::snake_case()
    }
}

/// How a table identifier is rendered for display.
///
/// Formatting never affects which guests share a table; grouping always
/// compares the raw identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLabelStyle {
    /// Show the identifier exactly as written.
    #[default]
    AsIs,
    /// Prepend a prefix such as "Table " unless the identifier already
    /// starts with it.
    Prefixed(String),
}

impl TableLabelStyle {
    /// Formats a table identifier for display.
    #[must_use]
    pub fn format(&self, table: &TableLabel) -> String {
        let Some(label) = table.as_str() else {
            return "Unassigned".to_string();
        };

        match self {
            Self::AsIs => label.to_string(),
            Self::Prefixed(prefix) => {
                let already_prefixed = label
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
                if already_prefixed {
                    label.to_string()
                } else {
                    format!("{prefix}{label}")
                }
            }
        }
    }
}
