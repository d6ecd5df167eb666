//! Error types for the roster crate.
//!
//! Every variant means the seating list could not be loaded. Callers treat
//! these as fatal for the session.

use std::fmt;
use std::path::PathBuf;

/// Errors from loading a seating list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The seating list file does not exist or cannot be opened.
    Missing { path: PathBuf, reason: String },
    /// The seating list could not be parsed.
    Unparsable {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },
    /// A required column could not be located in the header row.
    MissingColumn {
        path: PathBuf,
        column: String,
        headers: Vec<String>,
    },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path, reason } => {
                write!(f, "seating list {} not found: {reason}", path.display())
            }
            Self::Unparsable {
                path,
                line: Some(line),
                reason,
            } => {
                write!(
                    f,
                    "seating list {} is unreadable at line {line}: {reason}",
                    path.display()
                )
            }
            Self::Unparsable {
                path,
                line: None,
                reason,
            } => {
                write!(f, "seating list {} is unreadable: {reason}", path.display())
            }
            Self::MissingColumn {
                path,
                column,
                headers,
            } => {
                write!(
                    f,
                    "seating list {} has no '{column}' column (found: {})",
                    path.display(),
                    headers.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_display_lists_headers() {
        let err = RosterError::MissingColumn {
            path: PathBuf::from("guests.csv"),
            column: "first_name".to_string(),
            headers: vec!["name".to_string(), "table".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("first_name"));
        assert!(msg.contains("name, table"));
    }

    #[test]
    fn unparsable_display_includes_line() {
        let err = RosterError::Unparsable {
            path: PathBuf::from("guests.csv"),
            line: Some(4),
            reason: "bad quote".to_string(),
        };
        assert!(err.to_string().contains("line 4"));
    }
}
