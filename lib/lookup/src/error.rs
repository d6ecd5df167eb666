//! Error types for the lookup crate.
//!
//! Searches themselves never fail: "no match" and "pick one" are lookup
//! states. Only an invalid selection request is an error.

use std::fmt;

/// Errors from choosing among several matching guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The query was empty, so there is nothing to choose from.
    EmptyQuery,
    /// The query does not match several guests.
    NotAmbiguous { query: String, matches: usize },
    /// The chosen index is not one of the current candidates.
    IndexOutOfRange {
        query: String,
        index: usize,
        candidates: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "cannot select a guest for an empty search"),
            Self::NotAmbiguous { query, matches } => {
                write!(
                    f,
                    "search \"{query}\" matches {matches} guest(s); there is nothing to choose"
                )
            }
            Self::IndexOutOfRange {
                query,
                index,
                candidates,
            } => {
                write!(
                    f,
                    "choice {index} is out of range for \"{query}\" ({candidates} candidates)"
                )
            }
        }
    }
}

impl std::error::Error for SelectionError {}
