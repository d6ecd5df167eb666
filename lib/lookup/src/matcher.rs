//! Name search over the seating list.

use serde::Serialize;
use std::collections::HashSet;
use table_finder_core::Guest;

/// The result of searching for a name fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The query was empty or whitespace; nothing has been searched yet.
    AwaitingInput,
    /// No guest's first or last name contains the query.
    NotFound { query: String },
    /// One or more guests match, in seating-list order.
    Matches { query: String, guests: Vec<Guest> },
}

impl MatchOutcome {
    /// Returns the matching guests, or an empty slice.
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        match self {
            Self::Matches { guests, .. } => guests,
            Self::AwaitingInput | Self::NotFound { .. } => &[],
        }
    }
}

/// Trims surrounding whitespace from a raw search string.
///
/// The trimmed text is what matching uses and what selections are keyed by.
#[must_use]
pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}

/// Finds every guest whose first name or last name contains `raw_query`,
/// ignoring case.
///
/// The query must appear inside a single field: "jed lee" does not match
/// first name "Jed" with last name "Lee". Exact duplicate records are
/// reported once.
#[must_use]
pub fn find(raw_query: &str, guests: &[Guest]) -> MatchOutcome {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return MatchOutcome::AwaitingInput;
    }

    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let matches: Vec<Guest> = guests
        .iter()
        .filter(|guest| name_contains(guest, &needle))
        .filter(|guest| seen.insert(*guest))
        .cloned()
        .collect();

    if matches.is_empty() {
        MatchOutcome::NotFound {
            query: query.to_string(),
        }
    } else {
        MatchOutcome::Matches {
            query: query.to_string(),
            guests: matches,
        }
    }
}

fn name_contains(guest: &Guest, needle: &str) -> bool {
    guest.first_name.to_lowercase().contains(needle)
        || guest.last_name.to_lowercase().contains(needle)
}
