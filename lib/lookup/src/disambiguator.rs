//! Narrowing a search to a single guest.
//!
//! A lookup moves through these states:
//!
//! ```text
//! AwaitingInput ──► NotFound
//!       │
//!       ├─────────► SingleMatch
//!       │
//!       └─────────► AwaitingSelection ──select──► Resolved
//!                          ▲                         │
//!                          └────────back_out─────────┘
//! ```
//!
//! The only state carried between requests is the visitor's
//! [`SearchSession`]. Tablemates are recomputed from the guest list on every
//! lookup.

use crate::error::SelectionError;
use crate::matcher::{MatchOutcome, find, normalize_query};
use crate::session::SearchSession;
use crate::tablemates::tablemates;
use serde::Serialize;
use table_finder_core::{Guest, Result};
use tracing::{debug, warn};

/// One guest offered as a choice for an ambiguous search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Position among the current matches; pass this to
    /// [`Disambiguator::select`].
    pub index: usize,
    /// The matching guest.
    pub guest: Guest,
}

/// A resolved guest with the people seated alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestReport {
    /// The guest that was looked up.
    pub guest: Guest,
    /// Everyone else at the same table, in seating-list order.
    pub tablemates: Vec<Guest>,
}

impl GuestReport {
    fn build(guest: Guest, guests: &[Guest]) -> Self {
        let tablemates = tablemates(&guest, guests);
        Self { guest, tablemates }
    }

    /// Returns true if anyone else is listed at the table.
    #[must_use]
    pub fn has_tablemates(&self) -> bool {
        !self.tablemates.is_empty()
    }

    /// Returns tablemates' full names in seating-list order.
    #[must_use]
    pub fn tablemate_names(&self) -> Vec<String> {
        self.tablemates.iter().map(Guest::full_name).collect()
    }
}

/// Where a lookup stands after a search, selection or back-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupState {
    /// No search text yet.
    AwaitingInput,
    /// Nobody matches the search.
    NotFound { query: String },
    /// Exactly one guest matches.
    SingleMatch { query: String, report: GuestReport },
    /// Several guests match and none has been chosen (or the remembered
    /// choice no longer fits the current matches).
    AwaitingSelection {
        query: String,
        candidates: Vec<Candidate>,
    },
    /// Several guests matched and one was chosen.
    Resolved {
        query: String,
        index: usize,
        report: GuestReport,
    },
}

impl LookupState {
    /// Returns the guest report when the lookup has settled on one guest.
    #[must_use]
    pub fn report(&self) -> Option<&GuestReport> {
        match self {
            Self::SingleMatch { report, .. } | Self::Resolved { report, .. } => Some(report),
            Self::AwaitingInput | Self::NotFound { .. } | Self::AwaitingSelection { .. } => None,
        }
    }
}

/// Runs lookups against a guest list.
#[derive(Debug, Clone, Copy)]
pub struct Disambiguator<'a> {
    guests: &'a [Guest],
}

impl<'a> Disambiguator<'a> {
    /// Creates a disambiguator over the current guest list.
    #[must_use]
    pub fn new(guests: &'a [Guest]) -> Self {
        Self { guests }
    }

    /// Searches for `raw_query`, using any choice remembered in `session`.
    ///
    /// Does not modify the session: the same query against the same guest
    /// list and session always gives the same state.
    #[must_use]
    pub fn lookup(&self, session: &SearchSession, raw_query: &str) -> LookupState {
        let state = match find(raw_query, self.guests) {
            MatchOutcome::AwaitingInput => LookupState::AwaitingInput,
            MatchOutcome::NotFound { query } => LookupState::NotFound { query },
            MatchOutcome::Matches { query, mut guests } if guests.len() == 1 => {
                let guest = guests.remove(0);
                LookupState::SingleMatch {
                    query,
                    report: GuestReport::build(guest, self.guests),
                }
            }
            MatchOutcome::Matches { query, mut guests } => match session.selection(&query) {
                Some(index) if index < guests.len() => {
                    let guest = guests.swap_remove(index);
                    LookupState::Resolved {
                        query,
                        index,
                        report: GuestReport::build(guest, self.guests),
                    }
                }
                stale => {
                    if let Some(index) = stale {
                        debug!(
                            query = %query,
                            index,
                            candidates = guests.len(),
                            "ignoring stale selection"
                        );
                    }
                    LookupState::AwaitingSelection {
                        query,
                        candidates: candidates(guests),
                    }
                }
            },
        };

        debug!(query = raw_query.trim(), state = state_name(&state), "lookup");
        state
    }

    /// Chooses candidate `index` for an ambiguous search and remembers the
    /// choice in `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, does not match several
    /// guests, or `index` is not a current candidate. The session is left
    /// unchanged on error.
    pub fn select(
        &self,
        session: &mut SearchSession,
        raw_query: &str,
        index: usize,
    ) -> Result<LookupState, SelectionError> {
        let query = normalize_query(raw_query);
        let outcome = find(query, self.guests);
        let count = match &outcome {
            MatchOutcome::AwaitingInput => return Err(SelectionError::EmptyQuery.into()),
            MatchOutcome::NotFound { .. } => 0,
            MatchOutcome::Matches { guests, .. } => guests.len(),
        };

        if count < 2 {
            warn!(query, matches = count, "selection for unambiguous search");
            return Err(SelectionError::NotAmbiguous {
                query: query.to_string(),
                matches: count,
            }
            .into());
        }
        if index >= count {
            warn!(query, index, candidates = count, "selection out of range");
            return Err(SelectionError::IndexOutOfRange {
                query: query.to_string(),
                index,
                candidates: count,
            }
            .into());
        }

        session.remember(query, index);
        Ok(self.lookup(session, query))
    }

    /// Forgets the choice for `raw_query` and returns the search to its
    /// unresolved state.
    #[must_use]
    pub fn back_out(&self, session: &mut SearchSession, raw_query: &str) -> LookupState {
        if let Some(index) = session.forget(raw_query) {
            debug!(query = raw_query.trim(), index, "cleared selection");
        }
        self.lookup(session, raw_query)
    }
}

fn candidates(guests: Vec<Guest>) -> Vec<Candidate> {
    guests
        .into_iter()
        .enumerate()
        .map(|(index, guest)| Candidate { index, guest })
        .collect()
}

fn state_name(state: &LookupState) -> &'static str {
    match state {
        LookupState::AwaitingInput => "awaiting_input",
        LookupState::NotFound { .. } => "not_found",
        LookupState::SingleMatch { .. } => "single_match",
        LookupState::AwaitingSelection { .. } => "awaiting_selection",
        LookupState::Resolved { .. } => "resolved",
    }
}
