//! The loaded seating list and its process-lifetime cache.

use crate::error::RosterError;
use crate::source::GuestSource;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use table_finder_core::{Guest, Result};
use tracing::info;

/// An immutable, ordered list of distinct guests.
///
/// Exact duplicate rows are dropped on construction, keeping the first
/// occurrence, so every other ordering stays as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    guests: Vec<Guest>,
}

impl Roster {
    /// Builds a roster from raw rows.
    #[must_use]
    pub fn new(rows: Vec<Guest>) -> Self {
        let mut seen = HashSet::with_capacity(rows.len());
        let guests = rows
            .into_iter()
            .filter(|guest| seen.insert(guest.clone()))
            .collect();
        Self { guests }
    }

    /// Returns the guests in source order.
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Returns the number of distinct guests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// Returns true if the roster has no guests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

impl From<Vec<Guest>> for Roster {
    fn from(rows: Vec<Guest>) -> Self {
        Self::new(rows)
    }
}

/// Loads a seating list once and hands out the cached roster.
pub struct GuestStore {
    source: Box<dyn GuestSource>,
    roster: OnceLock<Arc<Roster>>,
}

impl GuestStore {
    /// Creates a store over the given source. Nothing is read until
    /// [`load`](Self::load) is called.
    #[must_use]
    pub fn new(source: impl GuestSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            roster: OnceLock::new(),
        }
    }

    /// Returns the roster, reading the source on first use.
    ///
    /// A failed read is not cached; the next call tries again.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or cannot be parsed.
    pub fn load(&self) -> Result<Arc<Roster>, RosterError> {
        if let Some(roster) = self.roster.get() {
            return Ok(Arc::clone(roster));
        }

        let rows = self.source.load()?;
        let row_count = rows.len();
        let roster = Arc::new(Roster::new(rows));
        info!(
            source = %self.source.describe(),
            rows = row_count,
            guests = roster.len(),
            "loaded seating list"
        );

        Ok(Arc::clone(self.roster.get_or_init(|| roster)))
    }
}

impl std::fmt::Debug for GuestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.roster.get().is_some())
            .finish()
    }
}
