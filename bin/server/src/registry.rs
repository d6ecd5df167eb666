//! In-memory registry of visitors' search sessions.
//!
//! Each browser gets its own [`SearchSession`], found by the id in its
//! session cookie. Sessions idle longer than the configured limit are
//! dropped by [`SessionRegistry::remove_idle`].

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use table_finder_core::LookupSessionId;
use table_finder_lookup::SearchSession;

#[derive(Debug)]
struct SessionEntry {
    search: SearchSession,
    last_active_at: DateTime<Utc>,
}

/// Search sessions keyed by visitor.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<LookupSessionId, SessionEntry>>,
    idle_limit: Duration,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(idle_limit: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_limit,
        }
    }

    /// Runs `f` with the visitor's session, creating an empty one on first
    /// use, and marks the session active.
    pub fn with_session<R>(
        &self,
        id: LookupSessionId,
        f: impl FnOnce(&mut SearchSession) -> R,
    ) -> R {
        let now = Utc::now();
        let mut sessions = self.lock();
        let entry = sessions.entry(id).or_insert_with(|| SessionEntry {
            search: SearchSession::new(),
            last_active_at: now,
        });
        entry.last_active_at = now;
        f(&mut entry.search)
    }

    /// Drops sessions idle since before `now - idle_limit`. Returns how many
    /// were removed.
    pub fn remove_idle(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.idle_limit;
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_active_at >= cutoff);
        before - sessions.len()
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if there are no live sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are plain data; a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<LookupSessionId, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
