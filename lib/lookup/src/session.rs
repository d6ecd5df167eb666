//! Per-visitor selection memory.
//!
//! When a search matches several guests, the visitor picks one. The pick is
//! remembered here, keyed by the trimmed search text, so repeating the same
//! search goes straight to the chosen guest. Each visitor owns a separate
//! `SearchSession`; nothing is shared between visitors.

use crate::matcher::normalize_query;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remembered choices for one visitor, keyed by search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSession {
    selections: HashMap<String, usize>,
}

impl SearchSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the candidate index chosen for `query`, if any.
    ///
    /// The index is not checked against the current matches; callers must
    /// treat an out-of-range index as "no choice yet".
    #[must_use]
    pub fn selection(&self, query: &str) -> Option<usize> {
        self.selections.get(normalize_query(query)).copied()
    }

    /// Remembers that `index` was chosen for `query`, replacing any
    /// earlier choice.
    pub fn remember(&mut self, query: &str, index: usize) {
        self.selections
            .insert(normalize_query(query).to_string(), index);
    }

    /// Forgets the choice for `query`, returning it if there was one.
    pub fn forget(&mut self, query: &str) -> Option<usize> {
        self.selections.remove(normalize_query(query))
    }

    /// Returns true if nothing has been chosen in this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = SearchSession::new();
        assert!(session.is_empty());
        assert_eq!(session.selection("Lee"), None);
    }

    #[test]
    fn remember_and_forget() {
        let mut session = SearchSession::new();
        session.remember("Lee", 1);
        assert_eq!(session.selection("Lee"), Some(1));

        session.remember("Lee", 0);
        assert_eq!(session.selection("Lee"), Some(0));

        assert_eq!(session.forget("Lee"), Some(0));
        assert_eq!(session.selection("Lee"), None);
        assert_eq!(session.forget("Lee"), None);
    }

    #[test]
    fn keys_are_trimmed_but_case_sensitive() {
        let mut session = SearchSession::new();
        session.remember("  Lee ", 1);

        assert_eq!(session.selection("Lee"), Some(1));
        assert_eq!(session.selection("lee"), None);
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = SearchSession::new();
        let second = SearchSession::new();
        first.remember("Lee", 1);

        assert_eq!(second.selection("Lee"), None);
    }

    #[test]
    fn session_serde_roundtrip() {
        let mut session = SearchSession::new();
        session.remember("Lee", 1);

        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: SearchSession = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(session, parsed);
    }
}
