//! JSON views of lookup states.
//!
//! These are what the page renders: display-ready names, formatted table
//! labels and the informational messages shown to guests.

use serde::Serialize;
use table_finder_lookup::{Candidate, GuestReport, LookupState};
use table_finder_roster::TableLabelStyle;

/// Shown before anything has been typed.
pub const AWAITING_INPUT_MESSAGE: &str = "Enter a name above to look up a guest.";

/// Shown when no guest matches.
pub const NOT_FOUND_MESSAGE: &str = "No guest found with that name. Try a different spelling.";

/// Shown when a guest is alone at their table.
pub const NO_TABLEMATES_MESSAGE: &str = "No other guests at this table in the list.";

/// A lookup state ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupView {
    AwaitingInput {
        message: String,
    },
    NotFound {
        query: String,
        message: String,
    },
    AwaitingSelection {
        query: String,
        message: String,
        candidates: Vec<CandidateView>,
    },
    SingleMatch {
        query: String,
        guest: GuestView,
    },
    Resolved {
        query: String,
        index: usize,
        guest: GuestView,
    },
}

/// One choosable guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub index: usize,
    pub name: String,
    pub table: String,
    pub label: String,
}

/// A resolved guest with their tablemates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestView {
    pub name: String,
    pub table: String,
    pub tablemates: Vec<String>,
    /// Set when `tablemates` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_tablemates: Option<String>,
}

impl LookupView {
    /// Builds the display view of a lookup state.
    #[must_use]
    pub fn render(state: &LookupState, style: &TableLabelStyle) -> Self {
        match state {
            LookupState::AwaitingInput => Self::AwaitingInput {
                message: AWAITING_INPUT_MESSAGE.to_string(),
            },
            LookupState::NotFound { query } => Self::NotFound {
                query: query.clone(),
                message: NOT_FOUND_MESSAGE.to_string(),
            },
            LookupState::AwaitingSelection { query, candidates } => Self::AwaitingSelection {
                query: query.clone(),
                message: format!(
                    "{} guests match \"{query}\". Tap the person you mean:",
                    candidates.len()
                ),
                candidates: candidates
                    .iter()
                    .map(|candidate| CandidateView::render(candidate, style))
                    .collect(),
            },
            LookupState::SingleMatch { query, report } => Self::SingleMatch {
                query: query.clone(),
                guest: GuestView::render(report, style),
            },
            LookupState::Resolved {
                query,
                index,
                report,
            } => Self::Resolved {
                query: query.clone(),
                index: *index,
                guest: GuestView::render(report, style),
            },
        }
    }
}

impl CandidateView {
    fn render(candidate: &Candidate, style: &TableLabelStyle) -> Self {
        let name = candidate.guest.full_name();
        let table = style.format(&candidate.guest.table);
        Self {
            index: candidate.index,
            label: format!("{name} ({table})"),
            name,
            table,
        }
    }
}

impl GuestView {
    fn render(report: &GuestReport, style: &TableLabelStyle) -> Self {
        let no_tablemates =
            (!report.has_tablemates()).then(|| NO_TABLEMATES_MESSAGE.to_string());
        Self {
            name: report.guest.full_name(),
            table: style.format(&report.guest.table),
            tablemates: report.tablemate_names(),
            no_tablemates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_finder_core::Guest;
    use table_finder_lookup::{Disambiguator, SearchSession};

    fn wedding() -> Vec<Guest> {
        vec![
            Guest::new("Jed", "Lee", "1"),
            Guest::new("Clarisa", "Lee", "1"),
            Guest::new("Anna", "Soliman", "2"),
        ]
    }

    #[test]
    fn candidates_use_label_style() {
        let guests = wedding();
        let state = Disambiguator::new(&guests).lookup(&SearchSession::new(), "Lee");

        let view = LookupView::render(&state, &TableLabelStyle::Prefixed("Table ".to_string()));

        let LookupView::AwaitingSelection {
            message,
            candidates,
            ..
        } = view
        else {
            panic!("expected selection view");
        };
        assert_eq!(message, "2 guests match \"Lee\". Tap the person you mean:");
        assert_eq!(candidates[0].label, "Jed Lee (Table 1)");
    }

    #[test]
    fn lone_guest_gets_no_tablemates_message() {
        let guests = wedding();
        let state = Disambiguator::new(&guests).lookup(&SearchSession::new(), "Soliman");

        let view = LookupView::render(&state, &TableLabelStyle::AsIs);

        let LookupView::SingleMatch { guest, .. } = view else {
            panic!("expected single match view");
        };
        assert!(guest.tablemates.is_empty());
        assert_eq!(guest.no_tablemates.as_deref(), Some(NO_TABLEMATES_MESSAGE));
    }

    #[test]
    fn unassigned_guest_renders_without_tablemates() {
        let guests = vec![
            Guest::new("Jed", "Lee", ""),
            Guest::new("Clarisa", "Lee", ""),
            Guest::new("Anna", "Soliman", "2"),
        ];
        let style = TableLabelStyle::Prefixed("Table ".to_string());
        let disambiguator = Disambiguator::new(&guests);

        let state = disambiguator.lookup(&SearchSession::new(), "Lee");
        let LookupView::AwaitingSelection { candidates, .. } = LookupView::render(&state, &style)
        else {
            panic!("expected selection view");
        };
        assert_eq!(candidates[1].label, "Clarisa Lee (Unassigned)");

        let mut session = SearchSession::new();
        let state = disambiguator.select(&mut session, "Lee", 0).expect("select");
        let LookupView::Resolved { guest, .. } = LookupView::render(&state, &style) else {
            panic!("expected resolved view");
        };
        assert_eq!(guest.table, "Unassigned");
        assert!(guest.tablemates.is_empty());
        assert_eq!(guest.no_tablemates.as_deref(), Some(NO_TABLEMATES_MESSAGE));
    }

    #[test]
    fn not_found_carries_message() {
        let view = LookupView::render(
            &LookupState::NotFound {
                query: "Zed".to_string(),
            },
            &TableLabelStyle::AsIs,
        );
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["state"], "not_found");
        assert_eq!(json["message"], NOT_FOUND_MESSAGE);
    }
}
