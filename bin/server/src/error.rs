//! Error responses for the lookup API.
//!
//! Library errors arrive as rootcause reports; they are logged here with
//! full detail and returned to the client as a short JSON message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rootcause::prelude::Report;
use serde_json::json;
use std::fmt;
use table_finder_lookup::SelectionError;
use table_finder_roster::RosterError;

/// Errors returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The seating list could not be loaded.
    RosterUnavailable { details: String },
    /// The visitor asked to choose a guest that is not a current candidate.
    InvalidSelection(SelectionError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RosterUnavailable { details } => {
                write!(f, "seating list unavailable: {details}")
            }
            Self::InvalidSelection(err) => write!(f, "invalid selection: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<Report<RosterError>> for ApiError {
    fn from(report: Report<RosterError>) -> Self {
        Self::RosterUnavailable {
            details: report.to_string(),
        }
    }
}

impl From<Report<SelectionError>> for ApiError {
    fn from(report: Report<SelectionError>) -> Self {
        Self::InvalidSelection(report.current_context().clone())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::RosterUnavailable { details } => {
                tracing::error!(error = %details, "seating list unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The guest list could not be loaded.".to_string(),
                )
            }
            Self::InvalidSelection(err) => {
                tracing::debug!(error = %err, "rejected selection");
                let status = match err {
                    SelectionError::NotAmbiguous { .. } => StatusCode::CONFLICT,
                    SelectionError::EmptyQuery | SelectionError::IndexOutOfRange { .. } => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_bad_request() {
        let err = ApiError::InvalidSelection(SelectionError::IndexOutOfRange {
            query: "Lee".to_string(),
            index: 3,
            candidates: 2,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unambiguous_selection_is_conflict() {
        let err = ApiError::InvalidSelection(SelectionError::NotAmbiguous {
            query: "Soliman".to_string(),
            matches: 1,
        });
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn roster_failure_is_unavailable() {
        let err = ApiError::RosterUnavailable {
            details: "missing".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
