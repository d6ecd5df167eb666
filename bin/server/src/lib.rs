//! table-finder lookup server.
//!
//! A thin HTTP adapter over the guest lookup crates: it loads the seating
//! list once, keeps one search session per visitor, and serves lookup
//! states as JSON.

pub mod config;
pub mod error;
pub mod registry;
pub mod routes;
pub mod view;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use table_finder_roster::{GuestStore, TableLabelStyle};
use tower_http::trace::TraceLayer;

use crate::config::SessionConfig;
use crate::registry::SessionRegistry;

/// Shared application state.
pub struct AppState {
    /// Cached seating list.
    pub store: GuestStore,
    /// Visitors' search sessions.
    pub sessions: SessionRegistry,
    /// Session configuration.
    pub session_config: SessionConfig,
    /// How table identifiers are displayed.
    pub table_label: TableLabelStyle,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        store: GuestStore,
        session_config: SessionConfig,
        table_label: TableLabelStyle,
    ) -> Self {
        let sessions = SessionRegistry::new(chrono::Duration::minutes(i64::from(
            session_config.idle_minutes,
        )));
        Self {
            store,
            sessions,
            session_config,
            table_label,
        }
    }
}

/// Builds the router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(routes::health))
        .route("/api/lookup", get(routes::lookup))
        .route("/api/lookup/select", post(routes::select))
        .route("/api/lookup/back", post(routes::back))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
