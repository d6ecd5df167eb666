//! Lookup API routes.
//!
//! Every lookup route identifies the visitor by the session cookie, issuing
//! a fresh one when it is missing or unreadable, and refreshes its expiry.

use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use table_finder_core::LookupSessionId;
use table_finder_lookup::Disambiguator;
use time::Duration as TimeDuration;

use crate::AppState;
use crate::error::ApiError;
use crate::view::LookupView;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "table_finder_session";

/// Query parameters for a lookup.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    q: String,
}

/// Body of a selection request.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    query: String,
    index: usize,
}

/// Body of a back-out request.
#[derive(Debug, Deserialize)]
pub struct BackRequest {
    query: String,
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthView {
    status: &'static str,
    guests: usize,
}

/// Searches the seating list.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<LookupParams>,
) -> Result<(CookieJar, Json<LookupView>), ApiError> {
    let roster = state.store.load()?;
    let (jar, session_id) = session_cookie(jar, &state);

    let current = state.sessions.with_session(session_id, |search| {
        Disambiguator::new(roster.guests()).lookup(search, &params.q)
    });

    Ok((jar, Json(LookupView::render(&current, &state.table_label))))
}

/// Chooses one guest for an ambiguous search.
pub async fn select(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<SelectRequest>,
) -> Result<(CookieJar, Json<LookupView>), ApiError> {
    let roster = state.store.load()?;
    let (jar, session_id) = session_cookie(jar, &state);

    let current = state.sessions.with_session(session_id, |search| {
        Disambiguator::new(roster.guests()).select(search, &request.query, request.index)
    })?;

    tracing::info!(
        session_id = %session_id,
        query = %request.query.trim(),
        index = request.index,
        guest = ?current.report().map(|report| report.guest.full_name()),
        "guest selected"
    );

    Ok((jar, Json(LookupView::render(&current, &state.table_label))))
}

/// Forgets the choice for a search and shows the candidates again.
pub async fn back(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<BackRequest>,
) -> Result<(CookieJar, Json<LookupView>), ApiError> {
    let roster = state.store.load()?;
    let (jar, session_id) = session_cookie(jar, &state);

    let current = state.sessions.with_session(session_id, |search| {
        Disambiguator::new(roster.guests()).back_out(search, &request.query)
    });

    Ok((jar, Json(LookupView::render(&current, &state.table_label))))
}

/// Reports that the service is up and how many guests are loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthView>, ApiError> {
    let roster = state.store.load()?;
    Ok(Json(HealthView {
        status: "ok",
        guests: roster.len(),
    }))
}

/// Reads the visitor's session id from the cookie jar, issuing a new id when
/// there is none.
///
/// The cookie is written back on every response so its expiry slides with
/// the server-side idle limit.
fn session_cookie(jar: CookieJar, state: &AppState) -> (CookieJar, LookupSessionId) {
    let id = match jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<LookupSessionId>().ok())
    {
        Some(id) => id,
        None => {
            let id = LookupSessionId::new();
            tracing::debug!(session_id = %id, "issuing lookup session");
            id
        }
    };

    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(i64::from(
            state.session_config.idle_minutes,
        )));

    (jar.add(cookie), id)
}
