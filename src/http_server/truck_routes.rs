//! Food Truck Lookup Routes
//!
//! The lookup endpoint and the catch-all for unknown paths.
//!
//! Every response is `200 OK`: validation failures come back as the
//! error message text in the body, not as an HTTP error status. Existing
//! clients parse the body text, so the status line never varies.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::Uri;
use axum::routing::get;
use axum::Router;

use crate::http_server::response::render_lookup_response;
use crate::observability::Logger;
use crate::query::{find_matches, LocationQuery};
use crate::table::Table;

// ==================
// Shared State
// ==================

/// State shared across lookup handlers
pub struct AppState {
    table: Arc<Table>,
}

impl AppState {
    pub fn new(table: Arc<Table>) -> Self {
        Self { table }
    }

    /// The permit table being served
    pub fn table(&self) -> &Table {
        &self.table
    }
}

// ==================
// Routes
// ==================

/// Create the lookup routes.
///
/// `/food_trucks` and `/food_trucks/` are both registered; everything
/// else falls through to [`unknown_action`].
pub fn truck_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/food_trucks", get(lookup_food_trucks))
        .route("/food_trucks/", get(lookup_food_trucks))
        .fallback(unknown_action)
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Handle a food-truck lookup.
///
/// The raw query string is parsed with the service's own rules; axum's
/// standard query parsing never sees it because the separators are `?`,
/// not `&`. An absent query string is treated as empty and fails
/// validation as a missing query.
async fn lookup_food_trucks(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    RawQuery(raw_query): RawQuery,
) -> String {
    let raw_query = raw_query.unwrap_or_default();
    Logger::trace(
        "REQUEST_RECEIVED",
        &[("path", uri.path()), ("query", &raw_query)],
    );

    match LocationQuery::parse(&raw_query) {
        Ok(query) => {
            let matches = find_matches(&query, state.table());
            let count = matches.len().to_string();
            Logger::info(
                "LOOKUP_MATCHED",
                &[
                    ("latitude", &query.latitude),
                    ("longitude", &query.longitude),
                    ("matches", &count),
                ],
            );
            render_lookup_response(&query, state.table().schema(), &matches)
        }
        Err(err) => {
            let reason = err.to_string();
            Logger::warn("LOOKUP_REJECTED", &[("reason", &reason)]);
            reason
        }
    }
}

/// Handle any path other than the lookup endpoint.
async fn unknown_action(uri: Uri) -> String {
    Logger::warn("UNKNOWN_ACTION", &[("path", uri.path())]);
    format!("Unknown action = {}", uri.path())
}
