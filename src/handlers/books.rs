use axum::{
    extract::{Query, State},
    http::header,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub const MISSING_QUERY: &str = "Missing required query parameter 'q'.";

#[derive(Debug, Deserialize)]
pub struct BookSearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

impl BookSearchParams {
    /// The trimmed query, or `None` when it is absent or blank.
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// GET /api/books?q=<query>
///
/// Relays the catalog's JSON body as-is, key order and whitespace included.
/// Upstream failures keep the upstream status and come back as
/// `{"error": ...}`.
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<BookSearchParams>,
) -> AppResult<([(header::HeaderName, &'static str); 1], Bytes)> {
    let query = params
        .query()
        .ok_or_else(|| AppError::Validation(MISSING_QUERY.into()))?;

    info!(query, "Searching catalog");
    let body = state.catalog.search(query).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
