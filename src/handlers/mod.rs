pub mod books;

use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub const INDEX_FILE: &str = "index.html";

/// GET /healthz
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// GET /whoami — which instance answered, for load-balanced deployments.
pub async fn whoami(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "host": state.hostname.as_deref().unwrap_or("unknown"),
    }))
}

/// GET /
///
/// Serves the index page directly instead of relying on the static service's
/// directory index.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let path = state.static_dir.join(INDEX_FILE);
    let page = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!(error = %e, path = %path.display(), "Index page unavailable");
        AppError::NotFound(format!("{INDEX_FILE} not found"))
    })?;

    Ok(Html(page))
}
