//! Client for the upstream book catalog (Google Books volumes API).

use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use serde::de::IgnoredAny;
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub const FALLBACK_MESSAGE: &str = "Failed to fetch books";

/// A failed catalog lookup, already reduced to what the caller will see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CatalogError {
    /// Upstream HTTP status, if the catalog answered at all.
    upstream_status: Option<u16>,
    message: String,
}

impl CatalogError {
    pub fn new(upstream_status: Option<u16>, message: impl Into<String>) -> Self {
        CatalogError {
            upstream_status,
            message: message.into(),
        }
    }

    /// Status to relay: the upstream one, or 500 when there was none.
    pub fn status(&self) -> u16 {
        self.upstream_status.unwrap_or(500)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pick the most specific message available: the catalog's own
/// `error.message`, then the generic failure text, then [`FALLBACK_MESSAGE`].
pub fn resolve_message(structured: Option<&str>, generic: Option<&str>) -> String {
    structured
        .filter(|m| !m.trim().is_empty())
        .or(generic.filter(|m| !m.trim().is_empty()))
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: ReqwestClient,
    endpoint: Url,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(http: ReqwestClient, endpoint: Url, api_key: Option<String>) -> Self {
        CatalogClient {
            http,
            endpoint,
            api_key,
        }
    }

    /// Run one search against the catalog and return its JSON body byte for
    /// byte. The body is checked to be JSON but never re-serialized.
    ///
    /// `query` must already be trimmed and non-empty. No retries.
    pub async fn search(&self, query: &str) -> Result<Bytes, CatalogError> {
        let mut params = vec![("q", query)];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("key", key));
        }

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                tracing::error!(error = %e, "Error fetching books");
                CatalogError::new(None, resolve_message(None, Some(&e.to_string())))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            let structured = body
                .as_ref()
                .and_then(|b| b["error"]["message"].as_str());
            let generic = format!("Request failed with status code {}", status.as_u16());

            tracing::error!(
                status = status.as_u16(),
                body = ?body,
                "Error fetching books"
            );
            return Err(CatalogError::new(
                Some(status.as_u16()),
                resolve_message(structured, Some(&generic)),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(error = %e, "Failed to read catalog response");
            CatalogError::new(None, resolve_message(None, Some(&e.to_string())))
        })?;

        if let Err(e) = serde_json::from_slice::<IgnoredAny>(&body) {
            tracing::error!(error = %e, "Failed to parse catalog response");
            return Err(CatalogError::new(
                None,
                resolve_message(None, Some(&e.to_string())),
            ));
        }

        Ok(body)
    }
}
