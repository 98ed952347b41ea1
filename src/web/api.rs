use axum::async_trait;
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::models::{Book, VolumesResponse};

use super::search::{BookSearch, FetchError};

/// Calls this server's `/api/books` the way the browser page does.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: ReqwestClient,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` is the page origin, e.g. `http://localhost:8000/`.
    pub fn new(http: ReqwestClient, base_url: Url) -> Self {
        ApiClient { http, base_url }
    }

    fn search_url(&self, query: &str) -> Result<Url, url::ParseError> {
        self.base_url
            .join(&format!("/api/books?q={}", urlencoding::encode(query)))
    }
}

#[async_trait]
impl BookSearch for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Book>, FetchError> {
        let response = self.http.get(self.search_url(query)?).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: VolumesResponse = response.json().await?;
        Ok(body.into_items().into_iter().map(Book::from).collect())
    }
}
