use axum::async_trait;
use thiserror::Error;

use crate::models::Book;

use super::card::book_card;
use super::markup::Element;

pub const PROMPT_MESSAGE: &str = "Please enter a search term.";
pub const SEARCHING_MESSAGE: &str = "Searching books...";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong.";
pub const SPINNER: &str = r#"<div class="spinner" aria-label="Loading"></div>"#;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network response was not ok (status {0})")]
    Status(u16),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Whatever answers the page's searches. `query` is trimmed and non-empty.
#[async_trait]
pub trait BookSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Book>, FetchError>;
}

/// What the results container currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsPanel {
    #[default]
    Idle,
    Prompt,
    Searching,
    Books(Vec<Book>),
    /// A successful search with nothing in it. Shows the loading spinner,
    /// not a "no results" message.
    NoResults,
    Failed,
}

impl ResultsPanel {
    pub fn render(&self) -> String {
        match self {
            ResultsPanel::Idle => String::new(),
            ResultsPanel::Prompt => format!("<p>{PROMPT_MESSAGE}</p>"),
            ResultsPanel::Searching => format!("<p>{SEARCHING_MESSAGE}</p>"),
            ResultsPanel::Books(books) => {
                let mut grid = Element::new("div").class("book-grid");
                for (index, book) in books.iter().enumerate() {
                    grid.push(book_card(book).attr("data-index", index.to_string()));
                }
                grid.to_string()
            }
            ResultsPanel::NoResults => SPINNER.to_string(),
            ResultsPanel::Failed => format!("<p>{FAILURE_MESSAGE}</p>"),
        }
    }
}

/// The search box, results heading and results container.
pub struct SearchView<C> {
    client: C,
    input: String,
    heading_visible: bool,
    panel: ResultsPanel,
}

impl<C: BookSearch> SearchView<C> {
    pub fn new(client: C) -> Self {
        SearchView {
            client,
            input: String::new(),
            heading_visible: false,
            panel: ResultsPanel::Idle,
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    pub fn heading_visible(&self) -> bool {
        self.heading_visible
    }

    pub fn results_html(&self) -> String {
        self.panel.render()
    }

    /// Book behind the result card at `index` (its `data-index`), if shown.
    /// Titles are not unique across results, so cards are addressed by
    /// position.
    pub fn result(&self, index: usize) -> Option<&Book> {
        match &self.panel {
            ResultsPanel::Books(books) => books.get(index),
            _ => None,
        }
    }

    /// Only Enter submits.
    pub async fn key_press(&mut self, key: &str) {
        if key == "Enter" {
            self.submit().await;
        }
    }

    pub async fn submit(&mut self) {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.panel = ResultsPanel::Prompt;
            return;
        }

        self.heading_visible = true;
        self.panel = ResultsPanel::Searching;

        self.panel = match self.client.search(&query).await {
            Ok(books) if books.is_empty() => ResultsPanel::NoResults,
            Ok(books) => ResultsPanel::Books(books),
            Err(e) => {
                tracing::error!(error = %e, query = %query, "Error fetching books");
                ResultsPanel::Failed
            }
        };
    }
}
