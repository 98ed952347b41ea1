use std::fmt;

use crate::models::Book;

use super::card::favorite_card;
use super::storage::{Storage, StorageError};

/// The one storage key holding the whole favorites list.
pub const FAVORITES_KEY: &str = "favorites";
pub const EMPTY_FAVORITES: &str = "No favorites yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Message surfaced to the user after a favorites change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(String),
    AlreadySaved(String),
    Removed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved(title) => write!(f, "Saved \"{title}\" to favorites."),
            Notice::AlreadySaved(title) => write!(f, "\"{title}\" is already in favorites."),
            Notice::Removed(title) => write!(f, "Removed \"{title}\" from favorites."),
        }
    }
}

/// Ordered list of saved books, unique by exact title.
///
/// Every operation re-reads storage, so whatever another writer left there is
/// what gets mutated (last write wins).
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: Storage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        FavoritesStore { storage }
    }

    /// Current list; an absent key reads as empty.
    pub fn list(&self) -> Result<Vec<Book>, StorageError> {
        match self.storage.get_item(FAVORITES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self, books: &[Book]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(books)?;
        self.storage.set_item(FAVORITES_KEY, &raw)
    }

    /// Append `book` unless a book with the same title is already saved.
    pub fn save(&mut self, book: Book) -> Result<SaveOutcome, StorageError> {
        let mut books = self.list()?;
        if books.iter().any(|b| b.title == book.title) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        books.push(book);
        self.persist(&books)?;
        Ok(SaveOutcome::Saved)
    }

    /// Drop every book titled `title`. Returns how many were removed.
    pub fn remove(&mut self, title: &str) -> Result<usize, StorageError> {
        let mut books = self.list()?;
        let before = books.len();
        books.retain(|b| b.title != title);
        self.persist(&books)?;
        Ok(before - books.len())
    }
}

/// The favorites panel. Re-rendered from storage after every change.
#[derive(Debug)]
pub struct FavoritesView<S> {
    store: FavoritesStore<S>,
    html: String,
}

impl<S: Storage> FavoritesView<S> {
    /// Build the panel and render it from storage, as on page load.
    pub fn load(store: FavoritesStore<S>) -> Result<Self, StorageError> {
        let mut view = FavoritesView {
            store,
            html: String::new(),
        };
        view.render()?;
        Ok(view)
    }

    pub fn store(&self) -> &FavoritesStore<S> {
        &self.store
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn render(&mut self) -> Result<&str, StorageError> {
        let books = self.store.list()?;
        self.html = if books.is_empty() {
            format!("<p>{EMPTY_FAVORITES}</p>")
        } else {
            books.iter().map(|b| favorite_card(b).to_string()).collect()
        };
        Ok(self.html.as_str())
    }

    pub fn save(&mut self, book: Book) -> Result<Notice, StorageError> {
        let title = book.title.clone();
        match self.store.save(book)? {
            SaveOutcome::Saved => {
                self.render()?;
                Ok(Notice::Saved(title))
            }
            SaveOutcome::AlreadySaved => Ok(Notice::AlreadySaved(title)),
        }
    }

    pub fn remove(&mut self, title: &str) -> Result<Notice, StorageError> {
        self.store.remove(title)?;
        self.render()?;
        Ok(Notice::Removed(title.to_string()))
    }
}
