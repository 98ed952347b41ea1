//! The search page's behavior, independent of any DOM.
//!
//! [`Page`] wires the search panel and the favorites panel together the way
//! the browser page does: favorites render on load, card buttons dispatch a
//! [`CardAction`], and every favorites change re-renders that panel.

pub mod api;
pub mod card;
pub mod favorites;
pub mod markup;
pub mod search;
pub mod storage;

pub use api::ApiClient;
pub use card::CardAction;
pub use favorites::{FavoritesStore, FavoritesView, Notice};
pub use search::{BookSearch, FetchError, ResultsPanel, SearchView};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

pub struct Page<C, S> {
    pub search: SearchView<C>,
    pub favorites: FavoritesView<S>,
}

impl<C: BookSearch, S: Storage> Page<C, S> {
    /// Page load: the favorites panel is rendered straight away.
    pub fn load(client: C, storage: S) -> Result<Self, StorageError> {
        Ok(Page {
            search: SearchView::new(client),
            favorites: FavoritesView::load(FavoritesStore::new(storage))?,
        })
    }

    pub fn dispatch(&mut self, action: CardAction) -> Result<Notice, StorageError> {
        match action {
            CardAction::Save(book) => self.favorites.save(book),
            CardAction::Remove(title) => self.favorites.remove(&title),
        }
    }

    /// Save the book on the result card at `index`. `None` if no such card
    /// is shown.
    pub fn save_result(&mut self, index: usize) -> Option<Result<Notice, StorageError>> {
        let book = self.search.result(index)?.clone();
        Some(self.dispatch(CardAction::Save(book)))
    }
}
