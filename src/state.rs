use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::CatalogClient;

/// Shared application state passed to all handlers.
/// Everything here is read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub hostname: Option<Arc<str>>,
    pub static_dir: PathBuf,
}
