//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalogue::Catalogue;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalogue is read-only
/// for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalogue: Catalogue,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalogue }),
        }
    }

    /// Get a reference to the catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.inner.catalogue
    }
}
