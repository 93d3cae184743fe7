//! Application state.

use custgraph_core::CustomerStore;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// The store is owned here for the lifetime of the server; handlers only
/// borrow it, so no route can tear it down for the others.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }
}
