//! Shared application state for the league server.

use std::sync::Arc;

use league::io::player_store::PlayerStore;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// League storage. Handlers only see the trait.
    pub store: Arc<dyn PlayerStore>,
}

impl AppState {
    pub fn new(store: impl PlayerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
