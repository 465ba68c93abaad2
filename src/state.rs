//! Shared application state for all routes.

use crate::queries::MovieStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected storage handle; the only resource shared between requests.
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }
}
