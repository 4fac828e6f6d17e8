use crate::core::engine::RateEngine;
use crate::core::RateStore;
use std::sync::Arc;

/// Handler state, built once at startup and injected into the router.
pub struct AppState<S: RateStore> {
    pub engine: Arc<RateEngine<S>>,
}

impl<S: RateStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            engine: Arc::new(RateEngine::new(store)),
        }
    }
}

impl<S: RateStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
