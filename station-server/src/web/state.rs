//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedMatcher};
use crate::matcher::MatchConfig;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station matcher with cached results; owns the catalog
    pub matcher: Arc<CachedMatcher>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StationCatalog, config: MatchConfig, cache: &CacheConfig) -> Self {
        Self {
            matcher: Arc::new(CachedMatcher::new(Arc::new(catalog), config, cache)),
        }
    }

    /// The station reference set.
    pub fn catalog(&self) -> &StationCatalog {
        self.matcher.catalog()
    }
}
