//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::store::RouteStore;

/// Shared application state.
///
/// Everything here is read-only after startup except the route cache,
/// which synchronizes internally.
#[derive(Clone)]
pub struct AppState {
    /// Cached route planner
    pub planner: Arc<CachedPlanner>,

    /// Where the last planned route is saved
    pub store: Arc<RouteStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: CachedPlanner, store: RouteStore) -> Self {
        Self {
            planner: Arc::new(planner),
            store: Arc::new(store),
        }
    }
}
