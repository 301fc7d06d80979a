//! Route query errors.
//!
//! These errors are local to a single query. None of them leave the
//! catalog or graph in a different state, so callers may re-prompt and
//! try again.

/// Errors from planning a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station name is not in the catalog
    #[error("station '{0}' not found in station data")]
    UnknownStation(String),

    /// Station exists but no line connects it to the network
    #[error("station '{0}' is not connected to any line")]
    NotOnNetwork(String),

    /// Both endpoints are on the network but in disconnected parts of it
    #[error("no route from {from} to {to}")]
    NoPath { from: String, to: String },

    /// Nearest-station lookup against an empty catalog
    #[error("station catalog is empty")]
    EmptyCatalog,
}

impl RouteError {
    /// Returns true for errors where a named station could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RouteError::UnknownStation(_) | RouteError::NotOnNetwork(_)
        )
    }
}
