//! On-disk storage for the most recently planned route.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::planner::RouteSummary;

/// File name used inside the output directory.
pub const LAST_ROUTE_FILE: &str = "last_route.json";

/// Errors from writing the route file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Creating the directory or writing the file failed
    #[error("failed to write route file: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the route failed
    #[error("failed to serialize route: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stores the last planned route as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct RouteStore {
    path: PathBuf,
}

impl RouteStore {
    /// Store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store as `last_route.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(LAST_ROUTE_FILE))
    }

    /// Path of the route file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a route, replacing any previous one.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, route: &RouteSummary) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(route)?;
        std::fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), "Saved last route");
        Ok(())
    }

    /// Load the last saved route.
    ///
    /// Returns `None` if no route has been saved or the file is unreadable.
    pub fn load(&self) -> Option<RouteSummary> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}
