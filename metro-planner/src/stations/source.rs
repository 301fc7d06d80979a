//! Where station data comes from.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use super::catalog::StationCatalog;
use super::client::{StationClient, StationClientConfig};
use super::error::CatalogError;

/// Location of the backing station data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationSource {
    /// A JSON file on disk
    File(PathBuf),
    /// A JSON document served over HTTP(S)
    Url(String),
}

impl StationSource {
    /// Interpret a location string: `http://` and `https://` prefixes are
    /// URLs, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            StationSource::Url(location.to_string())
        } else {
            StationSource::File(PathBuf::from(location))
        }
    }

    /// Load and normalize the station catalog from this source.
    pub async fn load(&self) -> Result<StationCatalog, CatalogError> {
        match self {
            StationSource::File(path) => StationCatalog::load_file(path),
            StationSource::Url(url) => {
                let client = StationClient::new(StationClientConfig::default())?;
                let raw = client.fetch(url).await?;
                let catalog = StationCatalog::from_value(&raw)?;
                info!(url = %url, stations = catalog.len(), "Fetched station data");
                Ok(catalog)
            }
        }
    }
}

impl fmt::Display for StationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationSource::File(path) => write!(f, "{}", path.display()),
            StationSource::Url(url) => f.write_str(url),
        }
    }
}
