//! Station data error types.

/// Errors that can occur while loading the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The backing station data could not be located
    #[error("station data not found at {0}")]
    MissingSource(String),

    /// Station data is present but matches neither accepted shape
    #[error("station data format not recognized: {0}")]
    Format(String),

    /// Reading the station data failed
    #[error("failed to read station data: {0}")]
    Io(#[from] std::io::Error),

    /// Station data is not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
