//! Station data loading.
//!
//! Raw station records come from a JSON file or URL in one of two shapes
//! and are normalized into a [`StationCatalog`].

mod catalog;
mod client;
mod error;
mod source;

pub use catalog::StationCatalog;
pub use client::{StationClient, StationClientConfig};
pub use error::CatalogError;
pub use source::StationSource;
