//! Station catalog: normalized name → station lookup.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::{Coordinates, Station};

use super::error::CatalogError;

/// Normalized station directory.
///
/// Stations are keyed by their exact name and iterated in name order.
/// The catalog is immutable once loaded.
///
/// Two raw JSON shapes are accepted:
///
/// ```
/// use metro_planner::stations::StationCatalog;
///
/// // A mapping from station name to its record
/// let by_name = StationCatalog::from_json_str(r#"{
///     "Versova": {"lat": 19.1309, "lon": 72.8185, "lines": ["Line 1"]}
/// }"#).unwrap();
/// assert!(by_name.contains("Versova"));
///
/// // A list of records under "stations"
/// let listed = StationCatalog::from_json_str(r#"{
///     "stations": [{"name": "Versova", "lat": 19.1309, "lon": 72.8185}]
/// }"#).unwrap();
/// assert_eq!(listed.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: BTreeMap<String, Station>,
}

impl StationCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a station.
    pub fn insert(&mut self, name: impl Into<String>, station: Station) {
        self.stations.insert(name.into(), station);
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(json).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })?;
        Self::from_value(&raw)
    }

    /// Load a catalog from a JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::MissingSource(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(path = %path.display(), stations = catalog.len(), "Loaded station data");
        Ok(catalog)
    }

    /// Normalize already-parsed JSON into a catalog.
    ///
    /// Entries without a usable `lat` and `lon` are skipped.
    pub fn from_value(raw: &Value) -> Result<Self, CatalogError> {
        let Value::Object(top) = raw else {
            return Err(CatalogError::Format(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        if top.values().all(Value::is_object) {
            return Ok(Self::from_mapping(top));
        }

        match top.get("stations") {
            Some(Value::Array(entries)) => Ok(Self::from_list(entries)),
            _ => Err(CatalogError::Format(
                "use a mapping of name to station or {\"stations\": [...]}".to_string(),
            )),
        }
    }

    /// `{ "Versova": {"lat": .., "lon": .., "lines": [..]}, .. }`
    fn from_mapping(top: &Map<String, Value>) -> Self {
        let mut catalog = Self::new();
        for (name, info) in top {
            match parse_station(info) {
                Some(station) => catalog.insert(name.clone(), station),
                None => debug!(station = %name, "Skipping station without coordinates"),
            }
        }
        catalog
    }

    /// `{ "stations": [ {"name": .., "lat": .., "lon": .., "lines": [..]}, .. ] }`
    fn from_list(entries: &[Value]) -> Self {
        let mut catalog = Self::new();
        for (idx, entry) in entries.iter().enumerate() {
            let name = entry_name(entry);
            match (name, parse_station(entry)) {
                (Some(name), Some(station)) => catalog.insert(name, station),
                _ => debug!(index = idx, name = ?name, "Skipping incomplete station entry"),
            }
        }
        catalog
    }

    /// Look up a station by exact name.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Returns true if the catalog has a station with this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// Iterate stations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Station)> {
        self.stations.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl FromIterator<(String, Station)> for StationCatalog {
    fn from_iter<T: IntoIterator<Item = (String, Station)>>(iter: T) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}

/// `name`, falling back to `station`; empty strings count as absent.
fn entry_name(entry: &Value) -> Option<&str> {
    ["name", "station"]
        .iter()
        .filter_map(|key| entry.get(key).and_then(Value::as_str))
        .find(|name| !name.is_empty())
}

fn parse_station(info: &Value) -> Option<Station> {
    let lat = number(info.get("lat")?)?;
    let lon = number(info.get("lon")?)?;

    let lines = info
        .get("lines")
        .and_then(Value::as_array)
        .map(|lines| lines.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    Some(Station::new(Coordinates::new(lat, lon), lines))
}

/// JSON numbers and finite numeric strings are both accepted.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()),
        _ => None,
    }
}
