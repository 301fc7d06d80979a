//! Geographic coordinates and great-circle distance.

use std::fmt;
use std::str::FromStr;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when parsing coordinates from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// [`Coordinates::new`] performs no range validation: out-of-range or NaN
/// values simply propagate through [`Coordinates::distance_km`]. Parsing
/// goes through [`Coordinates::validate`] and rejects them.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Coordinates;
///
/// let here: Coordinates = "19.1509, 72.8236".parse().unwrap();
/// assert_eq!(here.lat, 19.1509);
/// assert_eq!(here.lon, 72.8236);
///
/// // Missing separator is rejected
/// assert!("19.1509 72.8236".parse::<Coordinates>().is_err());
///
/// // So are non-finite and out-of-range values
/// assert!("nan,nan".parse::<Coordinates>().is_err());
/// assert!("91,72.8".parse::<Coordinates>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(*self, *other)
    }

    /// Check that both values are finite and within ±90° latitude and
    /// ±180° longitude.
    pub fn validate(self) -> Result<Self, InvalidCoordinates> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(InvalidCoordinates {
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(InvalidCoordinates {
                reason: "latitude out of range",
            });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(InvalidCoordinates {
                reason: "longitude out of range",
            });
        }
        Ok(self)
    }
}

/// Haversine distance between two points in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let x = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * x.sqrt().asin()
}

impl FromStr for Coordinates {
    type Err = InvalidCoordinates;

    /// Parses `"lat,lon"`; whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.trim().split_once(',').ok_or(InvalidCoordinates {
            reason: "expected 'lat,lon'",
        })?;

        let lat = lat.trim().parse::<f64>().map_err(|_| InvalidCoordinates {
            reason: "latitude is not a number",
        })?;
        let lon = lon.trim().parse::<f64>().map_err(|_| InvalidCoordinates {
            reason: "longitude is not a number",
        })?;

        Self { lat, lon }.validate()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
