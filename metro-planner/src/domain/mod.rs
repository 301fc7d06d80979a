//! Domain types for the metro route planner.
//!
//! Stations, lines and coordinates are plain immutable values. They are
//! created once when station data and line definitions are loaded and
//! shared read-only by every query afterwards.

mod coords;
mod error;
mod line;
mod station;

pub use coords::{Coordinates, EARTH_RADIUS_KM, InvalidCoordinates, haversine_km};
pub use error::RouteError;
pub use line::Line;
pub use station::Station;
