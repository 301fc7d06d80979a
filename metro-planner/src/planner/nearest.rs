//! Nearest-station resolution.

use crate::domain::{Coordinates, RouteError};
use crate::stations::StationCatalog;

/// The station closest to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    pub name: String,
    /// Straight-line distance from the query point, in kilometres
    pub distance_km: f64,
}

/// Find the catalog station closest to `point` by linear scan.
///
/// Ties go to the first station in catalog order, which is name order.
/// `point` should be finite (see [`Coordinates::validate`]); a NaN point
/// makes every distance NaN and the result meaningless.
pub fn find_nearest_station(
    point: Coordinates,
    catalog: &StationCatalog,
) -> Result<NearestStation, RouteError> {
    let mut best: Option<(&str, f64)> = None;

    for (name, station) in catalog.iter() {
        let d = point.distance_km(&station.coords);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((name, d)),
        }
    }

    best.map(|(name, distance_km)| NearestStation {
        name: name.to_string(),
        distance_km,
    })
    .ok_or(RouteError::EmptyCatalog)
}
