//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::{RoutePlan, Segment};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Traveller latitude in degrees
    pub lat: f64,

    /// Traveller longitude in degrees
    pub lon: f64,

    /// Destination station name (exact match)
    pub destination: String,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Boarding station
    pub origin: String,

    /// Distance from the requested point to the boarding station, in metres
    pub origin_distance_m: f64,

    /// Alighting station
    pub destination: String,

    /// Every station on the route, in order
    pub path: Vec<String>,

    /// Total ride distance
    pub distance_km: f64,

    /// Estimated travel time
    pub time_min: f64,

    /// Fare in rupees
    pub fare_inr: u32,

    /// Number of line changes
    pub changes: usize,

    /// Step-by-step breakdown
    pub segments: Vec<SegmentResult>,
}

impl RouteResponse {
    /// Build from a planned route.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            origin: plan.origin.clone(),
            origin_distance_m: plan.origin_distance_km * 1000.0,
            destination: plan.destination.clone(),
            path: plan.path.stations.clone(),
            distance_km: plan.distance_km(),
            time_min: plan.time_min,
            fare_inr: plan.fare_inr,
            changes: plan.changes(),
            segments: plan.segments.iter().map(SegmentResult::from_segment).collect(),
        }
    }
}

/// One ride on a single line.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Line name, or "Unknown"
    pub line: String,

    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,

    /// Number of stops ridden
    pub stops: usize,

    /// Ride distance
    pub distance_km: f64,

    /// Stations on this ride, including both ends
    pub stations: Vec<String>,
}

impl SegmentResult {
    /// Build from a segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            line: segment.line.to_string(),
            from: segment.from().to_string(),
            to: segment.to().to_string(),
            stops: segment.stops(),
            distance_km: segment.distance_km,
            stations: segment.stations.clone(),
        }
    }
}

/// A station in the listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<String>,
}

impl StationResult {
    /// Build from a catalog entry.
    pub fn from_station(name: &str, station: &Station) -> Self {
        Self {
            name: name.to_string(),
            lat: station.coords.lat,
            lon: station.coords.lon,
            lines: station.lines.iter().cloned().collect(),
        }
    }
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// All stations, sorted by name
    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
