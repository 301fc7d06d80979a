//! Route planning over the metro line graph.
//!
//! A query composes four steps: resolve the station nearest to the
//! traveller, find the shortest path to the destination with Dijkstra's
//! algorithm, price it from a distance-tiered fare table and split it into
//! per-line segments for display.

mod config;
mod fare;
mod nearest;
mod route;
mod search;
mod segments;

pub use config::{DEFAULT_AVERAGE_SPEED_KMH, PlannerConfig};
pub use fare::{FareTable, FareTier, fare_from_distance_km};
pub use nearest::{NearestStation, find_nearest_station};
pub use route::{RoutePlan, RoutePlanner, RouteSummary};
pub use search::{Path, shortest_path};
pub use segments::{Segment, SegmentLine, UNKNOWN_LINE, deduce_segments};
