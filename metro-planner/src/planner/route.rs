//! Route queries.
//!
//! A query resolves the nearest origin station, checks both endpoints,
//! runs the shortest-path search, prices the result and breaks it into
//! per-line segments.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Coordinates, RouteError};
use crate::graph::LineGraph;
use crate::lines::LineDefinitions;
use crate::stations::StationCatalog;

use super::config::PlannerConfig;
use super::nearest::{NearestStation, find_nearest_station};
use super::search::{Path, shortest_path};
use super::segments::{Segment, deduce_segments};

/// The persisted record of a planned route.
///
/// Field names are part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub path: Vec<String>,
    pub distance_km: f64,
    pub time_min: f64,
    pub fare_inr: u32,
}

/// A fully planned route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Boarding station
    pub origin: String,
    /// Straight-line distance from the query point to `origin` (km)
    pub origin_distance_km: f64,
    /// Alighting station
    pub destination: String,
    pub path: Path,
    /// Estimated travel time in minutes
    pub time_min: f64,
    pub fare_inr: u32,
    pub segments: Vec<Segment>,
}

impl RoutePlan {
    /// Total ride distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.path.distance_km
    }

    /// Estimated travel time.
    pub fn travel_time(&self) -> Duration {
        Duration::seconds((self.time_min * 60.0).round() as i64)
    }

    /// Number of line changes; one fewer than the segment count.
    pub fn changes(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// The persisted form of this route.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            path: self.path.stations.clone(),
            distance_km: self.path.distance_km,
            time_min: self.time_min,
            fare_inr: self.fare_inr,
        }
    }
}

/// Route planner over a fixed network.
///
/// Catalog and graph are built once and never mutated, so a planner can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    catalog: StationCatalog,
    graph: LineGraph,
    config: PlannerConfig,
}

impl RoutePlanner {
    /// Build a planner, constructing the line graph from `lines`.
    pub fn new(catalog: StationCatalog, lines: &LineDefinitions, config: PlannerConfig) -> Self {
        let graph = LineGraph::build(lines, &catalog);
        info!(
            stations = catalog.len(),
            connected = graph.station_count(),
            lines = lines.len(),
            "Route planner ready"
        );
        Self {
            catalog,
            graph,
            config,
        }
    }

    /// The station catalog.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// The line graph.
    pub fn graph(&self) -> &LineGraph {
        &self.graph
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Station nearest to a point.
    pub fn nearest_station(&self, point: Coordinates) -> Result<NearestStation, RouteError> {
        find_nearest_station(point, &self.catalog)
    }

    /// Plan from an arbitrary point to a named destination station.
    ///
    /// The journey starts at the station nearest to `origin`.
    pub fn plan(&self, origin: Coordinates, destination: &str) -> Result<RoutePlan, RouteError> {
        let nearest = self.nearest_station(origin)?;
        debug!(
            point = %origin,
            station = %nearest.name,
            distance_km = nearest.distance_km,
            "Resolved origin station"
        );

        let mut plan = self.plan_between(&nearest.name, destination)?;
        plan.origin_distance_km = nearest.distance_km;
        Ok(plan)
    }

    /// Plan between two named stations.
    pub fn plan_between(&self, origin: &str, destination: &str) -> Result<RoutePlan, RouteError> {
        for name in [destination, origin] {
            if !self.catalog.contains(name) {
                return Err(RouteError::UnknownStation(name.to_string()));
            }
        }
        for name in [origin, destination] {
            if !self.graph.contains(name) {
                return Err(RouteError::NotOnNetwork(name.to_string()));
            }
        }

        let path =
            shortest_path(&self.graph, origin, destination).ok_or_else(|| RouteError::NoPath {
                from: origin.to_string(),
                to: destination.to_string(),
            })?;

        let fare_inr = self.config.fares.fare_for(path.distance_km);
        let time_min = self.config.travel_time_mins(path.distance_km);
        let segments = deduce_segments(&path.stations, &self.catalog);

        info!(
            from = origin,
            to = destination,
            stations = path.stations.len(),
            distance_km = path.distance_km,
            fare_inr,
            "Planned route"
        );

        Ok(RoutePlan {
            origin: origin.to_string(),
            origin_distance_km: 0.0,
            destination: destination.to_string(),
            path,
            time_min,
            fare_inr,
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::lines::{LineDefinitions, LineDefinitionsBuilder, mumbai_lines};
    use crate::planner::SegmentLine;

    fn station(lat: f64, lon: f64, lines: &[&str]) -> Station {
        Station::new(Coordinates::new(lat, lon), lines.iter().copied())
    }

    /// Versova and Andheri on L1, Andheri and Borivali on L2A, plus an
    /// island line and a station on no line at all.
    fn planner() -> RoutePlanner {
        let mut catalog = StationCatalog::new();
        catalog.insert("Versova", station(19.1309, 72.8185, &["L1"]));
        catalog.insert("Andheri", station(19.1197, 72.8468, &["L1", "L2A"]));
        catalog.insert("Borivali", station(19.2307, 72.8567, &["L2A"]));
        catalog.insert("Gorai", station(19.2450, 72.7950, &["Island"]));
        catalog.insert("Manori", station(19.2200, 72.7850, &["Island"]));
        catalog.insert("Depot", station(19.0000, 72.9000, &[]));

        let lines = LineDefinitionsBuilder::new()
            .line("L1", &["Versova", "Andheri"])
            .line("L2A", &["Borivali", "Andheri"])
            .line("Island", &["Gorai", "Manori"])
            .build();

        RoutePlanner::new(catalog, &lines, PlannerConfig::default())
    }

    #[test]
    fn interchange_scenario() {
        let planner = planner();
        // A point a few hundred metres from Versova
        let plan = planner
            .plan(Coordinates::new(19.1320, 72.8200), "Borivali")
            .unwrap();

        assert_eq!(plan.origin, "Versova");
        assert!(plan.origin_distance_km > 0.0 && plan.origin_distance_km < 0.5);
        assert_eq!(plan.path.stations, vec!["Versova", "Andheri", "Borivali"]);

        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segments[0].line, SegmentLine::Line("L1".into()));
        assert_eq!(plan.segments[0].stations, vec!["Versova", "Andheri"]);
        assert_eq!(plan.segments[1].line, SegmentLine::Line("L2A".into()));
        assert_eq!(plan.segments[1].stations, vec!["Andheri", "Borivali"]);
        assert_eq!(plan.changes(), 1);
    }

    #[test]
    fn fare_and_time_follow_distance() {
        let planner = planner();
        let plan = planner.plan_between("Versova", "Borivali").unwrap();

        let d = plan.distance_km();
        assert_eq!(plan.fare_inr, planner.config().fares.fare_for(d));
        assert!((plan.time_min - d / 30.0 * 60.0).abs() < 1e-9);
        assert_eq!(
            plan.travel_time(),
            Duration::seconds((plan.time_min * 60.0).round() as i64)
        );
    }

    #[test]
    fn unknown_destination() {
        let err = planner()
            .plan(Coordinates::new(19.1309, 72.8185), "Atlantis")
            .unwrap_err();
        assert_eq!(err, RouteError::UnknownStation("Atlantis".into()));
        assert!(err.is_not_found());
    }

    #[test]
    fn unknown_origin_name() {
        let err = planner().plan_between("Atlantis", "Versova").unwrap_err();
        assert_eq!(err, RouteError::UnknownStation("Atlantis".into()));
    }

    #[test]
    fn station_on_no_line() {
        let err = planner().plan_between("Versova", "Depot").unwrap_err();
        assert_eq!(err, RouteError::NotOnNetwork("Depot".into()));

        // Nearest station to the depot's own coordinates is the depot itself
        let err = planner()
            .plan(Coordinates::new(19.0, 72.9), "Versova")
            .unwrap_err();
        assert_eq!(err, RouteError::NotOnNetwork("Depot".into()));
    }

    #[test]
    fn disconnected_network() {
        let err = planner().plan_between("Versova", "Gorai").unwrap_err();
        assert_eq!(
            err,
            RouteError::NoPath {
                from: "Versova".into(),
                to: "Gorai".into()
            }
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn empty_catalog() {
        let planner = RoutePlanner::new(
            StationCatalog::new(),
            &mumbai_lines(),
            PlannerConfig::default(),
        );
        let err = planner
            .plan(Coordinates::new(19.1, 72.8), "Versova")
            .unwrap_err();
        assert_eq!(err, RouteError::EmptyCatalog);
    }

    #[test]
    fn already_there() {
        let plan = planner().plan_between("Andheri", "Andheri").unwrap();
        assert_eq!(plan.path.stations, vec!["Andheri"]);
        assert_eq!(plan.distance_km(), 0.0);
        assert_eq!(plan.fare_inr, 10);
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.segments[0].stations, vec!["Andheri"]);
        assert_eq!(plan.segments[0].line, SegmentLine::Line("L1".into()));
        assert_eq!(plan.segments[0].stops(), 0);
        assert_eq!(plan.changes(), 0);
    }

    #[test]
    fn errors_leave_planner_usable() {
        let planner = planner();
        assert!(planner.plan_between("Versova", "Atlantis").is_err());
        assert!(planner.plan_between("Versova", "Gorai").is_err());
        assert!(planner.plan_between("Versova", "Borivali").is_ok());
    }

    #[test]
    fn summary_roundtrips_through_json() {
        let summary = planner().plan_between("Versova", "Borivali").unwrap().summary();

        let json = serde_json::to_value(&summary).unwrap();
        for field in ["origin", "destination", "path", "distance_km", "time_min", "fare_inr"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }

        let back: RouteSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn bundled_network() {
        let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalog = StationCatalog::load_file(data.join("stations.json")).unwrap();
        let lines = LineDefinitions::load_file(data.join("lines.json")).unwrap();
        assert_eq!(lines, mumbai_lines());

        let planner = RoutePlanner::new(catalog, &lines, PlannerConfig::default());
        let plan = planner.plan_between("Versova", "Borivali").unwrap();

        assert_eq!(
            plan.path.stations,
            vec!["Versova", "Azad Nagar", "D N Nagar", "Andheri West", "Malad", "Borivali"]
        );
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segments[0].line.as_str(), "Line 1 (Blue)");
        assert_eq!(plan.segments[0].to(), "D N Nagar");
        assert_eq!(plan.segments[1].line.as_str(), "Line 2A (Yellow)");
        assert_eq!(plan.segments[1].from(), "D N Nagar");
    }
}
