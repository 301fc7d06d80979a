//! Line graph construction.
//!
//! The network is an undirected weighted graph whose vertices are station
//! names and whose edges join consecutive stations along each line. Edge
//! weights are great-circle distances in kilometres.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::lines::LineDefinitions;
use crate::stations::StationCatalog;

/// One direction of a connection between adjacent stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Neighbouring station
    pub to: String,
    /// Distance in kilometres
    pub distance_km: f64,
}

/// Undirected weighted adjacency lists keyed by station name.
///
/// Every edge is stored in both directions with the same weight. Stations
/// joined by more than one line get one parallel edge per line.
#[derive(Debug, Clone, Default)]
pub struct LineGraph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl LineGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from ordered line definitions.
    ///
    /// Stations missing from the catalog are dropped from each line before
    /// consecutive pairs are joined. A line left with fewer than two known
    /// stations contributes nothing.
    pub fn build(lines: &LineDefinitions, catalog: &StationCatalog) -> Self {
        let mut graph = Self::new();

        for line in lines.iter() {
            let hops = line.hops(|name| catalog.contains(name));
            if hops.is_empty() {
                warn!(line = %line.name, "Line has fewer than two known stations, no edges added");
                continue;
            }

            for (a, b) in &hops {
                // Both endpoints passed the catalog filter
                if let (Some(sa), Some(sb)) = (catalog.get(a), catalog.get(b)) {
                    graph.add_edge(a, b, sa.coords.distance_km(&sb.coords));
                }
            }

            debug!(line = %line.name, hops = hops.len(), "Added line to graph");
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "Built line graph"
        );

        graph
    }

    /// Join two stations in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str, distance_km: f64) {
        self.adjacency.entry(a.to_string()).or_default().push(Edge {
            to: b.to_string(),
            distance_km,
        });
        self.adjacency.entry(b.to_string()).or_default().push(Edge {
            to: a.to_string(),
            distance_km,
        });
    }

    /// Edges leaving `station`; empty if the station is not in the graph.
    pub fn neighbors(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if at least one edge touches `station`.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Iterate the stations that have edges.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of stations with at least one edge.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}
