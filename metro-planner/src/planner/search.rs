//! Shortest-path search over the line graph.
//!
//! Dijkstra's algorithm with a binary heap. All edge weights are
//! non-negative distances, so the search stops as soon as the target is
//! settled.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::graph::LineGraph;

/// An ordered station sequence from origin to destination, inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub stations: Vec<String>,
    /// Total length in kilometres
    pub distance_km: f64,
}

impl Path {
    /// First station.
    pub fn origin(&self) -> &str {
        self.stations.first().map(String::as_str).unwrap_or_default()
    }

    /// Last station.
    pub fn destination(&self) -> &str {
        self.stations.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of station-to-station hops.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Heap entry. Ordered so that `BinaryHeap` pops the smallest distance
/// first, with station name as a stable tie-break.
#[derive(Debug, PartialEq)]
struct Frontier<'a> {
    distance_km: f64,
    station: &'a str,
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance_km
            .total_cmp(&self.distance_km)
            .then_with(|| other.station.cmp(self.station))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest path from `source` to `target`.
///
/// Returns `None` if either station is absent from the graph or the two
/// are not connected. A station's path to itself is the single station
/// with distance zero.
pub fn shortest_path<'a>(graph: &'a LineGraph, source: &'a str, target: &'a str) -> Option<Path> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    let mut dist: HashMap<&str, f64> = HashMap::from([(source, 0.0)]);
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut heap = BinaryHeap::from([Frontier {
        distance_km: 0.0,
        station: source,
    }]);

    while let Some(Frontier {
        distance_km,
        station,
    }) = heap.pop()
    {
        if station == target {
            break;
        }
        if distance_km > dist.get(station).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for edge in graph.neighbors(station) {
            let candidate = distance_km + edge.distance_km;
            let known = dist.get(edge.to.as_str()).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                dist.insert(&edge.to, candidate);
                prev.insert(&edge.to, station);
                heap.push(Frontier {
                    distance_km: candidate,
                    station: &edge.to,
                });
            }
        }
    }

    let distance_km = *dist.get(target)?;

    let mut stations = vec![target.to_string()];
    let mut current = target;
    while current != source {
        current = *prev.get(current)?;
        stations.push(current.to_string());
    }
    stations.reverse();

    trace!(
        from = source,
        to = target,
        hops = stations.len() - 1,
        distance_km,
        "Found shortest path"
    );

    Some(Path {
        stations,
        distance_km,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random graph over stations N0..N5 with positive weights.
    fn random_graph() -> impl Strategy<Value = LineGraph> {
        prop::collection::vec((0usize..6, 0usize..6, 0.1f64..10.0), 1..15).prop_map(|edges| {
            let mut g = LineGraph::new();
            for (a, b, w) in edges {
                g.add_edge(&format!("N{a}"), &format!("N{b}"), w);
            }
            g
        })
    }

    fn name(i: usize) -> String {
        format!("N{i}")
    }

    proptest! {
        /// Any station on the graph reaches itself at zero cost
        #[test]
        fn self_distance_is_zero(g in random_graph()) {
            let stations: Vec<String> = g.stations().map(str::to_string).collect();
            for s in &stations {
                let path = shortest_path(&g, s, s).unwrap();
                prop_assert_eq!(path.stations.len(), 1);
                prop_assert_eq!(path.distance_km, 0.0);
            }
        }

        /// shortest(a, c) <= shortest(a, b) + shortest(b, c)
        #[test]
        fn triangle_inequality(g in random_graph(), a in 0usize..6, b in 0usize..6, c in 0usize..6) {
            let (a, b, c) = (name(a), name(b), name(c));
            if let (Some(ab), Some(bc), Some(ac)) = (
                shortest_path(&g, &a, &b),
                shortest_path(&g, &b, &c),
                shortest_path(&g, &a, &c),
            ) {
                prop_assert!(ac.distance_km <= ab.distance_km + bc.distance_km + 1e-9);
            }
        }

        /// Path endpoints match and every hop is a real edge
        #[test]
        fn paths_follow_edges(g in random_graph(), a in 0usize..6, b in 0usize..6) {
            let (a, b) = (name(a), name(b));
            if let Some(path) = shortest_path(&g, &a, &b) {
                prop_assert_eq!(path.origin(), a.as_str());
                prop_assert_eq!(path.destination(), b.as_str());

                let mut total = 0.0;
                for pair in path.stations.windows(2) {
                    let cheapest = g
                        .neighbors(&pair[0])
                        .iter()
                        .filter(|e| e.to == pair[1])
                        .map(|e| e.distance_km)
                        .fold(f64::INFINITY, f64::min);
                    prop_assert!(cheapest.is_finite());
                    total += cheapest;
                }
                prop_assert!((total - path.distance_km).abs() < 1e-9);
            }
        }

        /// Search is symmetric in distance on an undirected graph
        #[test]
        fn symmetric_distance(g in random_graph(), a in 0usize..6, b in 0usize..6) {
            let (a, b) = (name(a), name(b));
            let ab = shortest_path(&g, &a, &b).map(|p| p.distance_km);
            let ba = shortest_path(&g, &b, &a).map(|p| p.distance_km);
            match (ab, ba) {
                (Some(x), Some(y)) => prop_assert!((x - y).abs() < 1e-9),
                (x, y) => prop_assert_eq!(x.is_some(), y.is_some()),
            }
        }
    }
}
