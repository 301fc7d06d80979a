//! Splitting a path into same-line rides.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::Station;
use crate::stations::StationCatalog;

/// Label shown for hops where the two stations share no line.
pub const UNKNOWN_LINE: &str = "Unknown";

/// The line ridden for a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLine {
    /// A named line shared by every consecutive station pair in the segment
    Line(String),
    /// Consecutive stations with no line in common
    Unknown,
}

impl SegmentLine {
    pub fn as_str(&self) -> &str {
        match self {
            SegmentLine::Line(name) => name,
            SegmentLine::Unknown => UNKNOWN_LINE,
        }
    }
}

impl fmt::Display for SegmentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SegmentLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A contiguous ride on one line.
///
/// Adjacent segments share their boundary station: the last station of one
/// is the first station of the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub line: SegmentLine,
    /// Stations in travel order; only a zero-stop segment has just one
    pub stations: Vec<String>,
    /// Sum of hop distances, in kilometres
    pub distance_km: f64,
}

impl Segment {
    /// Boarding station.
    pub fn from(&self) -> &str {
        self.stations.first().map(String::as_str).unwrap_or_default()
    }

    /// Alighting station.
    pub fn to(&self) -> &str {
        self.stations.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of stops ridden.
    pub fn stops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Choose the line for the hop `a → b`.
///
/// Staying on the current line wins if both stations are on it; otherwise
/// the alphabetically first shared line is taken.
fn choose_line(current: Option<&SegmentLine>, a: Option<&Station>, b: Option<&Station>) -> SegmentLine {
    let (Some(a), Some(b)) = (a, b) else {
        return SegmentLine::Unknown;
    };

    if let Some(SegmentLine::Line(name)) = current
        && a.serves(name)
        && b.serves(name)
    {
        return SegmentLine::Line(name.clone());
    }

    a.shared_lines(b)
        .next()
        .map_or(SegmentLine::Unknown, |name| SegmentLine::Line(name.to_string()))
}

fn hop_km(a: Option<&Station>, b: Option<&Station>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.coords.distance_km(&b.coords),
        _ => 0.0,
    }
}

/// Group a path's hops into maximal same-line segments.
///
/// The segments cover the whole path, so a one-station path gives a single
/// zero-stop segment on the station's first line (or `Unknown` if it has
/// none). An empty path gives no segments.
pub fn deduce_segments(path: &[String], catalog: &StationCatalog) -> Vec<Segment> {
    if let [only] = path {
        let line = catalog
            .get(only)
            .and_then(|station| station.lines.iter().next())
            .map_or(SegmentLine::Unknown, |name| SegmentLine::Line(name.clone()));
        return vec![Segment {
            line,
            stations: vec![only.clone()],
            distance_km: 0.0,
        }];
    }

    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Option<Segment> = None;

    for pair in path.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let (a, b) = (catalog.get(from), catalog.get(to));

        let line = choose_line(current.as_ref().map(|s| &s.line), a, b);
        let km = hop_km(a, b);

        match current.as_mut() {
            Some(segment) if segment.line == line => {
                segment.stations.push(to.clone());
                segment.distance_km += km;
            }
            _ => {
                segments.extend(current.take());
                current = Some(Segment {
                    line,
                    stations: vec![from.clone(), to.clone()],
                    distance_km: km,
                });
            }
        }
    }

    segments.extend(current);
    segments
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinates;
    use proptest::prelude::*;

    const LINES: [&str; 3] = ["L1", "L2", "L3"];

    /// Five stations S0..S4 with random line memberships, and a random walk
    /// over them.
    fn scenario() -> impl Strategy<Value = (StationCatalog, Vec<String>)> {
        let memberships = prop::collection::vec(prop::collection::vec(0usize..3, 0..3), 5);
        let walk = prop::collection::vec(0usize..5, 0..12);

        (memberships, walk).prop_map(|(memberships, walk)| {
            let catalog = memberships
                .into_iter()
                .enumerate()
                .map(|(i, lines)| {
                    (
                        format!("S{i}"),
                        Station::new(
                            Coordinates::new(19.0 + i as f64 * 0.01, 72.8),
                            lines.into_iter().map(|l| LINES[l]),
                        ),
                    )
                })
                .collect();
            let path = walk.into_iter().map(|i| format!("S{i}")).collect();
            (catalog, path)
        })
    }

    proptest! {
        /// Joining segments and dropping repeated boundaries gives back the path
        #[test]
        fn segments_reconstruct_path((catalog, path) in scenario()) {
            let segments = deduce_segments(&path, &catalog);

            if path.is_empty() {
                prop_assert!(segments.is_empty());
                return Ok(());
            }

            let mut rebuilt: Vec<String> = Vec::new();
            for segment in &segments {
                prop_assert!(segment.stations.len() >= path.len().min(2));
                match rebuilt.last() {
                    Some(last) => {
                        prop_assert_eq!(last, &segment.stations[0]);
                        rebuilt.extend(segment.stations[1..].iter().cloned());
                    }
                    None => rebuilt.extend(segment.stations.iter().cloned()),
                }
            }
            prop_assert_eq!(rebuilt, path);
        }

        /// One segment per line change, plus one
        #[test]
        fn one_segment_per_change((catalog, path) in scenario()) {
            let segments = deduce_segments(&path, &catalog);
            if path.is_empty() {
                prop_assert!(segments.is_empty());
                return Ok(());
            }

            // Re-derive each hop's line: keep the previous hop's line while
            // both ends serve it, else the smallest shared line, else none
            let mut previous: Option<Option<String>> = None;
            let mut changes = 0;
            for pair in path.windows(2) {
                let a = catalog.get(&pair[0]).unwrap();
                let b = catalog.get(&pair[1]).unwrap();
                let line = match &previous {
                    Some(Some(name)) if a.lines.contains(name) && b.lines.contains(name) => {
                        Some(name.clone())
                    }
                    _ => a.lines.intersection(&b.lines).next().cloned(),
                };
                if previous.as_ref().is_some_and(|prev| *prev != line) {
                    changes += 1;
                }
                previous = Some(line);
            }
            prop_assert_eq!(segments.len(), changes + 1);

            for pair in segments.windows(2) {
                prop_assert_ne!(&pair[0].line, &pair[1].line);
            }
            let hops: usize = segments.iter().map(Segment::stops).sum();
            prop_assert_eq!(hops, path.len().saturating_sub(1));
        }

        /// A named line really serves both ends of every hop it labels
        #[test]
        fn labelled_lines_serve_every_hop((catalog, path) in scenario()) {
            for segment in deduce_segments(&path, &catalog) {
                if let SegmentLine::Line(name) = &segment.line {
                    for station in &segment.stations {
                        prop_assert!(catalog.get(station).unwrap().serves(name));
                    }
                }
            }
        }
    }
}
