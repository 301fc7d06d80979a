//! Station records.

use std::collections::BTreeSet;

use super::Coordinates;

/// A station in the catalog.
///
/// The line set is ordered so that any choice made over it (such as picking
/// a shared line between two stations) is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Geographic position
    pub coords: Coordinates,
    /// Names of the lines calling at this station (may be empty)
    pub lines: BTreeSet<String>,
}

impl Station {
    /// Creates a station from coordinates and any collection of line names.
    ///
    /// Duplicate line names collapse.
    pub fn new<I, S>(coords: Coordinates, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coords,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `line` calls at this station.
    pub fn serves(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Lines shared with another station, in name order.
    pub fn shared_lines<'a>(&'a self, other: &'a Station) -> impl Iterator<Item = &'a str> {
        self.lines.intersection(&other.lines).map(String::as_str)
    }
}
