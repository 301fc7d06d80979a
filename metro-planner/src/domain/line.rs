//! Line definitions.

use serde::{Deserialize, Serialize};

/// A metro line: a name and the physical order of its stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub stations: Vec<String>,
}

impl Line {
    /// Creates a line from a name and an ordered list of station names.
    pub fn new<I, S>(name: impl Into<String>, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Consecutive station pairs along the line, restricted to the stations
    /// accepted by `keep`.
    ///
    /// Rejected stations are dropped before pairing, so their neighbours
    /// become adjacent.
    pub fn hops<'a>(&'a self, keep: impl Fn(&str) -> bool) -> Vec<(&'a str, &'a str)> {
        let kept: Vec<&str> = self
            .stations
            .iter()
            .map(String::as_str)
            .filter(|s| keep(s))
            .collect();

        kept.windows(2).map(|w| (w[0], w[1])).collect()
    }
}
