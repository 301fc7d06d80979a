//! Line definitions.
//!
//! The physical order of stations along each line is operator-supplied
//! configuration, not something derivable from station data. Definitions
//! are loaded from a JSON file, built in code, or taken from the built-in
//! default network.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::domain::Line;

/// Errors from loading line definitions.
#[derive(Debug, thiserror::Error)]
pub enum LineConfigError {
    /// Definitions file does not exist
    #[error("line definitions not found at {0}")]
    MissingFile(String),

    /// Reading the file failed
    #[error("failed to read line definitions: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a recognized definitions document
    #[error("invalid line definitions: {message}")]
    Json { message: String },
}

/// Accepted on-disk layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinesFile {
    /// `{"lines": [{"name": "..", "stations": [..]}, ..]}`, order preserved
    Listed { lines: Vec<Line> },
    /// `{"Line name": [..], ..}`, document order preserved
    Mapped(Map<String, Value>),
}

/// An ordered collection of line definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDefinitions {
    lines: Vec<Line>,
}

impl LineDefinitions {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Parse definitions from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LineConfigError> {
        let file: LinesFile = serde_json::from_str(json).map_err(|e| LineConfigError::Json {
            message: e.to_string(),
        })?;

        let lines = match file {
            LinesFile::Listed { lines } => lines,
            LinesFile::Mapped(map) => map
                .into_iter()
                .map(|(name, stations)| {
                    let stations: Vec<String> =
                        serde_json::from_value(stations).map_err(|e| LineConfigError::Json {
                            message: format!("line '{name}': {e}"),
                        })?;
                    Ok(Line::new(name, stations))
                })
                .collect::<Result<_, LineConfigError>>()?,
        };

        Ok(Self { lines })
    }

    /// Load definitions from a JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LineConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LineConfigError::MissingFile(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let defs = Self::from_json_str(&contents)?;
        info!(path = %path.display(), lines = defs.len(), "Loaded line definitions");
        Ok(defs)
    }

    /// Iterate lines in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines are defined.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<Line> for LineDefinitions {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Builder for line definitions.
///
/// Provides a fluent API for declaring lines in code.
#[derive(Debug, Default)]
pub struct LineDefinitionsBuilder {
    inner: LineDefinitions,
}

impl LineDefinitionsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with its stations in physical order.
    pub fn line(mut self, name: &str, stations: &[&str]) -> Self {
        self.inner.push(Line::new(name, stations.iter().copied()));
        self
    }

    /// Build the definitions.
    pub fn build(self) -> LineDefinitions {
        self.inner
    }
}

/// The default network: Mumbai Metro Line 1 and Line 2A.
pub fn mumbai_lines() -> LineDefinitions {
    LineDefinitionsBuilder::new()
        .line(
            "Line 1 (Blue)",
            &[
                "Versova",
                "Azad Nagar",
                "D N Nagar",
                "Andheri",
                "Chakala (Airport Road)",
                "Marol Naka",
                "Saki Naka",
                "Asalpha",
                "Jagruti Nagar",
                "Ghatkopar",
            ],
        )
        .line(
            "Line 2A (Yellow)",
            &["Dahisar East", "Borivali", "Malad", "Andheri West", "D N Nagar"],
        )
        .build()
}
