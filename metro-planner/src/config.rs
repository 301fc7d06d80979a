//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::{DEFAULT_AVERAGE_SPEED_KMH, FareTable, PlannerConfig};
use crate::stations::StationSource;

/// Default station data location.
pub const DEFAULT_STATIONS: &str = "data/stations.json";

/// Default directory for the last-route file.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Default HTTP bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where station data is loaded from (`METRO_STATIONS`)
    pub stations: StationSource,

    /// Line definitions file (`METRO_LINES`); built-in network if unset
    pub lines: Option<PathBuf>,

    /// Directory for `last_route.json` (`METRO_OUTPUT_DIR`)
    pub output_dir: PathBuf,

    /// HTTP bind address (`METRO_ADDR`)
    pub addr: SocketAddr,

    /// Route planning parameters (`METRO_AVERAGE_SPEED_KMH`)
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let stations = StationSource::parse(
            get("METRO_STATIONS")
                .as_deref()
                .unwrap_or(DEFAULT_STATIONS),
        );

        let lines = get("METRO_LINES").map(PathBuf::from);

        let output_dir = get("METRO_OUTPUT_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        let addr = match get("METRO_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "METRO_ADDR",
                value,
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let average_speed_kmh = match get("METRO_AVERAGE_SPEED_KMH") {
            Some(value) => match value.trim().parse::<f64>() {
                Ok(speed) if speed.is_finite() && speed > 0.0 => speed,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "METRO_AVERAGE_SPEED_KMH",
                        value,
                    });
                }
            },
            None => DEFAULT_AVERAGE_SPEED_KMH,
        };

        Ok(Self {
            stations,
            lines,
            output_dir,
            addr,
            planner: PlannerConfig::new(average_speed_kmh, FareTable::default()),
        })
    }
}
