//! Route planner configuration.

use chrono::Duration;

use super::fare::FareTable;

/// Default average speed, including dwell time at stations.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Average end-to-end speed used for travel time estimates (km/h).
    pub average_speed_kmh: f64,

    /// Distance-based fare table.
    pub fares: FareTable,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(average_speed_kmh: f64, fares: FareTable) -> Self {
        Self {
            average_speed_kmh,
            fares,
        }
    }

    /// Estimated travel time in minutes for a distance.
    pub fn travel_time_mins(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0
    }

    /// Estimated travel time as a Duration, to the nearest second.
    pub fn travel_time(&self, distance_km: f64) -> Duration {
        Duration::seconds((self.travel_time_mins(distance_km) * 60.0).round() as i64)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            fares: FareTable::default(),
        }
    }
}
