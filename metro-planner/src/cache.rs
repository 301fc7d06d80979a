//! Caching layer for route plans.
//!
//! Plans depend only on the resolved origin station and the destination,
//! so the cache is keyed by that pair rather than by raw coordinates. The
//! distance from the query point to the origin is filled in per query.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Coordinates, RouteError};
use crate::planner::{RoutePlan, RoutePlanner};

/// Cache key: (origin station, destination station).
type RouteKey = (String, String);

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Route planner with caching.
///
/// Wraps a `RoutePlanner` and caches successful plans. Failures are not
/// cached.
pub struct CachedPlanner {
    planner: Arc<RoutePlanner>,
    routes: MokaCache<RouteKey, Arc<RoutePlan>>,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(planner: RoutePlanner, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            planner: Arc::new(planner),
            routes,
        }
    }

    /// The underlying planner.
    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    /// Plan from a point to a named destination, using the cache if possible.
    pub async fn plan(&self, origin: Coordinates, destination: &str) -> Result<RoutePlan, RouteError> {
        let nearest = self.planner.nearest_station(origin)?;
        let plan = self.plan_between(&nearest.name, destination).await?;

        let mut plan = (*plan).clone();
        plan.origin_distance_km = nearest.distance_km;
        Ok(plan)
    }

    /// Plan between two named stations, using the cache if possible.
    pub async fn plan_between(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Arc<RoutePlan>, RouteError> {
        let key = (origin.to_string(), destination.to_string());

        if let Some(cached) = self.routes.get(&key).await {
            trace!(from = origin, to = destination, "Route cache hit");
            return Ok(cached);
        }

        let plan = Arc::new(self.planner.plan_between(origin, destination)?);
        self.routes.insert(key, plan.clone()).await;

        Ok(plan)
    }

    /// Approximate number of cached routes.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached routes.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
