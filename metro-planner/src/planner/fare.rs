//! Distance-based fare tiers.

/// One fare bracket: journeys up to `max_km` cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareTier {
    pub max_km: f64,
    pub fare: u32,
}

impl FareTier {
    pub const fn new(max_km: f64, fare: u32) -> Self {
        Self { max_km, fare }
    }
}

/// Mumbai Metro fare slabs, in rupees.
const MUMBAI_TIERS: [FareTier; 7] = [
    FareTier::new(3.0, 10),
    FareTier::new(12.0, 20),
    FareTier::new(18.0, 30),
    FareTier::new(24.0, 40),
    FareTier::new(30.0, 50),
    FareTier::new(36.0, 60),
    FareTier::new(42.0, 70),
];

/// Fare for anything beyond the last slab.
const MUMBAI_MAX_FARE: u32 = 80;

/// An ordered fare table with a flat fare beyond the last tier.
///
/// # Examples
///
/// ```
/// use metro_planner::planner::FareTable;
///
/// let fares = FareTable::default();
/// assert_eq!(fares.fare_for(3.0), 10);
/// assert_eq!(fares.fare_for(3.1), 20);
/// assert_eq!(fares.fare_for(50.0), 80);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FareTable {
    tiers: Vec<FareTier>,
    beyond: u32,
}

impl FareTable {
    /// Create a table. Tiers are sorted by ascending upper bound.
    pub fn new(mut tiers: Vec<FareTier>, beyond: u32) -> Self {
        tiers.sort_by(|a, b| a.max_km.total_cmp(&b.max_km));
        Self { tiers, beyond }
    }

    /// Fare for a journey of `distance_km`. Bounds are inclusive.
    pub fn fare_for(&self, distance_km: f64) -> u32 {
        self.tiers
            .iter()
            .find(|tier| distance_km <= tier.max_km)
            .map_or(self.beyond, |tier| tier.fare)
    }

    /// The tiers in ascending order.
    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }

    /// Fare charged beyond the last tier.
    pub fn beyond(&self) -> u32 {
        self.beyond
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::new(MUMBAI_TIERS.to_vec(), MUMBAI_MAX_FARE)
    }
}

/// Fare under the default table.
pub fn fare_from_distance_km(distance_km: f64) -> u32 {
    FareTable::default().fare_for(distance_km)
}
