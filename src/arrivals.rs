//! Vehicle arrival generation
//!
//! The simulation engine never decides how many vehicles arrive; it asks an
//! `ArrivalSource` between cycles.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Default upper bound (inclusive) on arrivals per lane per cycle
pub const DEFAULT_MAX_ARRIVALS: u32 = 3;

/// Supplies the vehicles that join each lane between cycles
pub trait ArrivalSource {
    /// Arrivals for the next cycle, one entry per lane
    fn next_arrivals(&mut self, lane_count: usize) -> Vec<i64>;
}

/// Draws each lane's arrivals uniformly from `0..=max_per_lane`
pub struct UniformArrivals {
    max_per_lane: u32,
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl Default for UniformArrivals {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformArrivals {
    pub fn new() -> Self {
        Self {
            max_per_lane: DEFAULT_MAX_ARRIVALS,
            rng: None,
        }
    }

    /// Create a source with a seeded RNG for reproducible simulations
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            max_per_lane: DEFAULT_MAX_ARRIVALS,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_max_per_lane(mut self, max_per_lane: u32) -> Self {
        self.max_per_lane = max_per_lane;
        self
    }

    pub fn max_per_lane(&self) -> u32 {
        self.max_per_lane
    }

    fn draw(&mut self) -> i64 {
        let range = 0..=self.max_per_lane;
        let value = match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        };
        i64::from(value)
    }
}

impl ArrivalSource for UniformArrivals {
    fn next_arrivals(&mut self, lane_count: usize) -> Vec<i64> {
        (0..lane_count).map(|_| self.draw()).collect()
    }
}

/// No vehicles ever arrive; the initial queues simply drain
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArrivals;

impl ArrivalSource for NoArrivals {
    fn next_arrivals(&mut self, lane_count: usize) -> Vec<i64> {
        vec![0; lane_count]
    }
}

/// Replays the same arrivals every cycle
#[derive(Debug, Clone, Default)]
pub struct FixedArrivals {
    per_lane: Vec<i64>,
}

impl FixedArrivals {
    pub fn new(per_lane: Vec<i64>) -> Self {
        Self { per_lane }
    }
}

impl ArrivalSource for FixedArrivals {
    fn next_arrivals(&mut self, _lane_count: usize) -> Vec<i64> {
        self.per_lane.clone()
    }
}
