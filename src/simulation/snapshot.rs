//! Read-only statistics captured from an intersection

/// Counters of a single lane at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneSnapshot {
    pub waiting: u64,
    pub served: u64,
    pub total_wait_seconds: u64,
}

/// Counters of the whole intersection at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntersectionSnapshot {
    pub lanes: Vec<LaneSnapshot>,
    pub cycles_completed: u64,
}

impl IntersectionSnapshot {
    /// Vehicles that have cleared the intersection across all lanes
    pub fn total_served(&self) -> u64 {
        self.sum_lanes(|lane| lane.served)
    }

    /// Vehicles still queued across all lanes
    pub fn total_waiting(&self) -> u64 {
        self.sum_lanes(|lane| lane.waiting)
    }

    /// Vehicle-seconds of delay across all lanes
    pub fn total_wait(&self) -> u64 {
        self.sum_lanes(|lane| lane.total_wait_seconds)
    }

    /// Counters are capped at `u64::MAX` rather than wrapping
    fn sum_lanes(&self, field: impl Fn(&LaneSnapshot) -> u64) -> u64 {
        self.lanes
            .iter()
            .fold(0u64, |total, lane| total.saturating_add(field(lane)))
    }

    /// Average delay per served vehicle, or 0.0 if nothing has been served
    pub fn average_wait_per_vehicle(&self) -> f64 {
        let served = self.total_served();
        if served > 0 {
            self.total_wait() as f64 / served as f64
        } else {
            0.0
        }
    }
}
