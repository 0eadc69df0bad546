//! Per-lane queue and delay counters

/// One approach to the intersection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimLane {
    /// Vehicles currently queued at the stop line
    pub vehicles_waiting: u64,
    /// Vehicle-seconds of delay accrued while this lane was red
    pub total_wait_seconds: u64,
    /// Vehicles that have cleared the intersection from this lane
    pub vehicles_served: u64,
}

impl SimLane {
    pub fn new(vehicles_waiting: u64) -> Self {
        Self {
            vehicles_waiting,
            ..Self::default()
        }
    }
}
