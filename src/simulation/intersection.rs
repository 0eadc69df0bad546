//! Intersection logic for the signal simulation
//!
//! The intersection owns its lanes and gives each one a single green phase
//! per cycle, in rotation order.

use anyhow::Result;
use log::{debug, trace, warn};

use super::lane::SimLane;
use super::snapshot::{IntersectionSnapshot, LaneSnapshot};
use super::timing::green_time;
use super::types::{clamp_count, LaneIndex, BASE_GREEN, LANES, NAME_MAX_LEN, VEHICLE_PASS_PER_SEC};

/// A signalised intersection in the simulation
#[derive(Debug, Clone)]
pub struct SimIntersection {
    name: String,
    lanes: Vec<SimLane>,
    cycles_completed: u64,
}

impl SimIntersection {
    /// Create an intersection with the standard number of lanes
    pub fn new(name: &str) -> Self {
        Self::from_lane_count(name, LANES)
    }

    /// Create an intersection with a custom number of lanes
    pub fn with_lanes(name: &str, lane_count: usize) -> Result<Self> {
        if lane_count == 0 {
            anyhow::bail!("An intersection needs at least one lane");
        }
        Ok(Self::from_lane_count(name, lane_count))
    }

    fn from_lane_count(name: &str, lane_count: usize) -> Self {
        Self {
            name: bounded_name(name),
            lanes: (0..lane_count).map(|_| SimLane::new(0)).collect(),
            cycles_completed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn lanes(&self) -> &[SimLane] {
        &self.lanes
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Set the starting queue of one lane before the simulation begins.
    /// Negative counts are clamped to zero.
    pub fn set_initial_queue(&mut self, lane: LaneIndex, count: i64) -> Result<()> {
        let lane_count = self.lanes.len();
        let target = self.lanes.get_mut(lane.0).ok_or_else(|| {
            anyhow::anyhow!("Lane {} out of range (intersection has {} lanes)", lane.0, lane_count)
        })?;
        if count < 0 {
            debug!("Clamping negative initial queue {} on lane {} to 0", count, lane.0);
        }
        target.vehicles_waiting = clamp_count(count);
        Ok(())
    }

    /// Add newly arrived vehicles to every lane.
    ///
    /// `arrivals` must hold exactly one entry per lane; negative entries are
    /// clamped to zero. On a length mismatch no lane is modified.
    pub fn inject_arrivals(&mut self, arrivals: &[i64]) -> Result<()> {
        if arrivals.len() != self.lanes.len() {
            anyhow::bail!(
                "Expected arrivals for {} lanes, got {}",
                self.lanes.len(),
                arrivals.len()
            );
        }

        for (lane, &count) in self.lanes.iter_mut().zip(arrivals) {
            lane.vehicles_waiting = lane.vehicles_waiting.saturating_add(clamp_count(count));
        }
        Ok(())
    }

    /// Run one full rotation, giving every lane exactly one green phase
    pub fn advance_cycle(&mut self) {
        for green_idx in 0..self.lanes.len() {
            let green = green_time(self.lanes[green_idx].vehicles_waiting).max(BASE_GREEN);
            trace!(
                "{}: lane {} green for {}s ({} waiting)",
                self.name,
                green_idx,
                green,
                self.lanes[green_idx].vehicles_waiting
            );

            for _ in 0..green {
                self.tick(green_idx);
            }
        }

        self.cycles_completed += 1;
        debug!("{}: cycle {} complete", self.name, self.cycles_completed);
    }

    /// One simulated second with `green_idx` holding the green
    fn tick(&mut self, green_idx: usize) {
        for (idx, lane) in self.lanes.iter_mut().enumerate() {
            if idx == green_idx {
                let departed = lane.vehicles_waiting.min(VEHICLE_PASS_PER_SEC);
                lane.vehicles_waiting -= departed;
                lane.vehicles_served = lane.vehicles_served.saturating_add(departed);
            } else if lane.vehicles_waiting > 0 {
                lane.total_wait_seconds = lane.total_wait_seconds.saturating_add(lane.vehicles_waiting);
            }
        }
    }

    /// Read-only view of the counters for reporting
    pub fn snapshot(&self) -> IntersectionSnapshot {
        IntersectionSnapshot {
            lanes: self
                .lanes
                .iter()
                .map(|lane| LaneSnapshot {
                    waiting: lane.vehicles_waiting,
                    served: lane.vehicles_served,
                    total_wait_seconds: lane.total_wait_seconds,
                })
                .collect(),
            cycles_completed: self.cycles_completed,
        }
    }
}

fn bounded_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_LEN {
        warn!("Intersection name truncated to {} characters", NAME_MAX_LEN);
        name.chars().take(NAME_MAX_LEN).collect()
    } else {
        name.to_string()
    }
}
