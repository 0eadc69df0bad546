//! Standalone intersection simulation module
//!
//! This module contains the signal timing policy and the cycle engine. It has
//! no I/O of its own: arrivals are supplied by the caller and statistics are
//! read back through snapshots.

mod intersection;
mod lane;
mod runner;
mod snapshot;
mod timing;
mod types;

pub use intersection::SimIntersection;
pub use lane::SimLane;
pub use runner::run_cycles;
pub use snapshot::{IntersectionSnapshot, LaneSnapshot};
pub use timing::green_time;
pub use types::{
    clamp_count, LaneIndex, BASE_GREEN, GREEN_PER_VEHICLE, LANES, MAX_GREEN, NAME_MAX_LEN,
    VEHICLE_PASS_PER_SEC,
};
