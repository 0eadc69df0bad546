//! Signal timing policy
//!
//! Green time grows linearly with the queue and is capped so that a single
//! busy approach cannot starve the others for a whole cycle.

use super::types::{BASE_GREEN, GREEN_PER_VEHICLE, MAX_GREEN};

/// Green duration in seconds for a lane with `vehicles_waiting` queued
pub fn green_time(vehicles_waiting: u64) -> u64 {
    vehicles_waiting
        .saturating_mul(GREEN_PER_VEHICLE)
        .saturating_add(BASE_GREEN)
        .min(MAX_GREEN)
}
