//! Core types and constants for the intersection simulation

/// Number of lanes at a standard four-way intersection
pub const LANES: usize = 4;

/// Minimum green time every lane receives, in seconds
pub const BASE_GREEN: u64 = 5;

/// Upper bound on a single green phase, in seconds
pub const MAX_GREEN: u64 = 40;

/// Extra green time granted per queued vehicle, in seconds
pub const GREEN_PER_VEHICLE: u64 = 2;

/// Vehicles that can clear the stop line per second of green
pub const VEHICLE_PASS_PER_SEC: u64 = 1;

/// Longest intersection name kept for reporting, in characters
pub const NAME_MAX_LEN: usize = 49;

/// Index of a lane within an intersection's rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneIndex(pub usize);

/// Normalize an externally supplied vehicle count.
/// Negative counts are treated as zero rather than rejected.
pub fn clamp_count(count: i64) -> u64 {
    count.max(0) as u64
}
