//! Cycle loop driving an intersection
//!
//! Alternates full signal cycles with arrival injection, the way the headless
//! driver runs a simulation.

use anyhow::{Context, Result};
use log::{debug, info};

use super::intersection::SimIntersection;
use super::snapshot::IntersectionSnapshot;
use crate::arrivals::ArrivalSource;

/// Run `cycles` signal cycles, injecting arrivals after each one.
///
/// `on_cycle` receives the 1-based cycle number, the snapshot taken after the
/// arrivals were added, and the arrivals that were drawn.
/// Returns the final snapshot.
pub fn run_cycles<A, F>(
    intersection: &mut SimIntersection,
    cycles: u64,
    arrivals: &mut A,
    mut on_cycle: F,
) -> Result<IntersectionSnapshot>
where
    A: ArrivalSource + ?Sized,
    F: FnMut(u64, &IntersectionSnapshot, &[i64]),
{
    info!(
        "Running {} cycles at {} ({} lanes)",
        cycles,
        intersection.name(),
        intersection.lane_count()
    );

    for cycle in 1..=cycles {
        intersection.advance_cycle();

        let drawn = arrivals.next_arrivals(intersection.lane_count());
        debug!("Cycle {}: arrivals {:?}", cycle, drawn);
        intersection
            .inject_arrivals(&drawn)
            .with_context(|| format!("Failed to inject arrivals after cycle {}", cycle))?;

        on_cycle(cycle, &intersection.snapshot(), &drawn);
    }

    let snapshot = intersection.snapshot();
    info!(
        "Simulation finished: served={}, total_wait={}, avg_wait={:.2}",
        snapshot.total_served(),
        snapshot.total_wait(),
        snapshot.average_wait_per_vehicle()
    );
    Ok(snapshot)
}
