//! Status lines and the append-only text report

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::info;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::simulation::IntersectionSnapshot;

/// Default file the report block is appended to
pub const DEFAULT_LOG_FILE: &str = "traffic_report.txt";

/// Calendar format used to stamp report blocks, e.g. `Tue Nov 14 22:13:20 2023`
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// One-line status after a cycle, e.g.
/// `Cycle 3 | L1 w=2 s=7 d=41 | L2 ...`
pub fn status_line(cycle: u64, snapshot: &IntersectionSnapshot) -> String {
    let mut line = format!("Cycle {}", cycle);
    for (idx, lane) in snapshot.lanes.iter().enumerate() {
        line.push_str(&format!(
            " | L{} w={} s={} d={}",
            idx + 1,
            lane.waiting,
            lane.served,
            lane.total_wait_seconds
        ));
    }
    line
}

/// Render the end-of-run report block
pub fn render_report<Tz>(
    name: &str,
    timestamp: &DateTime<Tz>,
    snapshot: &IntersectionSnapshot,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("=== Intersection Report ===\n");
    out.push_str(&format!("Intersection: {}\n", name));
    out.push_str(&format!("Timestamp: {}\n", timestamp.format(TIMESTAMP_FORMAT)));
    out.push_str(&format!("Cycles: {}\n", snapshot.cycles_completed));
    for (idx, lane) in snapshot.lanes.iter().enumerate() {
        out.push_str(&format!(
            "  Lane {}: waiting={}, served={}, wait={}\n",
            idx + 1,
            lane.waiting,
            lane.served,
            lane.total_wait_seconds
        ));
    }
    out.push_str(&format!("Total vehicles served: {}\n", snapshot.total_served()));
    out.push_str(&format!("Total wait (vehicle-seconds): {}\n", snapshot.total_wait()));
    out.push_str(&format!(
        "Average wait per vehicle: {:.2}s\n",
        snapshot.average_wait_per_vehicle()
    ));
    out
}

/// Append a rendered block to the log file, creating it if needed
pub fn append_report(path: &Path, block: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open report log {}", path.display()))?;
    writeln!(file, "{}", block)
        .with_context(|| format!("Failed to write report log {}", path.display()))?;
    info!("Report appended to {}", path.display());
    Ok(())
}
