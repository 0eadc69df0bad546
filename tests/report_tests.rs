//! Reporting and terminal input tests

use chrono::{TimeZone, Utc};
use std::fs;
use std::io::Cursor;

use intersection_sim::input::{read_cycle_count, read_initial_queues, validate_cycle_count};
use intersection_sim::report::{append_report, render_report, status_line};
use intersection_sim::simulation::{IntersectionSnapshot, LaneSnapshot};

fn sample_snapshot() -> IntersectionSnapshot {
    IntersectionSnapshot {
        lanes: vec![
            LaneSnapshot { waiting: 1, served: 6, total_wait_seconds: 30 },
            LaneSnapshot { waiting: 0, served: 2, total_wait_seconds: 12 },
        ],
        cycles_completed: 3,
    }
}

#[test]
fn test_aggregates() {
    let snapshot = sample_snapshot();
    assert_eq!(snapshot.total_served(), 8);
    assert_eq!(snapshot.total_waiting(), 1);
    assert_eq!(snapshot.total_wait(), 42);
    assert!((snapshot.average_wait_per_vehicle() - 5.25).abs() < 1e-9);
}

#[test]
fn test_average_wait_without_service_is_zero() {
    let snapshot = IntersectionSnapshot {
        lanes: vec![LaneSnapshot { waiting: 4, served: 0, total_wait_seconds: 20 }],
        cycles_completed: 1,
    };
    assert_eq!(snapshot.average_wait_per_vehicle(), 0.0);
}

#[test]
fn test_totals_saturate_instead_of_wrapping() {
    let snapshot = IntersectionSnapshot {
        lanes: vec![
            LaneSnapshot { waiting: u64::MAX, served: u64::MAX, total_wait_seconds: u64::MAX },
            LaneSnapshot { waiting: 5, served: 5, total_wait_seconds: 5 },
        ],
        cycles_completed: 1,
    };
    assert_eq!(snapshot.total_waiting(), u64::MAX);
    assert_eq!(snapshot.total_served(), u64::MAX);
    assert_eq!(snapshot.total_wait(), u64::MAX);
}

#[test]
fn test_status_line_lists_lanes() {
    let line = status_line(3, &sample_snapshot());
    assert_eq!(line, "Cycle 3 | L1 w=1 s=6 d=30 | L2 w=0 s=2 d=12");
}

#[test]
fn test_render_report_contents() {
    let timestamp = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let block = render_report("Elm & Oak", &timestamp, &sample_snapshot());
    assert!(block.starts_with("=== Intersection Report ==="));
    assert!(block.contains("Intersection: Elm & Oak"));
    assert!(block.contains("Timestamp: Tue Nov 14 22:13:20 2023"));
    assert!(block.contains("Cycles: 3"));
    assert!(block.contains("Lane 1: waiting=1, served=6, wait=30"));
    assert!(block.contains("Total vehicles served: 8"));
    assert!(block.contains("Total wait (vehicle-seconds): 42"));
    assert!(block.contains("Average wait per vehicle: 5.25s"));
}

#[test]
fn test_append_report_never_truncates() {
    let path = std::env::temp_dir().join(format!(
        "intersection_sim_report_{}.txt",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    append_report(&path, "first block").unwrap();
    append_report(&path, "second block").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let first = contents.find("first block").expect("first block missing");
    let second = contents.find("second block").expect("second block missing");
    assert!(first < second);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_read_initial_queues() {
    let mut reader = Cursor::new("4\n-2\n 7 \n0\n");
    let mut prompts = Vec::new();
    let queues = read_initial_queues(&mut reader, &mut prompts, 4).unwrap();
    assert_eq!(queues, vec![4, -2, 7, 0]);

    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("lane 1"));
    assert!(prompts.contains("lane 4"));
}

#[test]
fn test_non_numeric_queue_is_fatal() {
    let mut reader = Cursor::new("3\nmany\n");
    let mut prompts = Vec::new();
    assert!(read_initial_queues(&mut reader, &mut prompts, 4).is_err());
}

#[test]
fn test_missing_input_is_fatal() {
    let mut reader = Cursor::new("3\n");
    let mut prompts = Vec::new();
    assert!(read_initial_queues(&mut reader, &mut prompts, 2).is_err());
}

#[test]
fn test_read_cycle_count() {
    let mut prompts = Vec::new();
    assert_eq!(read_cycle_count(&mut Cursor::new("12\n"), &mut prompts).unwrap(), 12);
    assert!(read_cycle_count(&mut Cursor::new("0\n"), &mut prompts).is_err());
    assert!(read_cycle_count(&mut Cursor::new("-3\n"), &mut prompts).is_err());
    assert!(read_cycle_count(&mut Cursor::new("ten\n"), &mut prompts).is_err());
}

#[test]
fn test_validate_cycle_count() {
    assert_eq!(validate_cycle_count(1).unwrap(), 1);
    assert!(validate_cycle_count(0).is_err());
}
