//! Intersection Signal Simulation Library
//!
//! Simulates a single signalised intersection whose green phases are sized
//! from the queue on each lane, and reports the delay it accumulates.

pub mod arrivals;
pub mod input;
pub mod report;
pub mod simulation;
