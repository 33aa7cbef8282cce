//! Discrete-time charge/discharge simulator for a single battery cell.

/// Cell parameter and open-circuit-voltage models.
pub mod cell;
pub mod config;
pub mod io;
/// Simulation engine, current schedule, trace, and summary modules.
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
