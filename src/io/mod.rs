//! Trace output backends.

/// CSV export for simulation traces.
pub mod export;
