pub mod engine;
/// Piecewise-constant current schedule.
pub mod schedule;
pub mod summary;
pub mod types;
