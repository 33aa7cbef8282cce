//! Shared test fixtures for integration tests.

use cell_sim::cell::{CellParams, OcvCurve};
use cell_sim::sim::engine::Engine;
use cell_sim::sim::schedule::{CurrentSchedule, SchedulePoint};
use cell_sim::sim::types::SimConfig;

/// Default timing configuration (10 h, 60 s steps — 601 samples).
pub fn default_config() -> SimConfig {
    SimConfig::new(10.0, 60.0).expect("valid config")
}

/// Default cell (100 Ah, 99% coulombic efficiency, 5 mΩ).
pub fn default_params() -> CellParams {
    CellParams::new(100.0, 0.99, 0.005).expect("valid params")
}

/// Default OCV curve (3.0 V at 0%, 4.2 V at 100%).
pub fn default_curve() -> OcvCurve {
    OcvCurve::new(3.0, 4.2).expect("valid curve")
}

/// The demo profile: discharge at 10 A from t=0, charge at 5 A from t=5.
pub fn default_schedule() -> CurrentSchedule {
    schedule(&[(0.0, -10.0), (5.0, 5.0)])
}

/// Builds a schedule from `(at_hours, current_amps)` pairs.
pub fn schedule(points: &[(f64, f64)]) -> CurrentSchedule {
    CurrentSchedule::new(
        points
            .iter()
            .map(|&(at_hours, current_amps)| SchedulePoint {
                at_hours,
                current_amps,
            })
            .collect(),
    )
    .expect("valid schedule")
}

/// Default engine: demo profile from 80% SoC.
pub fn default_engine() -> Engine {
    Engine::new(
        default_config(),
        default_params(),
        default_curve(),
        default_schedule(),
        80.0,
    )
    .expect("valid engine")
}
