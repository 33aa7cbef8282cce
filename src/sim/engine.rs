//! Simulation engine: the coulomb-counting state-update loop.

use crate::cell::{CellParams, OcvCurve};

use super::schedule::CurrentSchedule;
use super::types::{Sample, SimConfig, SimError};

/// Simulation engine owning the cell model, schedule, and mutable state.
///
/// Construction is the fail-fast validation boundary; a constructed engine
/// cannot fail mid-run. State is a single `(soc, time)` pair advanced
/// linearly, with no early termination.
pub struct Engine {
    config: SimConfig,
    params: CellParams,
    ocv: OcvCurve,
    schedule: CurrentSchedule,
    soc_percent: f64,
}

impl Engine {
    /// Creates a new simulation engine.
    ///
    /// `config`, `params`, `ocv`, and `schedule` are already validated by
    /// their own constructors; this checks the initial state of charge.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `initial_soc_percent` is
    /// outside [0, 100] or non-finite.
    pub fn new(
        config: SimConfig,
        params: CellParams,
        ocv: OcvCurve,
        schedule: CurrentSchedule,
        initial_soc_percent: f64,
    ) -> Result<Self, SimError> {
        if !initial_soc_percent.is_finite() || !(0.0..=100.0).contains(&initial_soc_percent) {
            return Err(SimError::invalid(
                "initial_soc_percent",
                "must be in [0, 100]",
            ));
        }
        Ok(Self {
            config,
            params,
            ocv,
            schedule,
            soc_percent: initial_soc_percent,
        })
    }

    /// Executes one simulation step and returns the sample.
    ///
    /// Updates SoC by coulomb counting with asymmetric charge/discharge
    /// efficiency, clamps to [0, 100], and derives the voltages. The
    /// clamped SoC is what feeds the next step, so charge pushed past the
    /// bounds is discarded rather than tracked.
    pub fn step(&mut self, i: usize) -> Sample {
        let t = i as f64 * self.config.dt_hours;
        let current = self.schedule.current_amps_at(t);

        // Charging stores only the efficient fraction; discharging draws
        // more charge than it delivers.
        let delta = if current > 0.0 {
            current * self.config.dt_hours * self.params.coulombic_efficiency
                / self.params.capacity_ah
                * 100.0
        } else {
            current * self.config.dt_hours / self.params.coulombic_efficiency
                / self.params.capacity_ah
                * 100.0
        };

        self.soc_percent = (self.soc_percent + delta).clamp(0.0, 100.0);

        let ocv_volts = self.ocv.voltage_at(self.soc_percent);
        let terminal_volts = ocv_volts - current * self.params.internal_resistance_ohm;

        Sample {
            step: i,
            time_hours: t,
            soc_percent: self.soc_percent,
            ocv_volts,
            terminal_volts,
            current_amps: current,
        }
    }

    /// Executes the whole run and returns the complete ordered trace.
    ///
    /// Produces `total_steps + 1` samples (step index 0 through
    /// `total_steps` inclusive).
    pub fn run(&mut self) -> Vec<Sample> {
        let total = self.config.total_steps();
        let mut trace = Vec::with_capacity(total + 1);
        for i in 0..=total {
            trace.push(self.step(i));
        }
        trace
    }

    /// Returns a reference to the timing configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns a reference to the cell parameters.
    pub fn params(&self) -> &CellParams {
        &self.params
    }
}
