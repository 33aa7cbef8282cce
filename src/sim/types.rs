//! Core simulation types: timing configuration, trace samples, and errors.

use std::fmt;

use thiserror::Error;

/// Error raised synchronously before a simulation starts.
///
/// All validation happens at construction time; once an [`Engine`] exists
/// the run itself is pure arithmetic and cannot fail.
///
/// [`Engine`]: crate::sim::engine::Engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A parameter was out of range or otherwise unusable.
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human-readable constraint description.
        message: String,
    },
}

impl SimError {
    /// Shorthand constructor for an [`SimError::InvalidParameter`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}

/// Timing configuration for a simulation run.
///
/// The engine references this struct for all timing parameters, so
/// `dt_hours` is derived exactly once.
///
/// # Examples
///
/// ```
/// use cell_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(10.0, 60.0).unwrap();
/// assert_eq!(cfg.total_steps(), 600);
/// assert_eq!(cfg.sample_count(), 601);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Total simulated duration in hours (> 0).
    pub duration_hours: f64,
    /// Duration of one timestep in seconds (> 0).
    pub step_seconds: f64,
    /// Duration of one timestep in hours, derived as `step_seconds / 3600`.
    pub dt_hours: f64,
}

impl SimConfig {
    /// Creates a new timing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if the duration or step size
    /// is not strictly positive and finite.
    pub fn new(duration_hours: f64, step_seconds: f64) -> Result<Self, SimError> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(SimError::invalid("duration_hours", "must be > 0"));
        }
        if !step_seconds.is_finite() || step_seconds <= 0.0 {
            return Err(SimError::invalid("step_seconds", "must be > 0"));
        }
        Ok(Self {
            duration_hours,
            step_seconds,
            dt_hours: step_seconds / 3600.0,
        })
    }

    /// Number of state updates: `floor(duration_hours * 3600 / step_seconds)`.
    pub fn total_steps(&self) -> usize {
        (self.duration_hours * 3600.0 / self.step_seconds).floor() as usize
    }

    /// Number of trace samples produced, one more than [`Self::total_steps`]
    /// since step index 0 is included.
    pub fn sample_count(&self) -> usize {
        self.total_steps() + 1
    }
}

/// One record of the simulation trace.
///
/// Produced once per step and immutable afterward; the presentation layer
/// (summary printing, CSV export, TUI charts) consumes the sample sequence
/// in this exact shape.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Step index.
    pub step: usize,
    /// Simulation time in hours.
    pub time_hours: f64,
    /// State of charge after this step's update (percent, in [0, 100]).
    pub soc_percent: f64,
    /// Open-circuit voltage at this step's SoC (volts).
    pub ocv_volts: f64,
    /// Terminal voltage: OCV minus the internal-resistance drop (volts).
    pub terminal_volts: f64,
    /// Applied current (amps; positive=charging, negative=discharging).
    pub current_amps: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "i={:>5} ({:>6.2}h) | I={:>8.2} A | SoC={:>6.2} % | OCV={:.3} V | Vterm={:.3} V",
            self.step,
            self.time_hours,
            self.current_amps,
            self.soc_percent,
            self.ocv_volts,
            self.terminal_volts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_config_basic() {
        let cfg = SimConfig::new(10.0, 60.0).expect("valid config");
        assert_eq!(cfg.duration_hours, 10.0);
        assert_eq!(cfg.step_seconds, 60.0);
        assert!((cfg.dt_hours - 1.0 / 60.0).abs() < 1e-15);
        assert_eq!(cfg.total_steps(), 600);
        assert_eq!(cfg.sample_count(), 601);
    }

    #[test]
    fn sim_config_partial_trailing_step_is_floored() {
        // 1 hour at 7-minute steps: 3600/420 = 8.57... -> 8 updates
        let cfg = SimConfig::new(1.0, 420.0).expect("valid config");
        assert_eq!(cfg.total_steps(), 8);
        assert_eq!(cfg.sample_count(), 9);
    }

    #[test]
    fn sim_config_zero_duration_rejected() {
        assert!(SimConfig::new(0.0, 60.0).is_err());
        assert!(SimConfig::new(-1.0, 60.0).is_err());
    }

    #[test]
    fn sim_config_zero_step_rejected() {
        assert!(SimConfig::new(10.0, 0.0).is_err());
        assert!(SimConfig::new(10.0, -60.0).is_err());
    }

    #[test]
    fn sim_error_display_names_field() {
        let err = SimError::invalid("duration_hours", "must be > 0");
        let s = format!("{err}");
        assert!(s.contains("duration_hours"));
        assert!(s.contains("must be > 0"));
    }

    #[test]
    fn sample_display_does_not_panic() {
        let s = Sample {
            step: 0,
            time_hours: 0.0,
            soc_percent: 79.83,
            ocv_volts: 3.958,
            terminal_volts: 4.008,
            current_amps: -10.0,
        };
        let out = format!("{s}");
        assert!(!out.is_empty());
    }
}
