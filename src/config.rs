//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cell::{CellParams, OcvCurve};
use crate::sim::engine::Engine;
use crate::sim::schedule::{CurrentSchedule, SchedulePoint};
use crate::sim::types::{SimConfig, SimError};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Cell parameters and OCV bounds.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Simulation timing.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Applied-current schedule points.
    #[serde(default = "default_schedule")]
    pub schedule: Vec<SchedulePoint>,
}

/// Cell parameters and OCV bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Nominal capacity (Ah, > 0).
    pub capacity_ah: f64,
    /// Coulombic efficiency (fraction in (0, 1]).
    pub coulombic_efficiency: f64,
    /// Internal resistance (ohms, >= 0).
    pub internal_resistance_ohm: f64,
    /// Open-circuit voltage at 0% SoC (volts).
    pub ocv_min_v: f64,
    /// Open-circuit voltage at 100% SoC (volts, > `ocv_min_v`).
    pub ocv_max_v: f64,
    /// Starting state of charge (percent, in [0, 100]).
    pub initial_soc_percent: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_ah: 100.0,
            coulombic_efficiency: 0.99,
            internal_resistance_ohm: 0.005,
            ocv_min_v: 3.0,
            ocv_max_v: 4.2,
            initial_soc_percent: 80.0,
        }
    }
}

/// Simulation timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Total simulated duration (hours, > 0).
    pub duration_hours: f64,
    /// Timestep (seconds, > 0).
    pub step_seconds: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_hours: 10.0,
            step_seconds: 60.0,
        }
    }
}

/// The baseline demo profile: discharge at 10 A for 5 h, then charge at 5 A.
fn default_schedule() -> Vec<SchedulePoint> {
    vec![
        SchedulePoint {
            at_hours: 0.0,
            current_amps: -10.0,
        },
        SchedulePoint {
            at_hours: 5.0,
            current_amps: 5.0,
        },
    ]
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"battery.capacity_ah"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario (the original demo parameters).
    pub fn baseline() -> Self {
        Self {
            battery: BatteryConfig::default(),
            simulation: SimulationConfig::default(),
            schedule: default_schedule(),
        }
    }

    /// Returns the deep-discharge preset: a small cell pulled hard enough
    /// to hit the 0% clamp.
    pub fn deep_discharge() -> Self {
        Self {
            battery: BatteryConfig {
                capacity_ah: 30.0,
                coulombic_efficiency: 0.97,
                internal_resistance_ohm: 0.008,
                initial_soc_percent: 60.0,
                ..BatteryConfig::default()
            },
            simulation: SimulationConfig {
                duration_hours: 2.0,
                step_seconds: 30.0,
            },
            schedule: vec![SchedulePoint {
                at_hours: 0.0,
                current_amps: -25.0,
            }],
        }
    }

    /// Returns the fast-charge preset: a bulk charge that saturates at
    /// 100% followed by a trickle.
    pub fn fast_charge() -> Self {
        Self {
            battery: BatteryConfig {
                capacity_ah: 50.0,
                internal_resistance_ohm: 0.004,
                initial_soc_percent: 20.0,
                ..BatteryConfig::default()
            },
            simulation: SimulationConfig {
                duration_hours: 4.0,
                step_seconds: 30.0,
            },
            schedule: vec![
                SchedulePoint {
                    at_hours: 0.0,
                    current_amps: 40.0,
                },
                SchedulePoint {
                    at_hours: 1.5,
                    current_amps: 10.0,
                },
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "deep_discharge", "fast_charge"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "deep_discharge" => Ok(Self::deep_discharge()),
            "fast_charge" => Ok(Self::fast_charge()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let b = &self.battery;

        if !b.capacity_ah.is_finite() || b.capacity_ah <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_ah".into(),
                message: "must be > 0".into(),
            });
        }
        if !b.coulombic_efficiency.is_finite()
            || b.coulombic_efficiency <= 0.0
            || b.coulombic_efficiency > 1.0
        {
            errors.push(ConfigError {
                field: "battery.coulombic_efficiency".into(),
                message: "must be in (0, 1]".into(),
            });
        }
        if !b.internal_resistance_ohm.is_finite() || b.internal_resistance_ohm < 0.0 {
            errors.push(ConfigError {
                field: "battery.internal_resistance_ohm".into(),
                message: "must be >= 0".into(),
            });
        }
        if !b.ocv_min_v.is_finite() || !b.ocv_max_v.is_finite() || b.ocv_min_v >= b.ocv_max_v {
            errors.push(ConfigError {
                field: "battery.ocv_min_v".into(),
                message: "must be < battery.ocv_max_v".into(),
            });
        }
        if !b.initial_soc_percent.is_finite() || !(0.0..=100.0).contains(&b.initial_soc_percent) {
            errors.push(ConfigError {
                field: "battery.initial_soc_percent".into(),
                message: "must be in [0, 100]".into(),
            });
        }

        let s = &self.simulation;
        if !s.duration_hours.is_finite() || s.duration_hours <= 0.0 {
            errors.push(ConfigError {
                field: "simulation.duration_hours".into(),
                message: "must be > 0".into(),
            });
        }
        if !s.step_seconds.is_finite() || s.step_seconds <= 0.0 {
            errors.push(ConfigError {
                field: "simulation.step_seconds".into(),
                message: "must be > 0".into(),
            });
        }

        if self.schedule.is_empty() {
            errors.push(ConfigError {
                field: "schedule".into(),
                message: "must contain at least one point".into(),
            });
        }
        for (i, p) in self.schedule.iter().enumerate() {
            if !p.at_hours.is_finite() || p.at_hours < 0.0 {
                errors.push(ConfigError {
                    field: format!("schedule[{i}].at_hours"),
                    message: "must be >= 0".into(),
                });
            }
            if !p.current_amps.is_finite() {
                errors.push(ConfigError {
                    field: format!("schedule[{i}].current_amps"),
                    message: "must be finite".into(),
                });
            }
            if self.schedule[..i].iter().any(|q| q.at_hours == p.at_hours) {
                errors.push(ConfigError {
                    field: format!("schedule[{i}].at_hours"),
                    message: format!("duplicate time offset {}", p.at_hours),
                });
            }
        }

        errors
    }

    /// Builds a ready-to-run [`Engine`] from this scenario.
    ///
    /// This is the fail-fast boundary: every typed constructor re-checks
    /// its own preconditions, so no partial trace can be produced from a
    /// bad configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for the first violated
    /// constraint.
    pub fn build(&self) -> Result<Engine, SimError> {
        let b = &self.battery;
        let params = CellParams::new(
            b.capacity_ah,
            b.coulombic_efficiency,
            b.internal_resistance_ohm,
        )?;
        let ocv = OcvCurve::new(b.ocv_min_v, b.ocv_max_v)?;
        let schedule = CurrentSchedule::new(self.schedule.clone())?;
        let sim_config = SimConfig::new(self.simulation.duration_hours, self.simulation.step_seconds)?;
        Engine::new(sim_config, params, ocv, schedule, b.initial_soc_percent)
    }
}
