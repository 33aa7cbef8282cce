use crate::sim::types::SimError;

/// Linear open-circuit-voltage curve over state of charge.
///
/// `OcvCurve` maps SoC (percent) to the voltage the cell exhibits with no
/// current flowing, interpolating linearly between the voltage at 0% and
/// the voltage at 100%. Real OCV curves are S-shaped; the linear
/// approximation is the modeling choice here.
#[derive(Debug, Clone, Copy)]
pub struct OcvCurve {
    /// Open-circuit voltage at 0% SoC (volts).
    pub min_v: f64,

    /// Open-circuit voltage at 100% SoC (volts).
    pub max_v: f64,
}

impl OcvCurve {
    /// Creates a validated OCV curve.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if the bounds are non-finite
    /// or `min_v >= max_v`.
    pub fn new(min_v: f64, max_v: f64) -> Result<Self, SimError> {
        if !min_v.is_finite() || !max_v.is_finite() {
            return Err(SimError::invalid("ocv_min_v", "bounds must be finite"));
        }
        if min_v >= max_v {
            return Err(SimError::invalid("ocv_min_v", "must be < ocv_max_v"));
        }
        Ok(Self { min_v, max_v })
    }

    /// Returns the open-circuit voltage at the given state of charge.
    ///
    /// Out-of-range inputs are clamped to [0, 100] before interpolation;
    /// clamping is the defined policy, not an error. Pure and
    /// deterministic, monotonically non-decreasing in `soc_percent`.
    pub fn voltage_at(&self, soc_percent: f64) -> f64 {
        let clamped = soc_percent.clamp(0.0, 100.0);
        self.min_v + (self.max_v - self.min_v) * (clamped / 100.0)
    }
}
