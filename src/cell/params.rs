use crate::sim::types::SimError;

/// Immutable electrical parameters of a single battery cell.
///
/// All values are fixed for the duration of a simulation run. Construction
/// is the validation boundary: out-of-range values are rejected before any
/// computation starts.
///
/// # Sign Convention
/// - Positive current: charging
/// - Negative current: discharging
#[derive(Debug, Clone, Copy)]
pub struct CellParams {
    /// Nominal capacity in ampere-hours (> 0).
    pub capacity_ah: f64,

    /// Coulombic efficiency as a fraction in (0, 1].
    ///
    /// Applied multiplicatively while charging and as a divisor while
    /// discharging.
    pub coulombic_efficiency: f64,

    /// Internal resistance in ohms (>= 0).
    pub internal_resistance_ohm: f64,
}

impl CellParams {
    /// Creates validated cell parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if the capacity is not
    /// strictly positive, the efficiency is outside `(0, 1]`, the
    /// resistance is negative, or any value is non-finite.
    pub fn new(
        capacity_ah: f64,
        coulombic_efficiency: f64,
        internal_resistance_ohm: f64,
    ) -> Result<Self, SimError> {
        if !capacity_ah.is_finite() || capacity_ah <= 0.0 {
            return Err(SimError::invalid("capacity_ah", "must be > 0"));
        }
        if !coulombic_efficiency.is_finite()
            || coulombic_efficiency <= 0.0
            || coulombic_efficiency > 1.0
        {
            return Err(SimError::invalid(
                "coulombic_efficiency",
                "must be in (0, 1]",
            ));
        }
        if !internal_resistance_ohm.is_finite() || internal_resistance_ohm < 0.0 {
            return Err(SimError::invalid("internal_resistance_ohm", "must be >= 0"));
        }

        Ok(Self {
            capacity_ah,
            coulombic_efficiency,
            internal_resistance_ohm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_params() {
        let p = CellParams::new(100.0, 0.99, 0.005).expect("valid params");
        assert_eq!(p.capacity_ah, 100.0);
        assert_eq!(p.coulombic_efficiency, 0.99);
        assert_eq!(p.internal_resistance_ohm, 0.005);
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(CellParams::new(0.0, 0.99, 0.005).is_err());
        assert!(CellParams::new(-10.0, 0.99, 0.005).is_err());
    }

    #[test]
    fn test_invalid_efficiency() {
        assert!(CellParams::new(100.0, 0.0, 0.005).is_err());
        assert!(CellParams::new(100.0, 1.01, 0.005).is_err());
        assert!(CellParams::new(100.0, -0.5, 0.005).is_err());
    }

    #[test]
    fn test_unit_efficiency_is_valid() {
        assert!(CellParams::new(100.0, 1.0, 0.005).is_ok());
    }

    #[test]
    fn test_invalid_resistance() {
        assert!(CellParams::new(100.0, 0.99, -0.001).is_err());
    }

    #[test]
    fn test_zero_resistance_is_valid() {
        assert!(CellParams::new(100.0, 0.99, 0.0).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CellParams::new(f64::NAN, 0.99, 0.005).is_err());
        assert!(CellParams::new(f64::INFINITY, 0.99, 0.005).is_err());
        assert!(CellParams::new(100.0, f64::NAN, 0.005).is_err());
        assert!(CellParams::new(100.0, 0.99, f64::NAN).is_err());
    }

    #[test]
    fn test_error_names_offending_field() {
        let err = CellParams::new(0.0, 0.99, 0.005).unwrap_err();
        let SimError::InvalidParameter { field, .. } = err;
        assert_eq!(field, "capacity_ah");
    }
}
