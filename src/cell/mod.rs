//! Battery cell models: electrical parameters and the OCV curve.

/// Linear open-circuit-voltage model.
pub mod ocv;
/// Immutable per-run cell parameters.
pub mod params;

// Re-export the main types for convenience
pub use ocv::OcvCurve;
pub use params::CellParams;
