//! Inverse Sensor Model Defaults
//!
//! Probabilities used by the binary step inverse sensor model. All values lie
//! strictly inside `(0, 1)`; log-odds of 0 or 1 are infinite.

// ===== INVERSE SENSOR MODEL =====

/// Occupancy probability of a cell the beam passed through.
///
/// Applied to cells strictly before the reflection point. Well below 0.5, so
/// each traversal pushes the cell towards "free":
/// `ln(0.1 / 0.9) ≈ -2.197`
pub const DEFAULT_P_FREE_BEFORE: f64 = 0.1;

/// Occupancy probability of a cell at or beyond the reflection point.
///
/// Only slightly above 0.5: a single reflection is weak evidence because the
/// return may come from anywhere inside the occupied band.
/// `ln(0.6 / 0.4) ≈ 0.405`
pub const DEFAULT_P_OCC_AFTER: f64 = 0.6;

/// Uniform prior occupancy probability of every cell.
///
/// Encodes how much is known about the map before any reading arrives.
/// `ln(0.8 / 0.2) ≈ 1.386`
pub const DEFAULT_P_INIT: f64 = 0.8;

// ===== PERCEPTUAL FIELD =====

/// Distance beyond the reflection point still considered observed (cm).
///
/// Cells further than `measurement + range_limit` keep their belief.
pub const DEFAULT_SENSOR_RANGE_LIMIT: f64 = 30.0;

/// Range reading of the reference scenario (cm).
pub const DEFAULT_MEASUREMENT: f64 = 51.0;
