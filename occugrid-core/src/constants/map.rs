//! Cell Axis Geometry
//!
//! Defaults for the discretized 1-D map axis. Units follow the range sensor
//! (centimetres in the reference scenario); the mapper itself is unit-agnostic.

/// Spacing between adjacent cell centers (cm).
pub const DEFAULT_CELL_SIZE: f64 = 20.0;

/// Total extent of the mapped axis (cm). Inclusive upper bound.
pub const DEFAULT_MAP_LENGTH: f64 = 100.0;

/// Relative tolerance applied to `map_length / cell_size` when counting cells.
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996` in binary floating point;
/// without snapping, the cell at exactly `map_length` would be dropped.
/// A few ULPs of the ratio, so no cell lands further past `map_length` than
/// rounding error.
pub const AXIS_SNAP_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Largest number of cells an axis may hold.
///
/// Configurations whose geometry needs more cells are rejected by
/// [`crate::MapperConfig::validate`] instead of exhausting memory.
pub const MAX_CELLS: usize = 1 << 20;
