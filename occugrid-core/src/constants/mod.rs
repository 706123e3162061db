//! Constants for OccuGrid Core
//!
//! Centralized defaults used throughout the mapper. Every value is named and
//! documented here instead of appearing as a magic number in the algorithm.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensor**: Inverse sensor model probabilities and perceptual field
//! - **Map**: Cell axis geometry and numerical tolerances
//!
//! The defaults reproduce the reference scenario: a single range reading of
//! 51 cm on a 100 cm axis discretized into 20 cm cells.

/// Inverse sensor model probabilities and range limits.
pub mod sensor;

/// Cell axis geometry and numerical tolerances.
pub mod map;

// Re-export commonly used constants for convenience
pub use sensor::{
    DEFAULT_MEASUREMENT, DEFAULT_P_FREE_BEFORE, DEFAULT_P_INIT, DEFAULT_P_OCC_AFTER,
    DEFAULT_SENSOR_RANGE_LIMIT,
};

pub use map::{AXIS_SNAP_TOLERANCE, DEFAULT_CELL_SIZE, DEFAULT_MAP_LENGTH, MAX_CELLS};
