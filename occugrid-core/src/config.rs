//! Mapper configuration
//!
//! A [`MapperConfig`] carries every parameter of one mapping run as a named
//! field. It is a plain value: build it, validate it, hand it to
//! [`crate::GridMapper::new`]. The mapper never mutates it.
//!
//! ## Parameters
//!
//! | Field | Meaning | Bound |
//! |---|---|---|
//! | `p_free_before` | occupancy of a traversed cell | `(0, 1)` |
//! | `p_occ_after` | occupancy of a cell in the reflected band | `(0, 1)` |
//! | `p_init` | uniform prior occupancy | `(0, 1)` |
//! | `measurements` | ordered range readings | finite, `>= 0` |
//! | `sensor_range_limit` | observed distance past the reflection | finite |
//! | `cell_size` | spacing of cell centers | finite, `> 0` |
//! | `map_length` | inclusive extent of the axis | finite, at most `MAX_CELLS` cells |
//!
//! ## Example
//!
//! ```rust
//! use occugrid_core::MapperConfig;
//!
//! let config = MapperConfig::default()
//!     .with_measurements([51.0, 49.0, 53.0])
//!     .with_cell_size(10.0);
//!
//! assert!(config.validate().is_ok());
//! assert!(config.clone().with_cell_size(0.0).validate().is_err());
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    axis::CellAxis,
    constants::{
        DEFAULT_CELL_SIZE, DEFAULT_MAP_LENGTH, DEFAULT_MEASUREMENT, DEFAULT_P_FREE_BEFORE,
        DEFAULT_P_INIT, DEFAULT_P_OCC_AFTER, DEFAULT_SENSOR_RANGE_LIMIT, MAX_CELLS,
    },
    errors::{ConfigError, ConfigResult},
};

/// Configuration of a mapping run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapperConfig {
    /// Occupancy probability of a cell strictly before the reflection point
    pub p_free_before: f64,

    /// Occupancy probability of a cell at or beyond the reflection point
    pub p_occ_after: f64,

    /// Prior occupancy probability of every cell
    pub p_init: f64,

    /// Range readings, fused in this order
    pub measurements: Vec<f64>,

    /// Distance past a reflection point that still counts as observed
    pub sensor_range_limit: f64,

    /// Spacing between adjacent cell centers
    pub cell_size: f64,

    /// Extent of the mapped axis (inclusive)
    pub map_length: f64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            p_free_before: DEFAULT_P_FREE_BEFORE,
            p_occ_after: DEFAULT_P_OCC_AFTER,
            p_init: DEFAULT_P_INIT,
            measurements: [DEFAULT_MEASUREMENT].to_vec(),
            sensor_range_limit: DEFAULT_SENSOR_RANGE_LIMIT,
            cell_size: DEFAULT_CELL_SIZE,
            map_length: DEFAULT_MAP_LENGTH,
        }
    }
}

impl MapperConfig {
    /// Set the free-space evidence probability
    pub fn with_p_free_before(mut self, p: f64) -> Self {
        self.p_free_before = p;
        self
    }

    /// Set the occupied-band evidence probability
    pub fn with_p_occ_after(mut self, p: f64) -> Self {
        self.p_occ_after = p;
        self
    }

    /// Set the uniform prior
    pub fn with_p_init(mut self, p: f64) -> Self {
        self.p_init = p;
        self
    }

    /// Replace the measurement sequence
    pub fn with_measurements<I>(mut self, measurements: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.measurements = measurements.into_iter().collect();
        self
    }

    /// Append one measurement to the sequence
    pub fn with_measurement(mut self, measurement: f64) -> Self {
        self.measurements.push(measurement);
        self
    }

    /// Set the perceptual field past the reflection point
    pub fn with_sensor_range_limit(mut self, limit: f64) -> Self {
        self.sensor_range_limit = limit;
        self
    }

    /// Set the cell spacing
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the axis extent
    pub fn with_map_length(mut self, map_length: f64) -> Self {
        self.map_length = map_length;
        self
    }

    /// Check every invariant, reporting the first violation.
    ///
    /// Order: probabilities, cell size, map length, cell count, range limit,
    /// measurements.
    pub fn validate(&self) -> ConfigResult<()> {
        check_probability("p_free_before", self.p_free_before)?;
        check_probability("p_occ_after", self.p_occ_after)?;
        check_probability("p_init", self.p_init)?;

        check_finite("cell_size", self.cell_size)?;
        if self.cell_size <= 0.0 {
            return Err(ConfigError::NonPositiveCellSize { value: self.cell_size });
        }

        check_finite("map_length", self.map_length)?;
        if CellAxis::cell_count(self.cell_size, self.map_length).is_none() {
            return Err(ConfigError::TooManyCells {
                cell_size: self.cell_size,
                map_length: self.map_length,
                limit: MAX_CELLS,
            });
        }

        check_finite("sensor_range_limit", self.sensor_range_limit)?;

        for (index, &value) in self.measurements.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMeasurement { index, value });
            }
        }

        Ok(())
    }

    /// Parse a JSON document and validate the result.
    ///
    /// Missing fields fall back to [`MapperConfig::default`].
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON document
    #[cfg(feature = "json")]
    pub fn to_json_string(&self) -> ConfigResult<std::string::String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reject probabilities outside the open interval (0, 1), NaN included
pub(crate) fn check_probability(parameter: &'static str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { parameter, value })
    }
}

fn check_finite(parameter: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter })
    }
}
