//! Error Types for Mapper Configuration
//!
//! ## Design Philosophy
//!
//! The mapping run itself cannot fail: once a configuration is accepted, the
//! recursive update is a bounded loop of additions. Every failure is therefore
//! a configuration failure, detected before any log-odds value is computed.
//!
//! 1. **Fail Early**: A probability of exactly 0 or 1 makes the log-odds
//!    infinite, and a non-positive cell size makes the axis unbounded. Both are
//!    rejected at construction instead of surfacing as `NaN` in the output.
//!
//! 2. **No Heap Allocation**: Every variant carries `&'static str` parameter
//!    names and plain numbers, so errors are `Copy` and usable without `alloc`.
//!
//! 3. **Actionable Information**: Each error names the parameter that
//!    violated its bound and the value that was supplied.
//!
//! ## Error Categories
//!
//! ### Fatal (construction is refused)
//! - `ProbabilityOutOfRange`: probability parameter outside `(0, 1)`
//! - `NonPositiveCellSize`: `cell_size <= 0`
//! - `NonFinite`: NaN or infinity in a scalar parameter
//! - `InvalidMeasurement`: negative or non-finite range reading
//! - `TooManyCells`: the axis geometry needs more than `MAX_CELLS` cells
//! - `Parse`: malformed JSON configuration document (produced by the `json` feature)
//!
//! ### Advisory (computation proceeds)
//! - [`DegenerateMap`]: the axis has zero or one cell
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use occugrid_core::{ConfigError, GridMapper, MapperConfig};
//!
//! let config = MapperConfig::default().with_p_init(1.0);
//! match GridMapper::new(config) {
//!     Ok(mapper) => {
//!         let _map = mapper.run();
//!     }
//!     Err(ConfigError::ProbabilityOutOfRange { parameter, value }) => {
//!         assert_eq!(parameter, "p_init");
//!         assert_eq!(value, 1.0);
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - all detected before a run starts
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Probability parameter outside the open interval (0, 1)
    #[error("Probability {parameter} = {value} outside open interval (0, 1)")]
    ProbabilityOutOfRange {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The supplied value
        value: f64,
    },

    /// Cell spacing must be strictly positive
    #[error("cell_size = {value} must be greater than zero")]
    NonPositiveCellSize {
        /// The supplied cell size
        value: f64,
    },

    /// Scalar parameter is NaN or infinite
    #[error("{parameter} is not a finite number")]
    NonFinite {
        /// Name of the offending parameter
        parameter: &'static str,
    },

    /// Range reading is negative or not a finite number
    #[error("Measurement #{index} = {value} must be finite and non-negative")]
    InvalidMeasurement {
        /// Position of the reading in the measurement sequence
        index: usize,
        /// The supplied reading
        value: f64,
    },

    /// Axis geometry needs more cells than the mapper will allocate
    #[error("map_length {map_length} / cell_size {cell_size} needs more than {limit} cells")]
    TooManyCells {
        /// The supplied cell size
        cell_size: f64,
        /// The supplied map length
        map_length: f64,
        /// Largest accepted cell count
        limit: usize,
    },

    /// Configuration document could not be parsed
    #[error("Malformed configuration ({category}) at line {line}, column {column}")]
    Parse {
        /// serde_json error category
        category: &'static str,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
    },
}

impl ConfigError {
    /// Name of the parameter that violated its bound, if the error has one
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::ProbabilityOutOfRange { parameter, .. } => Some(*parameter),
            Self::NonPositiveCellSize { .. } => Some("cell_size"),
            Self::NonFinite { parameter } => Some(*parameter),
            Self::InvalidMeasurement { .. } => Some("measurements"),
            Self::TooManyCells { .. } => Some("cell_size"),
            Self::Parse { .. } => None,
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let category = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };

        Self::Parse {
            category,
            line: err.line(),
            column: err.column(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ProbabilityOutOfRange { parameter, value } => {
                defmt::write!(fmt, "{} = {} outside (0, 1)", parameter, value);
            }
            Self::NonPositiveCellSize { value } => {
                defmt::write!(fmt, "cell_size = {} <= 0", value);
            }
            Self::NonFinite { parameter } => {
                defmt::write!(fmt, "{} not finite", parameter);
            }
            Self::InvalidMeasurement { index, value } => {
                defmt::write!(fmt, "Measurement #{} = {} invalid", index, value);
            }
            Self::TooManyCells { limit, .. } => {
                defmt::write!(fmt, "Axis exceeds {} cells", limit);
            }
            Self::Parse { category, line, column } => {
                defmt::write!(fmt, "Parse ({}) at {}:{}", category, line, column);
            }
        }
    }
}

/// Advisory raised when the cell axis is empty or holds a single cell.
///
/// Not an error: the run completes and returns a valid, if uninformative,
/// map. Surfaced through [`crate::OccupancyMap::advisory`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error(
    "Degenerate map: map_length {map_length} with cell_size {cell_size} yields {cells} cell(s)"
)]
pub struct DegenerateMap {
    /// Configured map length
    pub map_length: f64,
    /// Configured cell spacing
    pub cell_size: f64,
    /// Number of cells on the axis (0 or 1)
    pub cells: usize,
}

impl DegenerateMap {
    /// Check an axis of `cells` cells for degeneracy
    pub fn check(map_length: f64, cell_size: f64, cells: usize) -> Option<Self> {
        if cells < 2 {
            Some(Self {
                map_length,
                cell_size,
                cells,
            })
        } else {
            None
        }
    }

    /// True when no cell survived axis construction
    pub fn is_empty(&self) -> bool {
        self.cells == 0
    }
}
