//! Core mapping engine for OccuGrid
//!
//! Builds a 1-D occupancy grid from range readings with the recursive
//! log-odds binary Bayes filter and a binary step inverse sensor model.
//!
//! Key constraints:
//! - Configuration is validated before any log-odds value is computed
//! - A run is a pure function of its configuration
//! - Compiles without `std` (needs `alloc`)
//!
//! ```
//! use occugrid_core::{GridMapper, MapperConfig};
//!
//! let config = MapperConfig::default().with_measurements([51.0, 49.0]);
//! let mapper = GridMapper::new(config)?;
//!
//! for (position, probability) in mapper.run().pairs() {
//!     assert!((0.0..=1.0).contains(&probability));
//!     let _ = position;
//! }
//! # Ok::<(), occugrid_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ if false { let _ = core::format_args!($($arg)*); } }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ if false { let _ = core::format_args!($($arg)*); } }};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{ if false { let _ = core::format_args!($($arg)*); } }};
}

pub mod axis;
pub mod config;
pub mod constants;
pub mod errors;
pub mod log_odds;
pub mod map;
pub mod mapper;
pub mod sensor_model;
pub mod traits;

// Public API
pub use axis::CellAxis;
pub use config::MapperConfig;
pub use errors::{ConfigError, ConfigResult, DegenerateMap};
pub use map::{CellEstimate, OccupancyMap};
pub use mapper::GridMapper;
pub use sensor_model::StepSensorModel;
pub use traits::InverseSensorModel;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
