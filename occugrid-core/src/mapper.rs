//! Recursive Log-Odds Occupancy Grid Mapping
//!
//! ## Overview
//!
//! [`GridMapper`] fuses a sequence of range readings into a posterior
//! occupancy probability for every cell of a 1-D axis using the recursive
//! binary Bayes filter in log-odds form.
//!
//! ## Algorithm
//!
//! ```text
//! l_0       = ln((1 - p_init) / p_init)        # prior term (inverted ratio)
//! l[c]      = ln(p_init / (1 - p_init))        # initial belief, every cell
//!
//! for z in measurements:                       # input order
//!     for c in axis:                           # axis order
//!         if x[c] > z + range_limit:           # outside perceptual field
//!             continue
//!         l[c] = l[c] - l_0 + ism(z, x[c])
//!
//! p[c]      = 1 - 1 / (1 + exp(l[c]))
//! ```
//!
//! Only the far side of the perceptual field is bounded: every cell between
//! the sensor and `z + range_limit` is updated, the boundary cell included.
//!
//! ## Sign Convention
//!
//! `l_0` uses the inverted ratio and is *subtracted*, so every in-range update
//! adds `l(p_init)` on top of the evidence term. With one in-range reading a
//! cell ends at `2 * l(p_init) + ism(z, x)`. This convention is kept exactly
//! and covered by tests; the non-inverted alternative looks equally plausible
//! and silently biases results after many readings.
//!
//! ## State
//!
//! The log-odds vector is local to one call of [`GridMapper::run`]; the
//! mapper holds only its configuration and sensor model, so a run is a pure
//! function of them and can be repeated.
//!
//! ## Usage Example
//!
//! ```rust
//! use occugrid_core::{GridMapper, MapperConfig};
//!
//! let mapper = GridMapper::new(MapperConfig::default())?;
//! let map = mapper.run();
//!
//! // Cell at 40 was traversed, cell at 60 lies in the reflected band
//! assert!(map.cell_at(40.0).unwrap().probability < 0.8);
//! assert!(map.cell_at(60.0).unwrap().probability > 0.8);
//! // Cell at 100 lies past 51 + 30 and keeps the prior
//! assert!((map.cell_at(100.0).unwrap().probability - 0.8).abs() < 1e-12);
//! # Ok::<(), occugrid_core::ConfigError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    axis::CellAxis,
    config::MapperConfig,
    errors::{ConfigResult, DegenerateMap},
    log_odds::{log_odds_to_probability, prior_term, probability_to_log_odds},
    map::{CellEstimate, OccupancyMap},
    sensor_model::StepSensorModel,
    traits::InverseSensorModel,
};

/// 1-D occupancy grid mapper
///
/// ## Type Parameters
/// - `S`: Inverse sensor model, [`StepSensorModel`] unless a custom one is
///   supplied through [`GridMapper::with_model`]
#[derive(Debug, Clone)]
pub struct GridMapper<S = StepSensorModel> {
    /// Validated configuration
    config: MapperConfig,
    /// Evidence term per (measurement, cell)
    model: S,
}

impl GridMapper<StepSensorModel> {
    /// Validate the configuration and build the binary step sensor model.
    ///
    /// No log-odds value is computed if any parameter violates its bound.
    pub fn new(config: MapperConfig) -> ConfigResult<Self> {
        config.validate()?;
        let model = StepSensorModel::new(config.p_free_before, config.p_occ_after)?;

        Ok(Self { config, model })
    }
}

impl<S: InverseSensorModel> GridMapper<S> {
    /// Validate the configuration and use a custom inverse sensor model.
    ///
    /// `p_free_before` and `p_occ_after` are still validated but only the
    /// supplied model decides the evidence terms.
    pub fn with_model(config: MapperConfig, model: S) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config, model })
    }

    /// Configuration this mapper was built with
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Inverse sensor model in use
    pub fn model(&self) -> &S {
        &self.model
    }

    /// Build the cell axis for the configured geometry
    pub fn build_cell_axis(&self) -> CellAxis {
        CellAxis::build(self.config.cell_size, self.config.map_length)
    }

    /// Log-odds evidence one measurement gives about one cell
    pub fn inverse_sensor_model(&self, measurement: f64, cell_position: f64) -> f64 {
        self.model.log_odds(measurement, cell_position)
    }

    /// Prior term subtracted on every update: `ln((1 - p_init) / p_init)`
    pub fn prior_log_odds(&self) -> f64 {
        prior_term(self.config.p_init)
    }

    /// Belief every cell starts from: `ln(p_init / (1 - p_init))`
    pub fn initial_log_odds(&self) -> f64 {
        probability_to_log_odds(self.config.p_init)
    }

    /// True when `measurement` observes the cell at `cell_position`.
    ///
    /// Only the far side is bounded; the boundary itself is observed.
    pub fn in_perceptual_field(&self, measurement: f64, cell_position: f64) -> bool {
        cell_position <= measurement + self.config.sensor_range_limit
    }

    /// Run the recursive update and return the final log-odds per cell
    pub fn run_log_odds(&self) -> Vec<f64> {
        let axis = self.build_cell_axis();
        self.fuse(&axis)
    }

    /// Run the full mapping pipeline and return the posterior per cell
    pub fn run(&self) -> OccupancyMap {
        let axis = self.build_cell_axis();
        log_debug!(
            "Mapping {} measurement(s) over {} cell(s)",
            self.config.measurements.len(),
            axis.len()
        );

        let advisory =
            DegenerateMap::check(self.config.map_length, self.config.cell_size, axis.len());
        if let Some(degenerate) = advisory {
            log_warn!("{}", degenerate);
        }

        let log_odds = self.fuse(&axis);
        let cells: Vec<CellEstimate> = axis
            .into_positions()
            .into_iter()
            .zip(log_odds)
            .map(|(position, log_odds)| CellEstimate {
                position,
                log_odds,
                probability: log_odds_to_probability(log_odds),
            })
            .collect();

        log_debug!("Mapping complete");
        OccupancyMap::new(cells, advisory)
    }

    /// Recursive binary Bayes filter over all (measurement, cell) pairs
    fn fuse(&self, axis: &CellAxis) -> Vec<f64> {
        let prior = self.prior_log_odds();
        let mut log_odds: Vec<f64> = core::iter::repeat(self.initial_log_odds())
            .take(axis.len())
            .collect();

        for &measurement in &self.config.measurements {
            let mut updated = 0usize;

            for (belief, position) in log_odds.iter_mut().zip(axis.iter()) {
                if !self.in_perceptual_field(measurement, position) {
                    continue;
                }
                *belief = *belief - prior + self.inverse_sensor_model(measurement, position);
                updated += 1;
            }

            log_trace!("Measurement {} updated {} cell(s)", measurement, updated);
        }

        log_odds
    }
}
