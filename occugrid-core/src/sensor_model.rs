//! Binary Step Inverse Sensor Model
//!
//! Classifies a cell relative to the reflection point of one range reading:
//!
//! ```text
//!   sensor                 reflection
//!     |----- free -----|------ occupied band ------>
//!     0            cell < z       cell >= z
//!         l_free = l(p_free_before)   l_occ = l(p_occ_after)
//! ```
//!
//! No distance-weighted falloff and no attenuation: the model is a step
//! function. The cell at exactly the reflection point takes the occupied
//! branch. Whether a cell is observed at all is the mapper's concern
//! (range limit), not the model's.

use crate::{
    config::check_probability, errors::ConfigResult, log_odds::probability_to_log_odds,
    traits::InverseSensorModel,
};

/// Binary step inverse sensor model with precomputed log-odds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSensorModel {
    /// Evidence for cells strictly before the reflection point
    free_log_odds: f64,

    /// Evidence for cells at or beyond the reflection point
    occupied_log_odds: f64,
}

impl StepSensorModel {
    /// Build the model from the two evidence probabilities.
    ///
    /// Both must lie strictly inside `(0, 1)`.
    pub fn new(p_free_before: f64, p_occ_after: f64) -> ConfigResult<Self> {
        check_probability("p_free_before", p_free_before)?;
        check_probability("p_occ_after", p_occ_after)?;

        Ok(Self {
            free_log_odds: probability_to_log_odds(p_free_before),
            occupied_log_odds: probability_to_log_odds(p_occ_after),
        })
    }

    /// Log-odds applied to traversed cells
    pub fn free_log_odds(&self) -> f64 {
        self.free_log_odds
    }

    /// Log-odds applied to cells in the occupied band
    pub fn occupied_log_odds(&self) -> f64 {
        self.occupied_log_odds
    }
}

impl InverseSensorModel for StepSensorModel {
    #[inline]
    fn log_odds(&self, measurement: f64, cell_position: f64) -> f64 {
        if cell_position < measurement {
            self.free_log_odds
        } else {
            self.occupied_log_odds
        }
    }
}
