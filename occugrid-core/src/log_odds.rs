//! Log-Odds Conversions
//!
//! ## Overview
//!
//! The recursive Bayes filter multiplies likelihood ratios. In log-odds form
//! these products become sums, which keeps repeated updates cheap and
//! numerically stable:
//!
//! ```text
//! l(p) = ln(p / (1 - p))          # probability -> log-odds
//! p(l) = 1 - 1 / (1 + exp(l))     # log-odds -> probability
//! ```
//!
//! ## The Prior Term
//!
//! The recursive update subtracts the prior at every step so that it is not
//! counted once per measurement:
//!
//! ```text
//! l_t = l_{t-1} - l_0 + inverse_sensor_model(z_t)
//! ```
//!
//! Here `l_0` is written with the inverted ratio `ln((1 - p_init) / p_init)`,
//! so subtracting it adds `l(p_init)` back. [`prior_term`] produces exactly
//! this inverted value; do not replace it with [`probability_to_log_odds`].
//!
//! ## no_std
//!
//! All math goes through `libm` so the module compiles without `std`.

/// Convert a probability in `(0, 1)` to log-odds
///
/// Returns `-inf` for 0 and `+inf` for 1; callers validate beforehand.
#[inline]
pub fn probability_to_log_odds(probability: f64) -> f64 {
    libm::log(probability / (1.0 - probability))
}

/// Convert log-odds back to a probability in `[0, 1]`
///
/// Saturates to exactly 0 or 1 when `exp` underflows or overflows.
#[inline]
pub fn log_odds_to_probability(log_odds: f64) -> f64 {
    1.0 - 1.0 / (1.0 + libm::exp(log_odds))
}

/// Prior term subtracted at every recursive step: `ln((1 - p_init) / p_init)`
#[inline]
pub fn prior_term(p_init: f64) -> f64 {
    libm::log((1.0 - p_init) / p_init)
}
