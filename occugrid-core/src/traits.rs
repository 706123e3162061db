//! Core traits for inverse sensor models
//!
//! The mapper only needs one thing from a sensor: how much evidence a single
//! range reading gives about a single cell. Keep the seam that small.

/// Inverse sensor model
///
/// Maps a `(measurement, cell_position)` pair to the log-odds evidence the
/// measurement provides about that cell's occupancy.
///
/// ## Implementation Guidelines
///
/// 1. **Pure**: Same inputs, same output. The mapper relies on this for
///    order-independent fusion.
/// 2. **Finite**: Never return NaN or infinity; validate probabilities when
///    the model is built, not per call.
/// 3. **Cheap**: Called `|measurements| × |cells|` times per run.
///
/// ## Example Implementation
///
/// ```rust
/// use occugrid_core::traits::InverseSensorModel;
///
/// /// Reports nothing about any cell
/// struct Uninformative;
///
/// impl InverseSensorModel for Uninformative {
///     fn log_odds(&self, _measurement: f64, _cell_position: f64) -> f64 {
///         0.0
///     }
/// }
///
/// assert_eq!(Uninformative.log_odds(51.0, 40.0), 0.0);
/// ```
pub trait InverseSensorModel {
    /// Log-odds evidence `l(cell | measurement)`
    fn log_odds(&self, measurement: f64, cell_position: f64) -> f64;
}

impl<T: InverseSensorModel + ?Sized> InverseSensorModel for &T {
    fn log_odds(&self, measurement: f64, cell_position: f64) -> f64 {
        (**self).log_odds(measurement, cell_position)
    }
}
