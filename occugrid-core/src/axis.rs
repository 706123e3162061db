//! Discretized map axis
//!
//! Cell centers sit at `0, cell_size, 2 * cell_size, ...` up to and including
//! `map_length`, giving `floor(map_length / cell_size) + 1` cells. A negative
//! `map_length` gives an empty axis.
//!
//! Positions are computed as `k * cell_size` rather than by repeated addition
//! so rounding error does not accumulate along the axis.
//!
//! An axis never holds more than [`MAX_CELLS`] cells.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::constants::{AXIS_SNAP_TOLERANCE, MAX_CELLS};

/// Ordered, immutable sequence of cell-center positions
#[derive(Debug, Clone, PartialEq)]
pub struct CellAxis {
    positions: Vec<f64>,
    cell_size: f64,
}

impl CellAxis {
    /// Build the axis. `cell_size` must be positive and finite (validated by
    /// [`crate::MapperConfig::validate`]).
    ///
    /// Geometry needing more than [`MAX_CELLS`] cells is truncated to
    /// [`MAX_CELLS`]; validation rejects such a configuration first.
    pub fn build(cell_size: f64, map_length: f64) -> Self {
        let count = Self::cell_count(cell_size, map_length).unwrap_or(MAX_CELLS);
        let positions = (0..count).map(|k| k as f64 * cell_size).collect();

        Self {
            positions,
            cell_size,
        }
    }

    /// Number of cells an axis of this geometry holds.
    ///
    /// `None` when the count exceeds [`MAX_CELLS`] or is not a number.
    pub fn cell_count(cell_size: f64, map_length: f64) -> Option<usize> {
        if map_length < 0.0 {
            return Some(0);
        }

        // Snap ratios like 2.9999999999999996 up to the intended integer
        let steps = libm::floor(map_length / cell_size * (1.0 + AXIS_SNAP_TOLERANCE));
        if steps.is_nan() || steps >= MAX_CELLS as f64 {
            return None;
        }

        Some(steps as usize + 1)
    }

    /// Cell-center positions in axis order
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Spacing between adjacent cells
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the axis holds no cell
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of the cell at `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    /// Iterate over positions
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().copied()
    }

    /// Index of the cell whose center is nearest to `position`.
    ///
    /// Positions outside the axis clamp to the first or last cell. `None` for
    /// an empty axis or a NaN position.
    pub fn nearest_index(&self, position: f64) -> Option<usize> {
        if self.is_empty() || position.is_nan() {
            return None;
        }

        let last = self.len() - 1;
        let k = libm::round(position / self.cell_size);
        if k <= 0.0 {
            Some(0)
        } else if k >= last as f64 {
            Some(last)
        } else {
            Some(k as usize)
        }
    }

    pub(crate) fn into_positions(self) -> Vec<f64> {
        self.positions
    }
}
