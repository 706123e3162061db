//! Mapping results
//!
//! An [`OccupancyMap`] is what a run hands back: one [`CellEstimate`] per cell
//! of the axis, in axis order. The mapper keeps no reference to it.
//!
//! Rendering collaborators usually want the probability of a cell being
//! *free* (brightness), plotting collaborators the `(distance, probability)`
//! curve; both views are provided without committing to any output format.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::DegenerateMap;

/// Posterior belief about one cell
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellEstimate {
    /// Cell-center position on the axis
    pub position: f64,
    /// Final accumulated log-odds
    pub log_odds: f64,
    /// Posterior occupancy probability in `[0, 1]`
    pub probability: f64,
}

impl CellEstimate {
    /// Probability that the cell is free
    pub fn free_probability(&self) -> f64 {
        1.0 - self.probability
    }

    /// `(position, probability)` pair
    pub fn pair(&self) -> (f64, f64) {
        (self.position, self.probability)
    }
}

/// Occupancy grid produced by one mapping run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupancyMap {
    cells: Vec<CellEstimate>,
    #[cfg_attr(feature = "serde", serde(default))]
    advisory: Option<DegenerateMap>,
}

impl OccupancyMap {
    pub(crate) fn new(cells: Vec<CellEstimate>, advisory: Option<DegenerateMap>) -> Self {
        Self { cells, advisory }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the axis held no cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cell estimates in axis order
    pub fn cells(&self) -> &[CellEstimate] {
        &self.cells
    }

    /// Iterate over cell estimates
    pub fn iter(&self) -> core::slice::Iter<'_, CellEstimate> {
        self.cells.iter()
    }

    /// Cell-center positions
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(|cell| cell.position)
    }

    /// Occupancy probabilities
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(|cell| cell.probability)
    }

    /// Free-space probabilities (`1 - p`)
    pub fn free_probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(CellEstimate::free_probability)
    }

    /// `(position, probability)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cells.iter().map(CellEstimate::pair)
    }

    /// Consume the map into `(position, probability)` pairs
    pub fn into_pairs(self) -> Vec<(f64, f64)> {
        self.cells.into_iter().map(|cell| cell.pair()).collect()
    }

    /// Estimate for the cell whose center is nearest to `position`.
    ///
    /// Positions off either end clamp to the first or last cell.
    pub fn cell_at(&self, position: f64) -> Option<&CellEstimate> {
        if position.is_nan() {
            return None;
        }
        let first = self.cells.first()?;
        let last = self.cells.last()?;
        if self.cells.len() == 1 || position <= first.position {
            return Some(first);
        }
        if position >= last.position {
            return Some(last);
        }

        let spacing = self.cells[1].position - first.position;
        let index = libm::round((position - first.position) / spacing) as usize;
        self.cells.get(index.min(self.cells.len() - 1))
    }

    /// Degenerate-map advisory, if the axis had fewer than two cells
    pub fn advisory(&self) -> Option<DegenerateMap> {
        self.advisory
    }
}

impl<'a> IntoIterator for &'a OccupancyMap {
    type Item = &'a CellEstimate;
    type IntoIter = core::slice::Iter<'a, CellEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> OccupancyMap {
        let cells = [(0.0, 0.2), (10.0, 0.5), (20.0, 0.9)]
            .iter()
            .map(|&(position, probability)| CellEstimate {
                position,
                log_odds: crate::log_odds::probability_to_log_odds(probability),
                probability,
            })
            .collect();
        OccupancyMap::new(cells, None)
    }

    #[test]
    fn views_preserve_order() {
        let map = sample_map();
        assert_eq!(map.len(), 3);
        assert!(map.positions().eq([0.0, 10.0, 20.0]));
        assert!(map.probabilities().eq([0.2, 0.5, 0.9]));
        assert_eq!(map.pairs().nth(2), Some((20.0, 0.9)));
    }

    #[test]
    fn free_probability_complements() {
        let map = sample_map();
        for (cell, free) in map.iter().zip(map.free_probabilities()) {
            assert!((cell.probability + free - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn into_pairs() {
        let pairs = sample_map().into_pairs();
        assert_eq!(pairs.as_slice(), &[(0.0, 0.2), (10.0, 0.5), (20.0, 0.9)]);
    }

    #[test]
    fn cell_lookup() {
        let map = sample_map();
        assert_eq!(map.cell_at(-3.0).unwrap().position, 0.0);
        assert_eq!(map.cell_at(4.9).unwrap().position, 0.0);
        assert_eq!(map.cell_at(11.0).unwrap().position, 10.0);
        assert_eq!(map.cell_at(16.0).unwrap().position, 20.0);
        assert_eq!(map.cell_at(99.0).unwrap().position, 20.0);
        assert!(map.cell_at(f64::NAN).is_none());
    }

    #[test]
    fn empty_map() {
        let advisory = DegenerateMap { map_length: -1.0, cell_size: 1.0, cells: 0 };
        let map = OccupancyMap::new(Vec::new(), Some(advisory));
        assert!(map.is_empty());
        assert!(map.cell_at(0.0).is_none());
        assert_eq!(map.advisory(), Some(advisory));
    }
}
