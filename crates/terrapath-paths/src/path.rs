//! Metrics derived from a returned path.

use terrapath_core::Point;

use crate::traits::{CostError, Pather, WeightedPather};

/// Total entry cost of `path`: the sum of the costs of every cell after the
/// first. The starting cell is already occupied, so it contributes nothing.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> Result<u32, CostError> {
    path.iter().skip(1).map(|&p| pather.cost(p)).sum()
}

/// Number of moves in `path`.
pub fn path_steps(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Whether `path` is non-empty, every cell is valid, and each consecutive
/// pair is one cardinal move apart.
pub fn is_connected<P: Pather>(pather: &P, path: &[Point]) -> bool {
    !path.is_empty()
        && path.iter().all(|&p| pather.is_valid(p))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
