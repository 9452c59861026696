use terrapath_core::{GridError, Point, TerrainGrid};

use crate::distance::manhattan;

/// Error returned when a cost is requested for a cell that cannot be entered.
pub type CostError = GridError;

/// Minimal pathfinding interface: answers whether a cell can be entered.
pub trait Pather {
    /// Whether `p` is inside the map and traversable. Must accept any point.
    fn is_valid(&self, p: Point) -> bool;
}

/// Pather with weighted (positive-cost) cells.
pub trait WeightedPather: Pather {
    /// Cost of entering `p`. Must be > 0 whenever `is_valid(p)` holds, and
    /// an error otherwise.
    fn cost(&self, p: Point) -> Result<u32, CostError>;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> u32 {
        manhattan(from, to)
    }
}

impl Pather for TerrainGrid {
    #[inline]
    fn is_valid(&self, p: Point) -> bool {
        TerrainGrid::is_valid(self, p.x, p.y)
    }
}

impl WeightedPather for TerrainGrid {
    #[inline]
    fn cost(&self, p: Point) -> Result<u32, CostError> {
        TerrainGrid::cost(self, p.x, p.y)
    }
}

impl AstarPather for TerrainGrid {}
