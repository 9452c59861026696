use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use terrapath_core::Point;

use crate::neighbors::Neighbors;
use crate::traits::WeightedPather;

/// Minimum entry-cost from one source to every reachable cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostMap {
    source: Point,
    costs: HashMap<Point, u32>,
}

impl CostMap {
    /// The cell the map was computed from.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Cheapest cost of reaching `p` from the source, or `None` if `p` is
    /// unreachable (or the source itself was not valid).
    pub fn at(&self, p: Point) -> Option<u32> {
        self.costs.get(&p).copied()
    }

    /// Number of reachable cells, the source included.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether nothing is reachable.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Compute an exhaustive Dijkstra cost map from `source`.
///
/// Uses the same move model as [`find_path`](crate::find_path): four
/// cardinal moves, each costing the entry cost of the destination. The
/// search has no heuristic and no goal, which makes it a brute-force
/// reference for A* results.
pub fn cost_map<P: WeightedPather>(pather: &P, source: Point) -> CostMap {
    let mut costs: HashMap<Point, u32> = HashMap::new();
    if !pather.is_valid(source) {
        return CostMap { source, costs };
    }

    let mut open: BinaryHeap<Reverse<(u32, Point)>> = BinaryHeap::new();
    let mut nb = Neighbors::new();
    costs.insert(source, 0);
    open.push(Reverse((0, source)));

    while let Some(Reverse((current_g, cp))) = open.pop() {
        if costs.get(&cp).is_some_and(|&g| g < current_g) {
            continue;
        }
        for &np in nb.cardinal(cp, |p| pather.is_valid(p)) {
            let Ok(step) = pather.cost(np) else {
                continue;
            };
            let tentative = current_g + step;
            if costs.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            costs.insert(np, tentative);
            open.push(Reverse((tentative, np)));
        }
    }

    CostMap { source, costs }
}
