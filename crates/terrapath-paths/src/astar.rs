use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use terrapath_core::Point;

use crate::neighbors::Neighbors;
use crate::traits::AstarPather;

/// Frontier entry, ordered by `f` and then by position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    f: u32,
    pos: Point,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, pos) first.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute a minimum-cost path from `start` to `goal` using A*.
///
/// Moves are restricted to the four cardinal directions and each move costs
/// the entry cost of the destination cell. Returns the full path (including
/// both endpoints), or `None` if `start` or `goal` is not valid or no route
/// exists. Equal-priority frontier entries are popped in [`Point`] order, so
/// the result is fully deterministic.
pub fn find_path<P: AstarPather>(pather: &P, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !pather.is_valid(start) || !pather.is_valid(goal) {
        log::debug!("astar: {start} -> {goal}: endpoint not traversable");
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_value: HashMap<Point, u32> = HashMap::new();
    let mut parent: HashMap<Point, Point> = HashMap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut nb = Neighbors::new();

    g_value.insert(start, 0);
    open.push(NodeRef { f: 0, pos: start });

    while let Some(NodeRef { pos: current, .. }) = open.pop() {
        // Skip stale entries.
        if !closed.insert(current) {
            continue;
        }

        if current == goal {
            log::debug!(
                "astar: {start} -> {goal}: reached goal after expanding {} cells",
                closed.len()
            );
            return Some(reconstruct(&parent, start, goal));
        }

        let current_g = g_value[&current];
        for &np in nb.cardinal(current, |p| pather.is_valid(p)) {
            let step = match pather.cost(np) {
                Ok(c) => c,
                Err(e) => {
                    log::error!("astar: pather reported {np} valid but has no cost: {e}");
                    continue;
                }
            };
            let tentative_g = current_g + step;
            if g_value.get(&np).is_some_and(|&g| tentative_g >= g) {
                continue;
            }

            parent.insert(np, current);
            g_value.insert(np, tentative_g);
            open.push(NodeRef {
                f: tentative_g + pather.estimate(np, goal),
                pos: np,
            });
        }
    }

    log::debug!(
        "astar: {start} -> {goal}: no path after expanding {} cells",
        closed.len()
    );
    None
}

/// Walk predecessor links back from `goal` and return the path start-first.
fn reconstruct(parent: &HashMap<Point, Point>, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = parent.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    debug_assert_eq!(cur, start);
    path.reverse();
    path
}
