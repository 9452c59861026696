//! Pathfinding over weighted terrain grids.
//!
//! The centrepiece is [`find_path`], a classic A* search over 4-directional
//! moves that returns a minimum-cost route or `None`. Supporting pieces:
//!
//! - **Dijkstra** exhaustive cost maps ([`cost_map`]), used as an
//!   optimality reference
//! - **Path metrics** ([`path_cost`], [`path_steps`], [`is_connected`])
//! - the [`manhattan`] heuristic
//!
//! Every search owns its own frontier and bookkeeping, so any number of
//! searches may run in parallel over one shared, read-only grid.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | [`is_connected`] |
//! | [`WeightedPather`] : [`Pather`] | [`cost_map`], [`path_cost`] |
//! | [`AstarPather`] : [`WeightedPather`] | [`find_path`] |

mod astar;
mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod traits;

pub use astar::find_path;
pub use dijkstra::{CostMap, cost_map};
pub use distance::manhattan;
pub use path::{is_connected, path_cost, path_steps};
pub use traits::{AstarPather, CostError, Pather, WeightedPather};
