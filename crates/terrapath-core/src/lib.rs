//! **terrapath-core**: weighted terrain grids (core types).
//!
//! This crate provides the types shared across the *terrapath* workspace:
//! geometry primitives, the [`Terrain`] label of a single cell, and the
//! read-only [`TerrainGrid`] that answers traversability and entry-cost
//! queries for the pathfinder.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Point, Range};
pub use grid::{GridError, TerrainGrid};
pub use terrain::Terrain;
