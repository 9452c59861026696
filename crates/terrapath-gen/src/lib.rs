//! Random terrain generation for terrapath.

pub mod mapgen;

pub use mapgen::{GenConfig, GenError, TerrainGen};
