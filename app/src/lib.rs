//! The `terrapath` command-line application.
//!
//! Builds (or loads) a terrain grid, runs A* between a start and a goal
//! cell, drives a [`Robot`] along the result and prints a coloured report.

pub mod config;
pub mod render;
pub mod robot;

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::{RngExt, SeedableRng};
use terrapath_core::{GridError, Point, TerrainGrid};
use terrapath_gen::{GenConfig, GenError, TerrainGen};

pub use config::{Args, ConfigError, GridSource, RunConfig};
pub use render::Report;
pub use robot::{Direction, Robot};

/// Anything that can abort a run. "No path" is not among them.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Gen(GenError),
    Grid(GridError),
    /// Reading a map file failed.
    Read { path: PathBuf, source: io::Error },
    /// Writing the report failed.
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Gen(e) => write!(f, "{e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Io(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Gen(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Read { source, .. } => Some(source),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GenError> for AppError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

impl From<GridError> for AppError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Bottom-right cell of a grid of the given size.
fn corner(size: Point) -> Point {
    Point::new(size.x - 1, size.y - 1)
}

/// Generate a grid, retrying up to `attempts` times in total when the first
/// one has no route. If none is solvable the first grid is kept.
fn generate(
    gen_cfg: &GenConfig,
    seed: u64,
    start: Point,
    goal: Point,
    attempts: usize,
) -> Result<(TerrainGrid, Option<Vec<Point>>), AppError> {
    let mut tg = TerrainGen::with_rng(rand::rngs::StdRng::seed_from_u64(seed));
    let grid = tg.generate(gen_cfg, &[start, goal])?;
    let path = terrapath_paths::find_path(&grid, start, goal);
    if path.is_some() || attempts <= 1 {
        return Ok((grid, path));
    }
    match tg.generate_solvable(gen_cfg, start, goal, attempts - 1) {
        Ok((grid, path)) => Ok((grid, Some(path))),
        Err(GenError::Unsolvable { .. }) => {
            log::warn!("no solvable grid in {attempts} attempts, keeping the first");
            Ok((grid, None))
        }
        Err(e) => Err(e.into()),
    }
}

/// Read a grid in the digit text format from `path`.
pub fn load_grid(path: &Path) -> Result<TerrainGrid, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TerrainGrid::parse(&text)?)
}

/// Execute one run described by `cfg`, printing the report to `out`.
pub fn run(cfg: &RunConfig, out: &mut impl Write) -> Result<Report, AppError> {
    cfg.validate()?;
    let start = cfg.start;

    let (grid, path, goal) = match &cfg.source {
        GridSource::Generate(gen_cfg) => {
            let goal = cfg
                .goal
                .unwrap_or_else(|| corner(Point::new(gen_cfg.width, gen_cfg.height)));
            let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
            log::info!("generating {}x{} grid with seed {seed}", gen_cfg.width, gen_cfg.height);
            let (grid, path) = generate(gen_cfg, seed, start, goal, cfg.attempts)?;
            (grid, path, goal)
        }
        GridSource::File(file) => {
            let grid = load_grid(file)?;
            log::info!("loaded {}x{} grid from {}", grid.width(), grid.height(), file.display());
            let goal = cfg.goal.unwrap_or_else(|| corner(grid.size()));
            let path = terrapath_paths::find_path(&grid, start, goal);
            (grid, path, goal)
        }
    };

    let mut robot = Robot::new(start, goal);
    let found = match path {
        Some(path) => {
            let moves = robot.follow(&grid, &path);
            if robot.at_goal() {
                log::info!("robot reached {goal} in {moves} moves");
            } else {
                log::error!("robot stopped at {} after {moves} moves", robot.position());
            }
            let cost = terrapath_paths::path_cost(&grid, &path)?;
            Some((path, cost))
        }
        None => None,
    };

    let reference_cost = cfg
        .verify
        .then(|| terrapath_paths::cost_map(&grid, start).at(goal));

    let report = Report {
        start,
        goal,
        found,
        reference_cost,
    };
    report.write(out, &grid, cfg.color)?;
    Ok(report)
}
