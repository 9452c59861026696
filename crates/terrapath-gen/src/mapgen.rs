//! Random terrain generation.
//!
//! Every cell independently becomes an [`Terrain::Obstacle`] with a fixed
//! probability, otherwise one of the passable terrains chosen uniformly.
//! The random source is injected, so a seeded RNG reproduces the same grid.

use std::fmt;

use rand::{Rng, RngExt};
use terrapath_core::{Point, Terrain, TerrainGrid};

/// Parameters for one generated grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
    /// Chance (0.0–1.0) of each cell being an obstacle.
    pub obstacle_prob: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            obstacle_prob: 0.2,
        }
    }
}

impl GenConfig {
    /// Check that the size is positive and the probability lies in [0, 1].
    pub fn validate(&self) -> Result<(), GenError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GenError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.obstacle_prob) {
            return Err(GenError::InvalidProbability(self.obstacle_prob));
        }
        Ok(())
    }
}

/// Errors that can occur while generating terrain.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// Obstacle probability outside [0, 1] (or NaN).
    InvalidProbability(f64),
    /// No generated grid connected start and goal.
    Unsolvable { attempts: usize },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "mapgen: invalid grid size {width}x{height}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "mapgen: obstacle probability {p} is not in [0, 1]")
            }
            Self::Unsolvable { attempts } => {
                write!(f, "mapgen: no solvable grid after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Terrain generator driven by an injected random source.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator using `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a grid according to `cfg`.
    ///
    /// Every point of `keep_clear` that lies inside the grid is forced to
    /// [`Terrain::Road`], so start and goal cells are never obstacles.
    pub fn generate(
        &mut self,
        cfg: &GenConfig,
        keep_clear: &[Point],
    ) -> Result<TerrainGrid, GenError> {
        cfg.validate()?;
        let rng = &mut self.rng;
        let grid = TerrainGrid::from_fn(cfg.width, cfg.height, |_| {
            let r: f64 = rng.random();
            if r < cfg.obstacle_prob {
                Terrain::Obstacle
            } else {
                Terrain::PASSABLE[rng.random_range(0..Terrain::PASSABLE.len())]
            }
        });
        Ok(keep_clear
            .iter()
            .fold(grid, |g, &p| g.with_terrain(p, Terrain::Road)))
    }

    /// Generate grids until one connects `start` and `goal`, trying at most
    /// `attempts` times.
    ///
    /// Returns the grid together with the A* path found on it.
    pub fn generate_solvable(
        &mut self,
        cfg: &GenConfig,
        start: Point,
        goal: Point,
        attempts: usize,
    ) -> Result<(TerrainGrid, Vec<Point>), GenError> {
        for attempt in 1..=attempts {
            let grid = self.generate(cfg, &[start, goal])?;
            if let Some(path) = terrapath_paths::find_path(&grid, start, goal) {
                log::debug!("mapgen: solvable grid on attempt {attempt}");
                return Ok((grid, path));
            }
            log::trace!("mapgen: attempt {attempt} has no path from {start} to {goal}");
        }
        Err(GenError::Unsolvable { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> TerrainGen<StdRng> {
        TerrainGen::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn default_config_matches_classic_board() {
        let cfg = GenConfig::default();
        assert_eq!((cfg.width, cfg.height), (10, 10));
        assert_eq!(cfg.obstacle_prob, 0.2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn same_seed_same_grid() {
        let cfg = GenConfig::default();
        let a = seeded(42).generate(&cfg, &[]).unwrap();
        let b = seeded(42).generate(&cfg, &[]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), Point::new(10, 10));
    }

    #[test]
    fn thread_rng_generates_full_board() {
        let cfg = GenConfig {
            width: 7,
            height: 5,
            obstacle_prob: 0.5,
        };
        let g = TerrainGen::with_rng(rand::rng())
            .generate(&cfg, &[Point::new(0, 0)])
            .unwrap();
        assert_eq!(g.size(), Point::new(7, 5));
        assert_eq!(g.at(Point::new(0, 0)), Some(Terrain::Road));
        let total: usize = Terrain::ALL.iter().map(|&t| g.count(t)).sum();
        assert_eq!(total, 35);
    }

    #[test]
    fn keep_clear_cells_are_road() {
        let cfg = GenConfig {
            obstacle_prob: 1.0,
            ..GenConfig::default()
        };
        let clear = [Point::new(0, 0), Point::new(9, 9), Point::new(40, 40)];
        let g = seeded(1).generate(&cfg, &clear).unwrap();
        assert_eq!(g.at(Point::new(0, 0)), Some(Terrain::Road));
        assert_eq!(g.at(Point::new(9, 9)), Some(Terrain::Road));
        assert_eq!(g.count(Terrain::Obstacle), 98);
    }

    #[test]
    fn zero_probability_has_no_obstacles() {
        let cfg = GenConfig {
            width: 20,
            height: 15,
            obstacle_prob: 0.0,
        };
        let g = seeded(3).generate(&cfg, &[]).unwrap();
        assert_eq!(g.count(Terrain::Obstacle), 0);
        // All three passable kinds show up on a board this size.
        for t in Terrain::PASSABLE {
            assert!(g.count(t) > 0, "{t:?} missing");
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let mut tg = seeded(0);
        let bad_size = GenConfig {
            width: 0,
            ..GenConfig::default()
        };
        assert_eq!(
            tg.generate(&bad_size, &[]),
            Err(GenError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        let bad_prob = GenConfig {
            obstacle_prob: 1.5,
            ..GenConfig::default()
        };
        assert_eq!(
            tg.generate(&bad_prob, &[]),
            Err(GenError::InvalidProbability(1.5))
        );
        let nan = GenConfig {
            obstacle_prob: f64::NAN,
            ..GenConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn solvable_grid_comes_with_its_path() {
        let cfg = GenConfig::default();
        let (start, goal) = (Point::new(0, 0), Point::new(9, 9));
        let (grid, path) = seeded(11).generate_solvable(&cfg, start, goal, 50).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(terrapath_paths::is_connected(&grid, &path));
    }

    #[test]
    fn unsolvable_after_all_attempts() {
        let cfg = GenConfig {
            obstacle_prob: 1.0,
            ..GenConfig::default()
        };
        let res = seeded(5).generate_solvable(&cfg, Point::new(0, 0), Point::new(9, 9), 3);
        assert_eq!(res.unwrap_err(), GenError::Unsolvable { attempts: 3 });
    }
}
