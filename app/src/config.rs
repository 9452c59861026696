//! Command-line arguments and the run configuration derived from them.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use terrapath_core::Point;
use terrapath_gen::{GenConfig, GenError};

/// Find the cheapest route across randomly generated weighted terrain.
#[derive(Parser, Debug)]
#[command(name = "terrapath", author, version, about, long_about = None)]
pub struct Args {
    /// Grid width (ignored with --map)
    #[arg(long, default_value_t = 10)]
    pub width: i32,

    /// Grid height (ignored with --map)
    #[arg(long, default_value_t = 10)]
    pub height: i32,

    /// Chance of each generated cell being an obstacle
    #[arg(long, default_value_t = 0.2)]
    pub obstacle_prob: f64,

    /// Seed for terrain generation (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as "x,y"
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub start: Point,

    /// Goal cell as "x,y" (defaults to the bottom-right corner)
    #[arg(long, value_parser = parse_point)]
    pub goal: Option<Point>,

    /// Load the grid from a file of terrain codes instead of generating one
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// How many grids to generate while looking for a solvable one
    #[arg(long, default_value_t = 1)]
    pub attempts: usize,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,

    /// Cross-check the A* cost against an exhaustive Dijkstra search
    #[arg(long)]
    pub verify: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a point written as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{s}\""))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in \"{s}\": {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in \"{s}\": {e}"))?;
    Ok(Point::new(x, y))
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GridSource {
    /// Generate a random grid.
    Generate(GenConfig),
    /// Read the digit text format from a file.
    File(PathBuf),
}

/// Everything one run of the binary needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: GridSource,
    pub seed: Option<u64>,
    pub start: Point,
    /// `None` means the bottom-right corner of the grid.
    pub goal: Option<Point>,
    pub attempts: usize,
    pub color: bool,
    pub verify: bool,
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: GridSource::Generate(GenConfig::default()),
            seed: None,
            start: Point::ZERO,
            goal: None,
            attempts: 1,
            color: true,
            verify: false,
            verbosity: 0,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let source = match args.map {
            Some(path) => GridSource::File(path),
            None => GridSource::Generate(GenConfig {
                width: args.width,
                height: args.height,
                obstacle_prob: args.obstacle_prob,
            }),
        };
        Self {
            source,
            seed: args.seed,
            start: args.start,
            goal: args.goal,
            attempts: args.attempts,
            color: !args.no_color,
            verify: args.verify,
            verbosity: args.verbose,
        }
    }
}

impl RunConfig {
    /// Reject configurations that cannot produce a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if let GridSource::Generate(cfg) = &self.source {
            cfg.validate().map_err(ConfigError::Gen)?;
        }
        Ok(())
    }

    /// Log filter matching the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Invalid run configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `--attempts 0`.
    NoAttempts,
    /// Generation parameters are out of range.
    Gen(GenError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAttempts => write!(f, "config: --attempts must be at least 1"),
            Self::Gen(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RunConfig {
        let mut argv = vec!["terrapath"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn defaults_match_run_config_default() {
        assert_eq!(parse(&[]), RunConfig::default());
    }

    #[test]
    fn all_flags() {
        let cfg = parse(&[
            "--width", "20", "--height", "8", "--obstacle-prob", "0.3", "--seed", "9",
            "--start", "1,2", "--goal", "19, 7", "--attempts", "5", "--no-color",
            "--verify", "-vv",
        ]);
        assert_eq!(
            cfg.source,
            GridSource::Generate(GenConfig {
                width: 20,
                height: 8,
                obstacle_prob: 0.3
            })
        );
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.start, Point::new(1, 2));
        assert_eq!(cfg.goal, Some(Point::new(19, 7)));
        assert_eq!(cfg.attempts, 5);
        assert!(!cfg.color);
        assert!(cfg.verify);
        assert_eq!(cfg.log_filter(), "debug");
    }

    #[test]
    fn map_overrides_generation() {
        let cfg = parse(&["--map", "fixtures/maze.txt", "--width", "3"]);
        assert_eq!(cfg.source, GridSource::File(PathBuf::from("fixtures/maze.txt")));
    }

    #[test]
    fn point_parsing() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1 , 2"), Ok(Point::new(-1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
        let argv = ["terrapath", "--start", "1;2"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn validation() {
        assert!(RunConfig::default().validate().is_ok());
        let no_attempts = RunConfig {
            attempts: 0,
            ..RunConfig::default()
        };
        assert_eq!(no_attempts.validate(), Err(ConfigError::NoAttempts));
        let bad_gen = parse(&["--obstacle-prob", "2"]);
        assert_eq!(
            bad_gen.validate(),
            Err(ConfigError::Gen(GenError::InvalidProbability(2.0)))
        );
        let file = RunConfig {
            source: GridSource::File(PathBuf::from("x")),
            ..RunConfig::default()
        };
        assert!(file.validate().is_ok());
    }
}
