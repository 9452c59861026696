//! A single agent that moves one cardinal step at a time.

use std::fmt;
use std::str::FromStr;

use terrapath_core::{Point, TerrainGrid};

/// One of the four allowed moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset of the move (Y grows down).
    pub const fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// The move that takes `from` to `to`, if they are adjacent.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        match (d.x, d.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionError(pub String);

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for DirectionError {}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(DirectionError(s.to_string())),
        }
    }
}

/// An agent travelling from a start cell toward a goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pos: Point,
    goal: Point,
}

impl Robot {
    pub fn new(start: Point, goal: Point) -> Self {
        Self { pos: start, goal }
    }

    /// Robot at `start` heading for the bottom-right corner of `grid`.
    pub fn with_default_goal(start: Point, grid: &TerrainGrid) -> Self {
        Self::new(start, Point::new(grid.width() - 1, grid.height() - 1))
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn at_goal(&self) -> bool {
        self.pos == self.goal
    }

    /// Move one step in `dir` if the destination is valid on `grid`.
    /// Returns whether the robot moved.
    pub fn step(&mut self, grid: &TerrainGrid, dir: Direction) -> bool {
        let next = self.pos + dir.offset();
        if grid.is_valid(next.x, next.y) {
            self.pos = next;
            true
        } else {
            false
        }
    }

    /// Drive along `path`, which must start at the current position.
    ///
    /// Stops at the first move that is not a valid cardinal step and returns
    /// the number of moves made.
    pub fn follow(&mut self, grid: &TerrainGrid, path: &[Point]) -> usize {
        if path.first() != Some(&self.pos) {
            return 0;
        }
        let mut moves = 0;
        for w in path.windows(2) {
            let Some(dir) = Direction::between(w[0], w[1]) else {
                log::warn!("robot: {} -> {} is not a single move", w[0], w[1]);
                break;
            };
            if !self.step(grid, dir) {
                log::warn!("robot: blocked moving {dir:?} from {}", self.pos);
                break;
            }
            moves += 1;
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TerrainGrid {
        TerrainGrid::parse("1 9 1\n1 1 1\n").unwrap()
    }

    #[test]
    fn parse_directions() {
        assert_eq!("up".parse(), Ok(Direction::Up));
        assert_eq!("Down".parse(), Ok(Direction::Down));
        assert_eq!(" left ".parse(), Ok(Direction::Left));
        assert_eq!("RIGHT".parse(), Ok(Direction::Right));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(DirectionError("north".into()))
        );
    }

    #[test]
    fn between_inverts_offset() {
        let p = Point::new(4, 4);
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(Direction::between(p, p + d.offset()), Some(d));
        }
        assert_eq!(Direction::between(p, Point::new(5, 5)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn default_goal_is_bottom_right() {
        let r = Robot::with_default_goal(Point::ZERO, &grid());
        assert_eq!(r.position(), Point::ZERO);
        assert_eq!(r.goal(), Point::new(2, 1));
        assert!(!r.at_goal());
    }

    #[test]
    fn step_only_onto_valid_cells() {
        let g = grid();
        let mut r = Robot::new(Point::ZERO, Point::new(2, 1));
        assert!(!r.step(&g, Direction::Up));
        assert!(!r.step(&g, Direction::Left));
        assert!(!r.step(&g, Direction::Right)); // obstacle
        assert_eq!(r.position(), Point::ZERO);
        assert!(r.step(&g, Direction::Down));
        assert!(r.step(&g, Direction::Right));
        assert!(r.step(&g, Direction::Right));
        assert!(r.at_goal());
    }

    #[test]
    fn follow_a_found_path() {
        let g = grid();
        let mut r = Robot::with_default_goal(Point::ZERO, &g);
        let path = terrapath_paths::find_path(&g, r.position(), r.goal()).unwrap();
        assert_eq!(r.follow(&g, &path), path.len() - 1);
        assert!(r.at_goal());
    }

    #[test]
    fn follow_stops_at_bad_moves() {
        let g = grid();
        let mut r = Robot::new(Point::ZERO, Point::new(2, 0));
        let through_wall = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(r.follow(&g, &through_wall), 0);
        let jump = [Point::new(0, 0), Point::new(0, 1), Point::new(2, 1)];
        assert_eq!(r.follow(&g, &jump), 1);
        assert_eq!(r.position(), Point::new(0, 1));
        // Path not starting at the robot.
        assert_eq!(r.follow(&g, &[Point::new(2, 1)]), 0);
    }
}
