//! A read-only grid of [`Terrain`] values.
//!
//! [`TerrainGrid`] is built once (programmatically, from rows, or from the
//! digit text format) and then only queried. Its two core queries are
//! [`TerrainGrid::is_valid`] and [`TerrainGrid::cost`], which together form
//! the contract the pathfinder consumes.

use std::fmt;
use std::slice::ChunksExact;

use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// Errors raised while building or querying a [`TerrainGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `cost` was asked about a point outside the grid.
    OutOfBounds(Point),
    /// `cost` was asked about an obstacle cell.
    Impassable(Point),
    /// Rows of different lengths were supplied.
    Ragged { row: usize, expected: usize, found: usize },
    /// No cells were supplied.
    Empty,
    /// A token in the text format is not a terrain code.
    InvalidCode { code: String, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "grid: point {p} is out of bounds"),
            Self::Impassable(p) => write!(f, "grid: point {p} is impassable"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::Empty => write!(f, "grid: no cells"),
            Self::InvalidCode { code, pos } => {
                write!(f, "grid: invalid terrain code \u{201c}{code}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size, row-major grid of [`Terrain`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl TerrainGrid {
    /// Create a new grid filled with [`Terrain::Road`].
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| Terrain::Road)
    }

    /// Create a grid by evaluating `f` at every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Terrain) -> Self {
        let bounds = Range::from_size(width, height);
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// Create a grid from rows of terrain, top row first.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            cells,
            bounds: Range::from_size(width as i32, height as i32),
        })
    }

    /// Parse the digit text format: one row per non-blank line, cells as
    /// whitespace-separated terrain codes (`1`, `2`, `8` or `9`).
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let y = rows.len() as i32;
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(x, tok)| {
                    tok.parse::<u8>()
                        .ok()
                        .and_then(Terrain::from_code)
                        .ok_or_else(|| GridError::InvalidCode {
                            code: tok.to_string(),
                            pos: Point::new(x as i32, y),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Return the grid with the cell at `p` replaced (builder). Points out
    /// of bounds are ignored.
    pub fn with_terrain(mut self, p: Point, t: Terrain) -> Self {
        if let Some(i) = self.index(p) {
            self.cells[i] = t;
        }
        self
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Get the terrain at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `(x, y)` lies inside the grid and is not an obstacle.
    ///
    /// Accepts any coordinates; out-of-range points are simply invalid.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.at(Point::new(x, y)).is_some_and(Terrain::is_passable)
    }

    /// Cost of entering `(x, y)`.
    ///
    /// Querying a point outside the grid or an obstacle is a contract
    /// violation and yields [`GridError::OutOfBounds`] or
    /// [`GridError::Impassable`]; guard with [`TerrainGrid::is_valid`].
    pub fn cost(&self, x: i32, y: i32) -> Result<u32, GridError> {
        let p = Point::new(x, y);
        let t = self.at(p).ok_or(GridError::OutOfBounds(p))?;
        t.cost().ok_or(GridError::Impassable(p))
    }

    /// Count how many cells hold the given terrain.
    pub fn count(&self, t: Terrain) -> usize {
        self.cells.iter().filter(|&&c| c == t).count()
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows of the grid, top row first.
    pub fn rows(&self) -> ChunksExact<'_, Terrain> {
        self.cells.chunks_exact(self.bounds.width().max(1) as usize)
    }
}

/// Writes the digit text format read by [`TerrainGrid::parse`]. A grid with
/// no cells writes nothing, which `parse` rejects as [`GridError::Empty`].
impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for t in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{t}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TerrainGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[Terrain]> = self.rows().collect();
        serde::Serialize::serialize(&rows, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TerrainGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<Terrain>> as serde::Deserialize>::deserialize(deserializer)?;
        TerrainGrid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
