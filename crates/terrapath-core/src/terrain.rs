//! Terrain types and helpers.

use std::fmt;

/// The terrain label of a single grid cell.
///
/// Every passable terrain carries a fixed cost for *entering* the cell.
/// Each variant also has a one-digit code (equal to its cost for passable
/// terrain, `9` for obstacles) used by the text grid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Road,
    Hill,
    Water,
    Obstacle,
}

impl Terrain {
    /// All terrain kinds, in code order.
    pub const ALL: [Terrain; 4] = [Terrain::Road, Terrain::Hill, Terrain::Water, Terrain::Obstacle];

    /// Passable terrain kinds.
    pub const PASSABLE: [Terrain; 3] = [Terrain::Road, Terrain::Hill, Terrain::Water];

    /// Entry cost, or `None` for impassable terrain.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            Terrain::Road => Some(1),
            Terrain::Hill => Some(2),
            Terrain::Water => Some(8),
            Terrain::Obstacle => None,
        }
    }

    /// Whether an agent may enter a cell of this terrain.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Obstacle)
    }

    /// Digit code used by the text grid format.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Terrain::Road => 1,
            Terrain::Hill => 2,
            Terrain::Water => 8,
            Terrain::Obstacle => 9,
        }
    }

    /// Inverse of [`Terrain::code`].
    #[inline]
    pub const fn from_code(code: u8) -> Option<Terrain> {
        match code {
            1 => Some(Terrain::Road),
            2 => Some(Terrain::Hill),
            8 => Some(Terrain::Water),
            9 => Some(Terrain::Obstacle),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Road => "Road",
            Terrain::Hill => "Hill",
            Terrain::Water => "Water",
            Terrain::Obstacle => "Obstacle",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
