//! Console rendering: legend, coloured grid and path report.
//!
//! The colour palette lives here and only here; the search crates know
//! nothing about presentation.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use terrapath_core::{Point, Terrain, TerrainGrid};

/// Foreground colour of each terrain kind.
pub const fn terrain_color(t: Terrain) -> Color {
    match t {
        Terrain::Road => Color::Green,
        Terrain::Hill => Color::Yellow,
        Terrain::Water => Color::Blue,
        Terrain::Obstacle => Color::Red,
    }
}

/// Path cells are drawn bold in this colour.
pub const PATH_COLOR: Color = Color::White;

/// Marker used for path cells when colours are disabled.
pub const PATH_MARK: char = '*';

fn write_code(w: &mut impl Write, text: impl std::fmt::Display, fg: Color, bold: bool) -> io::Result<()> {
    if bold {
        queue!(w, SetAttribute(Attribute::Bold))?;
    }
    queue!(w, SetForegroundColor(fg), Print(text), ResetColor)?;
    if bold {
        queue!(w, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Write the terrain legend.
pub fn render_legend(w: &mut impl Write, color: bool) -> io::Result<()> {
    writeln!(w, "\nLEGEND:")?;
    for t in Terrain::ALL {
        if color {
            write_code(w, t, terrain_color(t), false)?;
        } else {
            write!(w, "{t}")?;
        }
        match t.cost() {
            Some(c) => writeln!(w, " = {} (cost {c})", t.name())?,
            None => writeln!(w, " = {} (impassable)", t.name())?,
        }
    }
    Ok(())
}

/// Write the grid with `path` highlighted.
///
/// With colours, every cell is drawn in its terrain colour and path cells in
/// bold [`PATH_COLOR`]; without, path cells are replaced by [`PATH_MARK`].
pub fn render_path_grid(
    w: &mut impl Write,
    grid: &TerrainGrid,
    path: &[Point],
    color: bool,
) -> io::Result<()> {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    writeln!(w, "\nGRID WITH PATH:\n")?;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let Some(t) = grid.at(p) else {
                continue;
            };
            let highlighted = on_path.contains(&p);
            match (color, highlighted) {
                (true, true) => write_code(w, t, PATH_COLOR, true)?,
                (true, false) => write_code(w, t, terrain_color(t), false)?,
                (false, true) => write!(w, "{PATH_MARK}")?,
                (false, false) => write!(w, "{t}")?,
            }
            write!(w, " ")?;
        }
        writeln!(w)?;
    }
    w.flush()
}

/// Write the bare grid, one row of terrain codes per line, no colours.
pub fn render_plain_grid(w: &mut impl Write, grid: &TerrainGrid) -> io::Result<()> {
    write!(w, "{grid}")?;
    w.flush()
}

/// Outcome of one search, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub start: Point,
    pub goal: Point,
    /// Path with its total cost, or `None` if no path exists.
    pub found: Option<(Vec<Point>, u32)>,
    /// Cost of the cheapest route according to an exhaustive search, when
    /// cross-checking was requested.
    pub reference_cost: Option<Option<u32>>,
}

impl Report {
    /// Write the full report: legend, endpoints, path summary and grid.
    pub fn write(&self, w: &mut impl Write, grid: &TerrainGrid, color: bool) -> io::Result<()> {
        render_legend(w, color)?;
        writeln!(w, "\nStart: {}", self.start)?;
        writeln!(w, "Goal: {}", self.goal)?;

        match &self.found {
            Some((path, cost)) => {
                writeln!(w, "\nPath found (row = y, col = x):")?;
                for p in path {
                    write!(w, "({}, {}) ", p.y, p.x)?;
                }
                writeln!(w)?;
                writeln!(w, "Total cost: {cost}")?;
                writeln!(w, "Steps: {}", terrapath_paths::path_steps(path))?;
                self.write_check(w, Some(*cost))?;
                render_path_grid(w, grid, path, color)
            }
            None => {
                writeln!(w, "\nNo path found.")?;
                self.write_check(w, None)?;
                render_plain_grid(w, grid)
            }
        }
    }

    fn write_check(&self, w: &mut impl Write, cost: Option<u32>) -> io::Result<()> {
        let Some(reference) = self.reference_cost else {
            return Ok(());
        };
        let verdict = if reference == cost { "agrees" } else { "DISAGREES" };
        match reference {
            Some(c) => writeln!(w, "Dijkstra check: cheapest cost {c} ({verdict})"),
            None => writeln!(w, "Dijkstra check: goal unreachable ({verdict})"),
        }
    }
}
