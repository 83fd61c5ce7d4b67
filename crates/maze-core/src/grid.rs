//! The [`Grid`] type — an immutable table of marker characters.
//!
//! Rows may differ in length. Every bounds check uses the addressed row's own
//! length, so a cell past the end of a short row is simply out of bounds.

use std::fmt;
use std::str::FromStr;

use crate::geom::Cell;
use crate::markers::Markers;

/// A maze read from text, one `char` per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<char>>,
    markers: Markers,
}

impl Grid {
    /// Parse a grid from a multi-line string.
    ///
    /// Each line is trimmed and lines left empty are dropped before rows are
    /// numbered, so indentation and blank lines around the maze are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        if rows.is_empty() {
            return Err(GridError::Malformed {
                reason: "no rows".to_string(),
            });
        }
        Ok(Self {
            rows,
            markers: Markers::default(),
        })
    }

    /// Build a grid from rows that are already split into cells.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Malformed {
                reason: "no rows".to_string(),
            });
        }
        if let Some(i) = rows.iter().position(Vec::is_empty) {
            return Err(GridError::Malformed {
                reason: format!("row {i} is empty"),
            });
        }
        Ok(Self {
            rows,
            markers: Markers::default(),
        })
    }

    /// Replace the marker set used to interpret cells.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// The marker set in use.
    #[inline]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or 0 when there is no such row.
    #[inline]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Whether `cell` addresses an existing character.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows.len() && cell.column < self.rows[cell.row].len()
    }

    /// The character at `cell`, or `None` if out of bounds.
    #[inline]
    pub fn marker_at(&self, cell: Cell) -> Option<char> {
        self.rows.get(cell.row)?.get(cell.column).copied()
    }

    /// Whether `cell` holds the wall marker. Out-of-bounds cells are not
    /// walls; check [`in_bounds`](Self::in_bounds) first.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.marker_at(cell) == Some(self.markers.wall)
    }

    /// First cell holding `marker`, scanning rows top to bottom and each row
    /// left to right.
    pub fn locate(&self, marker: char) -> Result<Cell, GridError> {
        self.cells()
            .find(|&(_, ch)| ch == marker)
            .map(|(cell, _)| cell)
            .ok_or(GridError::MarkerNotFound(marker))
    }

    /// Locate the start and goal markers, in that order.
    pub fn locate_endpoints(&self) -> Result<(Cell, Cell), GridError> {
        let start = self.locate(self.markers.start)?;
        let goal = self.locate(self.markers.goal)?;
        Ok((start, goal))
    }

    /// Iterate over `(Cell, char)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &ch)| (Cell::new(r, c), ch))
        })
    }

    /// Render the grid with every cell of `route` drawn as `mark`. Start and
    /// goal markers are left in place so the endpoints stay visible.
    pub fn render_route(&self, route: &[Cell], mark: char) -> String {
        let mut rows = self.rows.clone();
        for &cell in route {
            if let Some(ch) = rows.get_mut(cell.row).and_then(|r| r.get_mut(cell.column)) {
                if *ch != self.markers.start && *ch != self.markers.goal {
                    *ch = mark;
                }
            }
        }
        let mut out = String::new();
        for row in &rows {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur while building or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The text held no rows, or a row had no cells.
    Malformed { reason: String },
    /// No cell carries the requested marker.
    MarkerNotFound(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed grid: {reason}"),
            Self::MarkerNotFound(ch) => {
                write!(f, "marker \u{201c}{ch}\u{201d} not found in grid")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S.#\n..G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
