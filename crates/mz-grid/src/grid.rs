//! Rectangular wall/passage grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<Cell>`; `(row, col)` lives at
//! `row * cols + col`.  Every public accessor is bounds-checked and returns
//! `None` / `false` outside the grid, so callers can read neighbors without
//! guarding first.
//!
//! Only the generator in this crate writes cells.  Once a `Grid` leaves
//! [`carve_maze`][crate::carve_maze] (or [`Grid::parse`]) it is immutable.

use std::fmt;

use mz_core::{Direction, Position};

use crate::{GridError, GridResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Binary cell state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Wall,
    Passage,
}

impl Cell {
    pub const WALL_GLYPH: char = '#';
    pub const PASSAGE_GLYPH: char = '.';

    #[inline]
    pub fn is_passage(self) -> bool {
        self == Cell::Passage
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Wall    => Self::WALL_GLYPH,
            Cell::Passage => Self::PASSAGE_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            Self::WALL_GLYPH    => Some(Cell::Wall),
            Self::PASSAGE_GLYPH => Some(Cell::Passage),
            _ => None,
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A `rows × cols` array of [`Cell`]s.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// A grid that is wall everywhere.  The generator starts from this.
    pub fn walls(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Cell::Wall)
    }

    /// Parse `#` (wall) / `.` (passage) rows, one per line.
    ///
    /// Surrounding whitespace on each line and blank lines are ignored, so
    /// indented raw string literals work as-is.
    pub fn parse(text: &str) -> GridResult<Grid> {
        let mut cols = None;
        let mut cells = Vec::new();
        let mut rows = 0;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let start = cells.len();
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { row: rows, col, glyph })?;
                cells.push(cell);
            }
            let got = cells.len() - start;
            match cols {
                None => cols = Some(got),
                Some(expected) if expected != got => {
                    return Err(GridError::RaggedRow { row: rows, expected, got });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.ok_or(GridError::Empty)?;
        Ok(Grid { rows, cols, cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.within(self.rows, self.cols)
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// The cell at `pos`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.offset(pos)])
        } else {
            None
        }
    }

    /// `true` if `pos` is inside the grid and a passage.
    #[inline]
    pub fn is_passage(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_passage)
    }

    /// The in-bounds position `distance` cells from `pos` in `dir`.
    #[inline]
    pub fn neighbor(&self, pos: Position, dir: Direction, distance: usize) -> Option<Position> {
        pos.step(dir, distance).filter(|&p| self.contains(p))
    }

    /// Iterator over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterator over every passage position, row-major.
    pub fn passages(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_passage())
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
    }

    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passage()).count()
    }

    // ── Crate-private mutation (generator only) ───────────────────────────

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let i = self.offset(pos);
        self.cells[i] = cell;
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl fmt::Display for Grid {
    /// Renders the same glyphs [`Grid::parse`] accepts, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
