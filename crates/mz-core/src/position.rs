//! Grid coordinates and the four axis-aligned directions.

use std::fmt;

/// A `(row, col)` grid coordinate.
///
/// When it names a passage cell it doubles as a graph node identifier, so it
/// is `Copy + Hash + Ord` like the ids in [`crate::ids`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if `row < rows && col < cols`.
    #[inline]
    pub fn within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// The position `distance` cells away in `dir`.
    ///
    /// Returns `None` if the step would go below row/col 0.  Upper bounds are
    /// the grid's business; see [`Position::within`].
    #[inline]
    pub fn step(self, dir: Direction, distance: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        Some(Position { row, col })
    }
}

#[inline]
fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0  => Some(base),
        1  => base.checked_add(distance),
        _  => base.checked_sub(distance),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor enumeration order used by generation and navigation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` unit step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up    => (-1, 0),
            Direction::Down  => (1, 0),
            Direction::Left  => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}
