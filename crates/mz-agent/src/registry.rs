//! The shared dead-end registry.

use mz_core::Position;

use crate::PositionSet;

/// Cells some agent found to lead nowhere useful.
///
/// One registry is shared by every agent in a run.  It is append-only:
/// there is no removal API, so its size never decreases.  Membership bars a
/// cell from being chosen as a move target by *any* agent, including the one
/// that reported it.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DeadEndRegistry {
    cells: PositionSet,
}

impl DeadEndRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Record `pos` as a dead end.  Returns `true` if it was not already known.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Unordered iterator over all dead ends.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// All dead ends in row-major order, for stable output.
    pub fn sorted(&self) -> Vec<Position> {
        let mut cells: Vec<Position> = self.iter().collect();
        cells.sort_unstable();
        cells
    }
}

impl Extend<Position> for DeadEndRegistry {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl FromIterator<Position> for DeadEndRegistry {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
