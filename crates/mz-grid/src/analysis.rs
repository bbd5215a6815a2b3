//! Structural diagnostics over a grid's passage graph.
//!
//! The simulation itself never needs these: agents only sense their four
//! neighbors.  They exist so hosts can detect a degenerate maze (end not
//! reachable from start) and so tests can check the perfect-maze property.

use std::collections::VecDeque;

use mz_core::{Direction, Position};

use crate::Grid;

/// Passage cells reachable from some origin under 4-connectivity.
#[derive(Clone, Debug)]
pub struct Reachability {
    cols:  usize,
    mask:  Vec<bool>,
    count: usize,
}

impl Reachability {
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.cols
            && self.mask.get(pos.row * self.cols + pos.col).copied().unwrap_or(false)
    }

    /// Number of reachable cells (including the origin).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Breadth-first flood from `start` over passage cells.
///
/// Empty if `start` is not a passage.
pub fn reachable_from(grid: &Grid, start: Position) -> Reachability {
    let cols = grid.cols();
    let mut reach = Reachability {
        cols,
        mask:  vec![false; grid.rows() * cols],
        count: 0,
    };
    if !grid.is_passage(start) {
        return reach;
    }

    let mut queue = VecDeque::from([start]);
    reach.mask[start.row * cols + start.col] = true;
    reach.count = 1;

    while let Some(cell) = queue.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(cell, dir, 1) else { continue };
            let i = next.row * cols + next.col;
            if grid.is_passage(next) && !reach.mask[i] {
                reach.mask[i] = true;
                reach.count += 1;
                queue.push_back(next);
            }
        }
    }
    reach
}

/// `true` if a passage path joins `a` and `b`.
pub fn is_connected(grid: &Grid, a: Position, b: Position) -> bool {
    reachable_from(grid, a).contains(b)
}

/// Number of 4-adjacent passage pairs.  Each unordered pair counts once.
pub fn passage_edge_count(grid: &Grid) -> usize {
    grid.passages()
        .map(|p| {
            [Direction::Down, Direction::Right]
                .into_iter()
                .filter(|&d| grid.neighbor(p, d, 1).is_some_and(|n| grid.is_passage(n)))
                .count()
        })
        .sum()
}

/// `true` if the passage cells form a single tree containing `start`:
/// every passage is reachable from `start` and there are no cycles
/// (edges = nodes − 1).
pub fn is_perfect(grid: &Grid, start: Position) -> bool {
    let reach = reachable_from(grid, start);
    let nodes = grid.passage_count();
    !reach.is_empty() && reach.len() == nodes && passage_edge_count(grid) == nodes - 1
}
