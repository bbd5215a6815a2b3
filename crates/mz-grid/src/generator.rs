//! Perfect-maze generation by randomized depth-first carving
//! ("recursive backtracking").
//!
//! # Algorithm
//!
//! ```text
//! carve(cell):
//!   mark cell Passage
//!   order = shuffle([Up, Down, Left, Right])
//!   for dir in order:
//!     next = cell + stride * dir
//!     if next in bounds and next is Wall:
//!       mark every cell strictly between cell and next Passage
//!       carve(next)
//! ```
//!
//! Each carve visits a previously untouched cell and opens exactly one
//! corridor back to its parent, so the passages form a tree.  With the
//! default stride of 2 a one-cell wall separates parallel corridors.
//!
//! The recursion is run on an explicit frame stack so large grids cannot
//! overflow the thread stack.  Frames shuffle their directions on entry and
//! resume where they left off after a child returns, which reproduces the
//! recursive visit order and random draw order exactly.
//!
//! Dimensions of the wrong parity leave the last row/column permanently wall;
//! that is accepted, not an error.

use mz_core::{Direction, Position, RandomSource};

use crate::{Cell, Grid};

/// One suspended `carve(cell)` invocation.
struct Frame {
    cell:  Position,
    order: [Direction; 4],
    next:  usize,
}

impl Frame {
    fn enter<S: RandomSource>(cell: Position, rng: &mut S) -> Self {
        let mut order = Direction::ALL;
        rng.shuffle(&mut order);
        Self { cell, order, next: 0 }
    }
}

/// Carve a perfect maze into a fresh `rows × cols` grid starting at `start`.
///
/// Identical `rng` state produces an identical grid.  `start` is always a
/// passage in the result.  If `start` is outside the grid or `stride` is 0
/// the all-wall grid is returned; `SimConfig::validate` rejects both.
pub fn carve_maze<S: RandomSource>(
    rows:   usize,
    cols:   usize,
    stride: usize,
    start:  Position,
    rng:    &mut S,
) -> Grid {
    let mut grid = Grid::walls(rows, cols);
    if stride == 0 || !grid.contains(start) {
        return grid;
    }

    grid.set(start, Cell::Passage);
    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.order.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(target) = grid.neighbor(cell, dir, stride) else {
            continue;
        };
        if grid.get(target) != Some(Cell::Wall) {
            continue;
        }

        for k in 1..stride {
            if let Some(between) = cell.step(dir, k) {
                grid.set(between, Cell::Passage);
            }
        }
        grid.set(target, Cell::Passage);
        stack.push(Frame::enter(target, rng));
    }

    grid
}
