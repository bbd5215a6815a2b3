//! Unit tests for mz-grid.

use mz_core::{Position, RandomSource, SimRng};

use crate::{Cell, Grid, carve_maze, is_connected, is_perfect, passage_edge_count, reachable_from};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A source that never permutes and always picks the first option, so the
/// carving order is exactly `Direction::ALL` (up, down, left, right).
struct InOrder;

impl RandomSource for InOrder {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

fn origin() -> Position {
    Position::new(0, 0)
}

// ── Grid model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::GridError;
    use mz_core::Direction;

    #[test]
    fn walls_grid_has_no_passages() {
        let g = Grid::walls(4, 6);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 6);
        assert_eq!(g.passage_count(), 0);
        assert_eq!(g.get(Position::new(3, 5)), Some(Cell::Wall));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let g = Grid::filled(3, 3, Cell::Passage);
        assert_eq!(g.get(Position::new(3, 0)), None);
        assert_eq!(g.get(Position::new(0, 3)), None);
        assert!(!g.is_passage(Position::new(9, 9)));
    }

    #[test]
    fn rows_agree_with_cell_reads() {
        let g = Grid::parse("#..\n.#.\n..#\n.##").unwrap();
        let rows: Vec<&[Cell]> = g.iter_rows().collect();
        assert_eq!(rows.len(), 4);
        for (r, cells) in rows.iter().enumerate() {
            assert_eq!(cells.len(), 3);
            for (c, &cell) in cells.iter().enumerate() {
                assert_eq!(g.get(Position::new(r, c)), Some(cell));
            }
        }
        assert_eq!(rows[3], &[Cell::Passage, Cell::Wall, Cell::Wall][..]);
    }

    #[test]
    fn neighbor_respects_bounds() {
        let g = Grid::walls(3, 3);
        let corner = Position::new(0, 0);
        assert_eq!(g.neighbor(corner, Direction::Up, 1), None);
        assert_eq!(g.neighbor(corner, Direction::Down, 2), Some(Position::new(2, 0)));
        assert_eq!(g.neighbor(corner, Direction::Right, 3), None);
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "#.#\n...\n#.#\n";
        let g = Grid::parse(text).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert!(g.is_passage(Position::new(1, 0)));
        assert!(!g.is_passage(Position::new(0, 0)));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_ignores_indentation_and_blank_lines() {
        let g = Grid::parse(
            "
            ..
            #.
            ",
        )
        .unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.passage_count(), 3);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::parse("  \n"), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("..\n...\n"),
            Err(GridError::RaggedRow { row: 1, expected: 2, got: 3 })
        );
        assert_eq!(
            Grid::parse(".x\n"),
            Err(GridError::UnknownGlyph { row: 0, col: 1, glyph: 'x' })
        );
    }

    #[test]
    fn passages_iterates_row_major() {
        let g = Grid::parse("#.\n.#\n").unwrap();
        let cells: Vec<Position> = g.passages().collect();
        assert_eq!(cells, vec![Position::new(0, 1), Position::new(1, 0)]);
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn fixed_order_five_by_five_is_known_maze() {
        // Carving strictly up, down, left, right from (0, 0):
        // down the first column, along the bottom to (4, 2), up the middle
        // column to (0, 2), right to (0, 4), then down the last column.
        let g = carve_maze(5, 5, 2, origin(), &mut InOrder);
        let expected = Grid::parse(
            "
            .#...
            .#.#.
            .#.#.
            .#.#.
            ...#.
            ",
        )
        .unwrap();
        assert_eq!(g, expected);
        assert!(is_perfect(&g, origin()));
    }

    #[test]
    fn start_and_far_corner_carved_on_odd_dimensions() {
        let mut rng = SimRng::new(5);
        let g = carve_maze(5, 5, 2, origin(), &mut rng);
        assert!(g.is_passage(origin()));
        assert!(g.is_passage(Position::new(4, 4)));
        assert!(is_connected(&g, origin(), Position::new(4, 4)));
    }

    #[test]
    fn perfect_for_many_seeds_and_sizes() {
        for seed in 0..20 {
            for (rows, cols) in [(5, 5), (11, 7), (21, 21), (31, 31)] {
                let mut rng = SimRng::new(seed);
                let g = carve_maze(rows, cols, 2, origin(), &mut rng);
                assert!(is_perfect(&g, origin()), "seed {seed}, {rows}×{cols}:\n{g}");
            }
        }
    }

    #[test]
    fn every_even_cell_is_carved() {
        let mut rng = SimRng::new(11);
        let g = carve_maze(9, 9, 2, origin(), &mut rng);
        for row in (0..9).step_by(2) {
            for col in (0..9).step_by(2) {
                assert!(g.is_passage(Position::new(row, col)), "({row}, {col})");
            }
        }
        // 25 carved cells joined by 24 corridors.
        assert_eq!(g.passage_count(), 25 + 24);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = carve_maze(21, 21, 2, origin(), &mut SimRng::new(1234));
        let b = carve_maze(21, 21, 2, origin(), &mut SimRng::new(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = carve_maze(21, 21, 2, origin(), &mut SimRng::new(1));
        let b = carve_maze(21, 21, 2, origin(), &mut SimRng::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn off_parity_border_stays_wall() {
        let mut rng = SimRng::new(3);
        let g = carve_maze(30, 30, 2, origin(), &mut rng);
        for i in 0..30 {
            assert!(!g.is_passage(Position::new(29, i)));
            assert!(!g.is_passage(Position::new(i, 29)));
        }
        assert!(!g.is_passage(Position::new(29, 29)));
        assert!(g.is_passage(Position::new(28, 28)));
        assert!(is_perfect(&g, origin()));
    }

    #[test]
    fn wider_stride_still_perfect() {
        let mut rng = SimRng::new(8);
        let g = carve_maze(10, 10, 3, origin(), &mut rng);
        assert!(is_perfect(&g, origin()));
        assert!(g.is_passage(Position::new(9, 9)));
    }

    #[test]
    fn interior_start_carves_whole_lattice() {
        let start = Position::new(4, 2);
        let mut rng = SimRng::new(21);
        let g = carve_maze(9, 9, 2, start, &mut rng);
        assert!(is_perfect(&g, start));
        assert!(g.is_passage(Position::new(0, 0)));
    }

    #[test]
    fn single_cell_grid() {
        let g = carve_maze(1, 1, 2, origin(), &mut InOrder);
        assert_eq!(g.passage_count(), 1);
        assert!(is_perfect(&g, origin()));
    }

    #[test]
    fn start_outside_grid_yields_walls() {
        let g = carve_maze(3, 3, 2, Position::new(5, 5), &mut InOrder);
        assert_eq!(g.passage_count(), 0);
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod analysis_tests {
    use super::*;

    #[test]
    fn reachability_stops_at_walls() {
        let g = Grid::parse(
            "
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let reach = reachable_from(&g, origin());
        assert_eq!(reach.len(), 4);
        assert!(reach.contains(Position::new(1, 1)));
        assert!(!reach.contains(Position::new(0, 3)));
        assert!(!is_connected(&g, origin(), Position::new(1, 4)));
    }

    #[test]
    fn reachability_from_wall_is_empty() {
        let g = Grid::parse("#.\n").unwrap();
        assert!(reachable_from(&g, origin()).is_empty());
    }

    #[test]
    fn cycle_is_not_perfect() {
        let g = Grid::parse("..\n..\n").unwrap();
        assert_eq!(passage_edge_count(&g), 4);
        assert!(!is_perfect(&g, origin()));
    }

    #[test]
    fn disconnected_is_not_perfect() {
        let g = Grid::parse(".#.\n").unwrap();
        assert!(!is_perfect(&g, origin()));
    }

    #[test]
    fn corridor_is_perfect() {
        let g = Grid::parse("...\n").unwrap();
        assert_eq!(passage_edge_count(&g), 2);
        assert!(is_perfect(&g, origin()));
    }
}
