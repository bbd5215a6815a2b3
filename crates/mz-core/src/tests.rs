//! Unit tests for mz-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod position {
    use crate::{Direction, Position};

    #[test]
    fn step_in_each_direction() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up, 1), Some(Position::new(2, 3)));
        assert_eq!(p.step(Direction::Down, 2), Some(Position::new(5, 3)));
        assert_eq!(p.step(Direction::Left, 3), Some(Position::new(3, 0)));
        assert_eq!(p.step(Direction::Right, 1), Some(Position::new(3, 4)));
    }

    #[test]
    fn step_below_zero_is_none() {
        let p = Position::new(0, 1);
        assert_eq!(p.step(Direction::Up, 1), None);
        assert_eq!(p.step(Direction::Left, 2), None);
    }

    #[test]
    fn within_bounds() {
        assert!(Position::new(4, 4).within(5, 5));
        assert!(!Position::new(5, 0).within(5, 5));
        assert!(!Position::new(0, 5).within(5, 5));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_and_ordering() {
        let t = Tick(10);
        assert_eq!(t.next(), Tick(11));
        assert!(Tick::ZERO < t);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config {
    use crate::{MzError, Position, SimConfig, TickMode};

    fn assert_invalid(cfg: SimConfig) {
        match cfg.validate() {
            Err(MzError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn reference_is_valid() {
        let cfg = SimConfig::reference();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.rows, cfg.cols), (30, 30));
        assert_eq!(cfg.agent_count, 3);
        assert!(!cfg.stop_when_all_done);
        assert_eq!(cfg.tick_mode, TickMode::Sequential);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_invalid(SimConfig { rows: 0, ..SimConfig::reference() });
        assert_invalid(SimConfig { cols: 0, ..SimConfig::reference() });
    }

    #[test]
    fn zero_agents_rejected() {
        assert_invalid(SimConfig { agent_count: 0, ..SimConfig::reference() });
    }

    #[test]
    fn zero_stride_rejected() {
        assert_invalid(SimConfig { carving_stride: 0, ..SimConfig::reference() });
    }

    #[test]
    fn out_of_bounds_start_or_end_rejected() {
        assert_invalid(SimConfig { start: Position::new(30, 0), ..SimConfig::reference() });
        assert_invalid(SimConfig { end: Position::new(0, 30), ..SimConfig::reference() });
    }

    #[test]
    fn identical_start_and_end_rejected() {
        let p = Position::new(2, 2);
        assert_invalid(SimConfig { start: p, end: p, ..SimConfig::reference() });
    }

    #[test]
    fn tick_limit() {
        let unlimited = SimConfig::reference();
        assert!(!unlimited.tick_limit_reached(u64::MAX));

        let capped = SimConfig { max_ticks: Some(10), ..SimConfig::reference() };
        assert!(!capped.tick_limit_reached(9));
        assert!(capped.tick_limit_reached(10));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RandomSource, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<usize> = (0..32).map(|_| a.pick_index(100)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick_index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(7, AgentId(0));
        let mut b = AgentRng::new(7, AgentId(1));
        let xs: Vec<usize> = (0..32).map(|_| a.pick_index(1_000_000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick_index(1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn pick_index_in_range() {
        let mut rng = AgentRng::new(1, AgentId(3));
        for _ in 0..1_000 {
            assert!(rng.pick_index(4) < 4);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(99);
        let mut v = [0, 1, 2, 3];
        rng.shuffle(&mut v);
        let mut sorted = v;
        sorted.sort();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }

    #[test]
    fn child_streams_are_reproducible_and_distinct() {
        let mut root_a = SimRng::new(5);
        let mut root_b = SimRng::new(5);
        let mut a = root_a.child(1);
        let mut b = root_b.child(1);
        let xs: Vec<usize> = (0..16).map(|_| a.pick_index(1 << 20)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.pick_index(1 << 20)).collect();
        assert_eq!(xs, ys);
        assert_ne!(root_a.next_seed(2), root_a.next_seed(2));
    }
}
