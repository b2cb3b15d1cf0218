//! Unit tests for sq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, QueueId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(QueueId(9) > QueueId(0));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(QueueId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(QueueId(3).to_string(), "QueueId(3)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn left_moves_toward_exit() {
        assert_eq!(Cell::new(5, 2).left(), Some(Cell::new(4, 2)));
        assert_eq!(Cell::new(1, 9).left(), Some(Cell::new(0, 9)));
    }

    #[test]
    fn left_stops_at_column_zero() {
        assert_eq!(Cell::new(0, 4).left(), None);
    }

    #[test]
    fn bounds_check() {
        assert!(Cell::new(9, 9).within(10, 10));
        assert!(!Cell::new(10, 0).within(10, 10));
        assert!(!Cell::new(0, 10).within(10, 10));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn ten_by_ten_defaults() {
        let cfg = SimConfig::ten_by_ten(100, 50, 42);
        assert_eq!(cfg.grid_width, 10);
        assert_eq!(cfg.grid_height, 10);
        assert_eq!(cfg.queue_count(), 10);
        assert_eq!(cfg.end_tick(), Tick(50));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        let mut cfg = SimConfig::ten_by_ten(10, 10, 0);
        cfg.grid_width = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_rebalance_interval_rejected() {
        let mut cfg = SimConfig::ten_by_ten(10, 10, 0);
        cfg.rebalance_every = 0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge_from_parent() {
        let mut parent = SimRng::new(1);
        let mut child = parent.child(7);
        let a: u64 = parent.gen_range(0..u64::MAX);
        let b: u64 = child.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u16..10);
            assert!(v < 10);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
