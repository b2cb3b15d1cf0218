//! Integration tests for sq-model.

use sq_core::{AgentId, Cell, QueueId, SimConfig, SimRng};
use sq_grid::MultiGrid;

use crate::{
    ExitRule, FixedShift, HalfForward, NoopObserver, QueueAction, QueueModel, QueueModelBuilder,
    RandomSpread, RebalancePolicy, TickStats,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(agent_count: usize, total_ticks: u64) -> SimConfig {
    SimConfig::ten_by_ten(agent_count, total_ticks, 42)
}

/// Grid with `n` agents stacked into column `col`, spread over the rows.
fn loaded_column(n: usize, col: u16) -> MultiGrid {
    let mut g = MultiGrid::new(10, 10);
    for i in 0..n {
        g.place(AgentId(i as u32), Cell::new(col, (i % 10) as u16))
            .unwrap();
    }
    g
}

fn sorted_positions<P: RebalancePolicy>(model: &QueueModel<P>) -> Vec<(u32, Cell)> {
    let mut v: Vec<(u32, Cell)> = model.grid.iter_placed().map(|(a, c)| (a.0, c)).collect();
    v.sort_unstable();
    v
}

// ── Builder ───────────────────────────────────────────────────────────────────

mod builder_tests {
    use super::*;

    #[test]
    fn initial_placement_is_modular_spread() {
        let model = QueueModelBuilder::new(test_config(100, 10), FixedShift::default())
            .build()
            .unwrap();

        assert_eq!(model.store.count(), 100);
        assert_eq!(model.grid.placed_count(), 100);
        for i in 0..100u32 {
            let pos = model.grid.position(AgentId(i)).unwrap();
            assert_eq!(pos, Cell::new((i % 10) as u16, (i / 10) as u16));
            assert!(pos.within(10, 10));
            assert_eq!(
                model.store.queue_assignment(AgentId(i)),
                QueueId((i % 10) as u16)
            );
        }
        // Exactly one full grid: every column holds height agents.
        for col in 0..10 {
            assert_eq!(model.queue_len(col), 10);
        }
    }

    #[test]
    fn oversized_population_wraps_rows() {
        let model = QueueModelBuilder::new(test_config(250, 10), FixedShift::default())
            .build()
            .unwrap();
        for (_, cell) in model.grid.iter_placed() {
            assert!(cell.within(10, 10));
        }
        assert_eq!(model.grid.placed_count(), 250);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut cfg = test_config(10, 10);
        cfg.grid_height = 0;
        assert!(QueueModelBuilder::new(cfg, FixedShift::default()).build().is_err());
    }
}

// ── Step rule ─────────────────────────────────────────────────────────────────

mod step_tests {
    use super::*;

    #[test]
    fn activation_never_increases_column() {
        let mut model = QueueModelBuilder::new(test_config(100, 10), HalfForward::default())
            .build()
            .unwrap();

        let before: Vec<(u32, Cell)> = sorted_positions(&model);
        let mut stats = TickStats::default();
        model.advance_agents(&mut stats).unwrap();

        for (id, old) in before {
            let new = model.grid.position(AgentId(id)).unwrap();
            assert!(new.col <= old.col, "agent {id} went {old} -> {new}");
            assert_eq!(new.row, old.row);
        }
    }

    #[test]
    fn linger_keeps_agents_at_exit_column() {
        let mut model = QueueModelBuilder::new(test_config(100, 30), HalfForward::default())
            .exit_rule(ExitRule::Linger)
            .build()
            .unwrap();
        // HalfForward never fires at 10 agents/column, so after >= 9 ticks
        // everyone has walked to column 0 and stays there.
        model.run_ticks(15, &mut NoopObserver).unwrap();

        assert_eq!(model.grid.placed_count(), 100);
        for (_, cell) in model.grid.iter_placed() {
            assert_eq!(cell.col, 0);
        }
    }

    #[test]
    fn dequeue_drains_the_grid() {
        let mut model = QueueModelBuilder::new(test_config(100, 30), HalfForward::default())
            .exit_rule(ExitRule::Dequeue)
            .build()
            .unwrap();
        model.run_ticks(15, &mut NoopObserver).unwrap();

        assert_eq!(model.grid.placed_count(), 0);
        // Dequeued agents keep their identity in the store.
        assert_eq!(model.store.count(), 100);
        // Further ticks are harmless no-ops.
        model.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(model.grid.placed_count(), 0);
    }

    #[test]
    fn tick_stats_add_up() {
        let mut model = QueueModelBuilder::new(test_config(100, 10), HalfForward::default())
            .exit_rule(ExitRule::Dequeue)
            .build()
            .unwrap();
        // Tick 0: the 10 agents in column 0 dequeue, the other 90 move left.
        let stats = model.step().unwrap();
        assert_eq!(stats.dequeued, 10);
        assert_eq!(stats.moved, 90);
        assert_eq!(stats.at_exit, 0);
    }
}

// ── Policies (direct, on hand-built grids) ────────────────────────────────────

mod policy_tests {
    use super::*;

    #[test]
    fn fixed_shift_quiet_below_threshold() {
        let g = loaded_column(25, 0);
        let actions = FixedShift::default().rebalance(&g, &mut SimRng::new(1));
        assert!(actions.is_empty());
    }

    #[test]
    fn fixed_shift_moves_excess_to_first_open_column() {
        // 30 agents in column 3; every other column empty → first open is 0.
        let g = loaded_column(30, 3);
        let actions = FixedShift::default().rebalance(&g, &mut SimRng::new(1));

        assert_eq!(actions.len(), 5); // 30 - 25
        for action in &actions {
            let QueueAction::Move { agent, to } = action else {
                panic!("unexpected spawn from FixedShift");
            };
            assert_eq!(to.col, 0);
            assert!(to.within(10, 10));
            let from = g.position(*agent).unwrap();
            assert_eq!(to.row, (from.row + 1) % 10);
        }
    }

    #[test]
    fn fixed_shift_gives_up_without_open_column() {
        // Every column holds >= open_below agents; no target exists.
        let mut g = MultiGrid::new(10, 10);
        let mut next = 0u32;
        for col in 0..10u16 {
            let n = if col == 0 { 30 } else { 10 };
            for i in 0..n {
                g.place(AgentId(next), Cell::new(col, i % 10)).unwrap();
                next += 1;
            }
        }
        let actions = FixedShift::default().rebalance(&g, &mut SimRng::new(1));
        assert!(actions.is_empty());
    }

    #[test]
    fn half_forward_reorders_within_the_column() {
        let g = loaded_column(30, 7);
        let actions = HalfForward::default().rebalance(&g, &mut SimRng::new(1));

        assert_eq!(actions.len(), 15); // 30 / 2
        for action in &actions {
            let QueueAction::Move { agent, to } = action else {
                panic!("unexpected spawn from HalfForward");
            };
            assert_eq!(to.col, 7, "HalfForward must stay in its column");
            let from = g.position(*agent).unwrap();
            assert_eq!(to.row, (from.row + 1) % 10);
        }
    }

    #[test]
    fn random_spread_targets_one_under_full_column() {
        // 30 in column 0 → excess 16 over threshold 14, so 8 moves.
        let g = loaded_column(30, 0);
        let policy = RandomSpread { threshold: 14, spawn_probability: 0.0 };
        let actions = policy.rebalance(&g, &mut SimRng::new(5));

        assert_eq!(actions.len(), 8);
        let mut targets = std::collections::HashSet::new();
        for action in &actions {
            let QueueAction::Move { to, .. } = action else {
                panic!("spawn_probability 0 must not spawn");
            };
            assert!(to.within(10, 10));
            assert_ne!(to.col, 0, "target must be under-full");
            targets.insert(to.col);
        }
        assert_eq!(targets.len(), 1, "one random target column per pass");
    }

    #[test]
    fn random_spread_spawns_into_spare_capacity() {
        let g = loaded_column(30, 0);
        let policy = RandomSpread { threshold: 14, spawn_probability: 1.0 };
        let actions = policy.rebalance(&g, &mut SimRng::new(5));

        let spawns: Vec<u16> = actions
            .iter()
            .filter_map(|a| match a {
                QueueAction::Spawn { column } => Some(*column),
                _ => None,
            })
            .collect();
        // Column 0 is over threshold; all nine others qualify.
        assert_eq!(spawns.len(), 9);
        assert!(spawns.iter().all(|&c| c != 0));
    }

    #[test]
    fn policies_emit_in_bounds_targets_under_stress() {
        let g = loaded_column(95, 2);
        let mut rng = SimRng::new(99);
        for actions in [
            FixedShift::default().rebalance(&g, &mut rng),
            HalfForward::default().rebalance(&g, &mut rng),
            RandomSpread::default().rebalance(&g, &mut rng),
        ] {
            for action in actions {
                if let QueueAction::Move { to, .. } = action {
                    assert!(to.within(10, 10), "out-of-bounds target {to}");
                }
            }
        }
    }
}

// ── Full model runs ───────────────────────────────────────────────────────────

mod run_tests {
    use super::*;

    #[test]
    fn run_reaches_end_tick() {
        let mut model = QueueModelBuilder::new(test_config(50, 20), FixedShift::default())
            .build()
            .unwrap();
        model.run(&mut NoopObserver).unwrap();
        assert_eq!(model.current_tick(), sq_core::Tick(20));
    }

    #[test]
    fn run_ticks_advances_incrementally() {
        let mut model = QueueModelBuilder::new(test_config(50, 100), FixedShift::default())
            .build()
            .unwrap();
        model.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(model.current_tick(), sq_core::Tick(5));
        model.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(model.current_tick(), sq_core::Tick(8));
    }

    #[test]
    fn same_seed_same_trajectory() {
        let build = || {
            QueueModelBuilder::new(test_config(100, 50), RandomSpread::default())
                .exit_rule(ExitRule::Linger)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        a.run_ticks(50, &mut NoopObserver).unwrap();
        b.run_ticks(50, &mut NoopObserver).unwrap();

        assert_eq!(sorted_positions(&a), sorted_positions(&b));
        assert_eq!(a.store.count(), b.store.count());
    }

    #[test]
    fn random_spread_grows_the_store() {
        let mut model =
            QueueModelBuilder::new(test_config(100, 40), RandomSpread::default())
                .build()
                .unwrap();
        model.run(&mut NoopObserver).unwrap();
        // With p=0.2 per under-full column per tick over 40 ticks, at least
        // one spawn is a statistical certainty for this fixed seed.
        assert!(model.store.count() > 100);
        assert_eq!(model.schedule.len(), model.store.count());
    }

    #[test]
    fn long_runs_never_error_or_escape_bounds() {
        let mut model =
            QueueModelBuilder::new(test_config(300, 200), RandomSpread::default())
                .build()
                .unwrap();
        model.run(&mut NoopObserver).unwrap();
        for (_, cell) in model.grid.iter_placed() {
            assert!(cell.within(10, 10));
        }
    }

    /// Observer that counts callbacks.
    struct TickCounter {
        starts: usize,
        ends: usize,
        snapshots: usize,
        sim_ends: usize,
    }
    impl crate::ModelObserver for TickCounter {
        fn on_tick_start(&mut self, _t: sq_core::Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: sq_core::Tick, _s: &TickStats) {
            self.ends += 1;
        }
        fn on_snapshot(&mut self, _t: sq_core::Tick, _g: &MultiGrid, _a: &crate::AgentStore) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _t: sq_core::Tick) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn observer_hooks_fire_per_tick() {
        let mut cfg = test_config(20, 12);
        cfg.snapshot_interval_ticks = 4;
        let mut model = QueueModelBuilder::new(cfg, FixedShift::default())
            .build()
            .unwrap();
        let mut obs = TickCounter { starts: 0, ends: 0, snapshots: 0, sim_ends: 0 };
        model.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 12);
        assert_eq!(obs.ends, 12);
        assert_eq!(obs.snapshots, 3); // ticks 0, 4, 8
        assert_eq!(obs.sim_ends, 1);
    }
}
