//! The `QueueModel` struct and its tick loop.

use sq_core::{Cell, SimConfig, SimRng, Tick};
use sq_grid::MultiGrid;

use crate::{
    AgentStore, ExitRule, ModelObserver, ModelResult, QueueAction, RandomActivation,
    RebalancePolicy, StepOutcome, step_agent,
};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Per-tick counters, handed to observers after every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Agents that moved one column toward the exit.
    pub moved: usize,
    /// Agents that sat at column 0 this tick (Linger exit rule).
    pub at_exit: usize,
    /// Agents removed from the grid at column 0 this tick (Dequeue rule).
    pub dequeued: usize,
    /// Rebalance moves applied this tick.
    pub rebalance_moves: usize,
    /// Agents spawned by the policy this tick.
    pub spawned: usize,
}

// ── QueueModel ────────────────────────────────────────────────────────────────

/// The main simulation runner: grid + agents + scheduler + rebalance policy.
///
/// One [`step`][Self::step] is one tick — an activation pass over every agent
/// in shuffled order, then (at the configured interval) one rebalance pass.
/// Create via [`QueueModelBuilder`][crate::QueueModelBuilder].
pub struct QueueModel<P: RebalancePolicy> {
    /// Global configuration (agent count, grid size, seed, …).
    pub config: SimConfig,

    /// The cell space.  One column = one queue.
    pub grid: MultiGrid,

    /// SoA agent state (queue assignments).  Grows when the policy spawns.
    pub store: AgentStore,

    /// Random-activation scheduler.
    pub schedule: RandomActivation,

    /// The rebalance heuristic, called after the activation pass.
    pub policy: P,

    /// What agents do on reaching column 0.
    pub exit_rule: ExitRule,

    pub(crate) rng: SimRng,
    pub(crate) tick: Tick,
}

impl<P: RebalancePolicy> QueueModel<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The tick the next `step()` call will execute.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Occupancy of queue `col` — O(1).
    #[inline]
    pub fn queue_len(&self, col: u16) -> usize {
        self.grid.column_len(col)
    }

    /// Run from the current tick to `config.end_tick()`, with observer hooks
    /// at every tick boundary.  Use [`NoopObserver`][crate::NoopObserver] if
    /// you don't need callbacks.
    pub fn run<O: ModelObserver>(&mut self, observer: &mut O) -> ModelResult<()> {
        while self.tick < self.config.end_tick() {
            let now = self.tick;
            observer.on_tick_start(now);
            let stats = self.step()?;
            observer.on_tick_end(now, &stats);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.grid, &self.store);
            }
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping under a viewer.
    pub fn run_ticks<O: ModelObserver>(&mut self, n: u64, observer: &mut O) -> ModelResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let stats = self.step()?;
            observer.on_tick_end(now, &stats);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.grid, &self.store);
            }
        }
        Ok(())
    }

    /// Advance the model by one tick and return its statistics.
    pub fn step(&mut self) -> ModelResult<TickStats> {
        let mut stats = TickStats::default();

        // ── Phase 1: activation pass ──────────────────────────────────────
        self.advance_agents(&mut stats)?;

        // ── Phase 2: rebalance pass ───────────────────────────────────────
        if self.tick.0.is_multiple_of(self.config.rebalance_every) {
            let actions = self.policy.rebalance(&self.grid, &mut self.rng);
            self.apply_actions(actions, &mut stats)?;
        }

        self.tick = self.tick.offset(1);
        Ok(stats)
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Step every agent once, in this tick's shuffled activation order.
    ///
    /// Exposed within the crate so tests can exercise the step phase without
    /// the rebalance pass interfering.
    pub(crate) fn advance_agents(&mut self, stats: &mut TickStats) -> ModelResult<()> {
        let order = self.schedule.activation_order(&mut self.rng);
        for agent in order {
            match step_agent(&mut self.grid, agent, self.exit_rule)? {
                StepOutcome::MovedLeft => stats.moved += 1,
                StepOutcome::AtExit => stats.at_exit += 1,
                StepOutcome::Dequeued => stats.dequeued += 1,
                StepOutcome::Unplaced => {}
            }
        }
        Ok(())
    }

    /// Apply one rebalance pass's actions in emission order.
    fn apply_actions(&mut self, actions: Vec<QueueAction>, stats: &mut TickStats) -> ModelResult<()> {
        for action in actions {
            match action {
                QueueAction::Move { agent, to } => {
                    self.grid.move_agent(agent, to)?;
                    stats.rebalance_moves += 1;
                }
                QueueAction::Spawn { column } => {
                    let agent = self.store.push_agent(self.grid.width());
                    let row = self.rng.gen_range(0..self.grid.height());
                    self.grid.place(agent, Cell::new(column, row))?;
                    self.schedule.add(agent);
                    stats.spawned += 1;
                }
            }
        }
        Ok(())
    }
}
