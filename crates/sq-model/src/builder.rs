//! Fluent builder for constructing a [`QueueModel`].

use sq_core::{AgentId, Cell, SimConfig, SimRng, Tick};
use sq_grid::MultiGrid;

use crate::{
    AgentStore, ExitRule, ModelResult, QueueModel, RandomActivation, RebalancePolicy,
};

/// Fluent builder for [`QueueModel<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — agent count, grid size, seed, tick budget
/// - `P: RebalancePolicy` — the rebalance heuristic
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default             |
/// |-----------------|---------------------|
/// | `.exit_rule(r)` | `ExitRule::Linger`  |
///
/// # Initial placement
///
/// Agent `i` starts at `(i % width, (i / width) % height)`: a modular spread,
/// with the row wrapped so populations beyond one full grid still land in
/// bounds.
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::ten_by_ten(100, 200, 42);
/// let mut model = QueueModelBuilder::new(config, FixedShift::default())
///     .exit_rule(ExitRule::Dequeue)
///     .build()?;
/// model.run(&mut NoopObserver)?;
/// ```
pub struct QueueModelBuilder<P: RebalancePolicy> {
    config: SimConfig,
    policy: P,
    exit_rule: ExitRule,
}

impl<P: RebalancePolicy> QueueModelBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            exit_rule: ExitRule::Linger,
        }
    }

    /// What agents do on reaching column 0 (default: linger there).
    pub fn exit_rule(mut self, rule: ExitRule) -> Self {
        self.exit_rule = rule;
        self
    }

    /// Validate the configuration, place the initial population, and return
    /// a ready-to-run [`QueueModel`].
    pub fn build(self) -> ModelResult<QueueModel<P>> {
        self.config.validate()?;

        let width = self.config.grid_width;
        let height = self.config.grid_height;

        let store = AgentStore::new(self.config.agent_count, width);
        let mut grid = MultiGrid::new(width, height);

        // Modular spread: fill row 0 left to right, then row 1, …
        for i in 0..self.config.agent_count {
            let cell = Cell::new(
                (i % width as usize) as u16,
                ((i / width as usize) % height as usize) as u16,
            );
            grid.place(AgentId(i as u32), cell)?;
        }

        let schedule = RandomActivation::from_store(&store);
        let rng = SimRng::new(self.config.seed);

        Ok(QueueModel {
            config: self.config,
            grid,
            store,
            schedule,
            policy: self.policy,
            exit_rule: self.exit_rule,
            rng,
            tick: Tick::ZERO,
        })
    }
}
