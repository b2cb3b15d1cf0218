//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one full
//! pass of the model: every agent is activated once, then (periodically) the
//! rebalance pass runs.  There is no wall-clock mapping; a visualization
//! front-end chooses its own replay speed.

use std::fmt;

use crate::error::{SqError, SqResult};
use crate::ids::QueueId;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// One queue = one grid column, so `grid_width` is also the queue count.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of agents created at initialization.  Policies may spawn more.
    pub agent_count: usize,

    /// Grid columns (= queue count).  Default: 10.
    pub grid_width: u16,

    /// Grid rows (queue depth).  Default: 10.
    pub grid_height: u16,

    /// Total ticks to simulate.  `run()` stops here; `step()` ignores it.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Run the rebalance pass every N ticks.  1 = after every activation pass.
    pub rebalance_every: u64,

    /// Fire the snapshot observer hook every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// A 10×10 grid with `agent_count` agents, rebalancing and snapshotting
    /// every tick — the shape all three demo scenarios share.
    pub fn ten_by_ten(agent_count: usize, total_ticks: u64, seed: u64) -> Self {
        Self {
            agent_count,
            grid_width: 10,
            grid_height: 10,
            total_ticks,
            seed,
            rebalance_every: 1,
            snapshot_interval_ticks: 1,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Queue count as a `usize` for loop bounds.
    #[inline]
    pub fn queue_count(&self) -> usize {
        self.grid_width as usize
    }

    /// Reject configurations the rest of the stack cannot represent.
    pub fn validate(&self) -> SqResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SqError::Config(format!(
                "grid dimensions must be non-zero (got {}x{})",
                self.grid_width, self.grid_height
            )));
        }
        if usize::from(self.grid_width) >= QueueId::INVALID.index() {
            return Err(SqError::Config(format!(
                "queue count {} does not fit QueueId",
                self.grid_width
            )));
        }
        if self.rebalance_every == 0 {
            return Err(SqError::Config(
                "rebalance_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
