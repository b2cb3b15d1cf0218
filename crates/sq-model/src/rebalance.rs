//! Rebalance policies — the pluggable heuristic seam.
//!
//! A policy is a read-only pass over the grid that emits [`QueueAction`]s;
//! the model applies them afterwards.  The three shipped policies are
//! deliberately inconsistent heuristics: they differ in threshold (25 vs 14),
//! in what "redistribute" means, and in whether they spawn new agents.  None
//! of them re-checks a target column after choosing it, so a single pass can
//! overfill its own destination.
//!
//! Common guarantees (tested): emitted target cells are always in bounds,
//! only placed agents are referenced, and a grid with every column at or
//! under the policy's threshold produces no move actions.

use sq_core::{AgentId, Cell, SimRng};
use sq_grid::MultiGrid;

// ── QueueAction ───────────────────────────────────────────────────────────────

/// An action a rebalance pass wants applied to the grid.
///
/// Emitted by [`RebalancePolicy::rebalance`] and consumed by the model, which
/// applies actions sequentially in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueAction {
    /// Relocate a placed agent to `to`.
    Move { agent: AgentId, to: Cell },

    /// Create a brand-new agent somewhere in `column`.
    ///
    /// The model picks the row, assigns `id % queue_count`, and registers the
    /// agent with the scheduler.
    Spawn { column: u16 },
}

// ── RebalancePolicy ───────────────────────────────────────────────────────────

/// Pluggable queue-rebalancing heuristic.
///
/// Implementations must not mutate anything: they read the post-activation
/// grid and describe the redistribution as actions.  `Send + 'static` so a
/// model owning a policy can run on a background thread under a viewer.
pub trait RebalancePolicy: Send + 'static {
    /// Short policy name for banners and output.
    fn name(&self) -> &'static str;

    /// One rebalance pass over the current grid.
    fn rebalance(&self, grid: &MultiGrid, rng: &mut SimRng) -> Vec<QueueAction>;
}

// ── FixedShift ────────────────────────────────────────────────────────────────

/// Variant (i): move the fixed excess count to the first open column.
///
/// For each column above `threshold`, the excess (`len - threshold`) head
/// members are all sent to the first column (ascending scan) holding fewer
/// than `open_below` agents, each one row below its current row (wrapping).
/// If no column is that empty, the overfull column is left alone.
pub struct FixedShift {
    /// Soft queue capacity.  A column is overfull strictly above this.
    pub threshold: usize,
    /// A column qualifies as a shift target below this occupancy.
    pub open_below: usize,
}

impl Default for FixedShift {
    fn default() -> Self {
        Self { threshold: 25, open_below: 10 }
    }
}

impl RebalancePolicy for FixedShift {
    fn name(&self) -> &'static str {
        "fixed-shift"
    }

    fn rebalance(&self, grid: &MultiGrid, rng: &mut SimRng) -> Vec<QueueAction> {
        let _ = rng; // fully deterministic variant
        let mut actions = Vec::new();
        let height = grid.height();

        for col in 0..grid.width() {
            let len = grid.column_len(col);
            if len <= self.threshold {
                continue;
            }
            let excess = len - self.threshold;

            let Some(target) = (0..grid.width()).find(|&c| grid.column_len(c) < self.open_below)
            else {
                continue;
            };

            for agent in grid.column_members(col).into_iter().take(excess) {
                let Some(pos) = grid.position(agent) else { continue };
                actions.push(QueueAction::Move {
                    agent,
                    to: Cell::new(target, (pos.row + 1) % height),
                });
            }
        }
        actions
    }
}

// ── HalfForward ───────────────────────────────────────────────────────────────

/// Variant (ii): march half of an overfull column one row forward.
///
/// The first `len / 2` members of each column above `threshold` move to the
/// next row of the *same* column (wrapping).  Occupancy is untouched — the
/// pass only reorders the queue.  See the module docs on heuristic
/// inconsistency.
pub struct HalfForward {
    pub threshold: usize,
}

impl Default for HalfForward {
    fn default() -> Self {
        Self { threshold: 25 }
    }
}

impl RebalancePolicy for HalfForward {
    fn name(&self) -> &'static str {
        "half-forward"
    }

    fn rebalance(&self, grid: &MultiGrid, rng: &mut SimRng) -> Vec<QueueAction> {
        let _ = rng;
        let mut actions = Vec::new();
        let height = grid.height();

        for col in 0..grid.width() {
            let len = grid.column_len(col);
            if len <= self.threshold {
                continue;
            }

            for agent in grid.column_members(col).into_iter().take(len / 2) {
                let Some(pos) = grid.position(agent) else { continue };
                actions.push(QueueAction::Move {
                    agent,
                    to: Cell::new(col, (pos.row + 1) % height),
                });
            }
        }
        actions
    }
}

// ── RandomSpread ──────────────────────────────────────────────────────────────

/// Variant (iii): spread half the excess to a random under-full column, and
/// sprinkle new arrivals into columns with spare capacity.
///
/// "Under-full" means below this variant's own `threshold` (14, not 25).
/// Moved agents land in a uniformly random row of the chosen column.  After
/// the move pass, every under-threshold column receives a new agent with
/// probability `spawn_probability`.
pub struct RandomSpread {
    pub threshold: usize,
    /// Per-column chance of spawning one agent per pass.
    pub spawn_probability: f64,
}

impl Default for RandomSpread {
    fn default() -> Self {
        Self { threshold: 14, spawn_probability: 0.2 }
    }
}

impl RebalancePolicy for RandomSpread {
    fn name(&self) -> &'static str {
        "random-spread"
    }

    fn rebalance(&self, grid: &MultiGrid, rng: &mut SimRng) -> Vec<QueueAction> {
        let mut actions = Vec::new();
        let height = grid.height();

        for col in 0..grid.width() {
            let len = grid.column_len(col);
            if len <= self.threshold {
                continue;
            }
            let to_move = (len - self.threshold) / 2;
            if to_move == 0 {
                continue;
            }

            let under_full: Vec<u16> = (0..grid.width())
                .filter(|&c| grid.column_len(c) < self.threshold)
                .collect();
            let Some(&target) = rng.choose(&under_full) else {
                continue;
            };

            for agent in grid.column_members(col).into_iter().take(to_move) {
                actions.push(QueueAction::Move {
                    agent,
                    to: Cell::new(target, rng.gen_range(0..height)),
                });
            }
        }

        // Arrival traffic: fill spare capacity stochastically.
        for col in 0..grid.width() {
            if grid.column_len(col) < self.threshold && rng.gen_bool(self.spawn_probability) {
                actions.push(QueueAction::Spawn { column: col });
            }
        }

        actions
    }
}
