//! Agent storage and the per-agent step rule.
//!
//! `AgentStore` is Structure-of-Arrays: agent `i`'s data lives at index `i`
//! of every array.  Position is deliberately *not* stored here — the grid
//! owns it, so there is exactly one source of truth for "where is agent X"
//! and an agent that leaves through the exit simply has no position.

use sq_core::{AgentId, QueueId};
use sq_grid::{GridResult, MultiGrid};

// ── AgentStore ────────────────────────────────────────────────────────────────

/// SoA storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.  The store only grows (policies may spawn agents);
/// dequeued agents stay registered with their position gone from the grid.
pub struct AgentStore {
    /// Queue each agent was assigned at creation: `id % queue_count`.
    /// Kept for observers and output; the step rule itself only reads the
    /// grid.
    queue_assignment: Vec<QueueId>,
}

impl AgentStore {
    /// Create `count` agents assigned round-robin across `queue_count` queues.
    pub fn new(count: usize, queue_count: u16) -> Self {
        let queue_assignment = (0..count)
            .map(|i| QueueId((i % queue_count as usize) as u16))
            .collect();
        Self { queue_assignment }
    }

    /// Number of agents ever created (including dequeued ones).
    #[inline]
    pub fn count(&self) -> usize {
        self.queue_assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue_assignment.is_empty()
    }

    /// The queue agent was assigned at creation.
    #[inline]
    pub fn queue_assignment(&self, agent: AgentId) -> QueueId {
        self.queue_assignment[agent.index()]
    }

    /// Append a newly spawned agent; returns its fresh `AgentId`.
    pub fn push_agent(&mut self, queue_count: u16) -> AgentId {
        let id = AgentId(self.queue_assignment.len() as u32);
        self.queue_assignment
            .push(QueueId((id.index() % queue_count as usize) as u16));
        id
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.queue_assignment.len() as u32).map(AgentId)
    }
}

// ── Step rule ─────────────────────────────────────────────────────────────────

/// What happens when an agent reaches column 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitRule {
    /// Stay in place at the head of the queue.
    Linger,
    /// Leave the grid; the agent keeps its ID but has no position afterwards.
    Dequeue,
}

/// Result of stepping one agent, for per-tick statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one column toward the exit.
    MovedLeft,
    /// Already at column 0 and lingering there.
    AtExit,
    /// Was at column 0 and left the grid this tick.
    Dequeued,
    /// Not on the grid (dequeued earlier); nothing to do.
    Unplaced,
}

/// Step one agent: one cell toward column 0, or the exit rule at column 0.
///
/// The column coordinate never increases here — only the rebalance pass may
/// move an agent to a higher column.
pub fn step_agent(grid: &mut MultiGrid, agent: AgentId, exit: ExitRule) -> GridResult<StepOutcome> {
    let Some(pos) = grid.position(agent) else {
        return Ok(StepOutcome::Unplaced);
    };

    match pos.left() {
        Some(to) => {
            grid.move_agent(agent, to)?;
            Ok(StepOutcome::MovedLeft)
        }
        None => match exit {
            ExitRule::Linger => Ok(StepOutcome::AtExit),
            ExitRule::Dequeue => {
                grid.remove(agent)?;
                Ok(StepOutcome::Dequeued)
            }
        },
    }
}
