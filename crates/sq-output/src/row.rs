//! Plain data row types written by output backends.

/// Occupancy of one queue (grid column) at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueOccupancyRow {
    pub tick: u64,
    pub queue: u16,
    pub occupancy: u64,
}

/// A snapshot of one agent's position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick: u64,
    pub agent_id: u32,
    /// Grid coordinate; meaningless when `placed` is false (dequeued agent).
    pub col: u16,
    pub row: u16,
    pub placed: bool,
}
