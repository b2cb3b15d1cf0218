//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, OutputResult, QueueOccupancyRow};

/// Trait implemented by output backends (currently CSV).
///
/// Write failures surface as [`OutputError`][crate::OutputError]; the
/// bridging observer stores the first one and exposes it via
/// [`ModelOutputObserver::take_error`][crate::ModelOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-queue occupancy rows.
    fn write_occupancy(&mut self, rows: &[QueueOccupancyRow]) -> OutputResult<()>;

    /// Write a batch of agent position snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
