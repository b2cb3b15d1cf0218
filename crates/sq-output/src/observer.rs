//! `ModelOutputObserver<W>` — bridges `ModelObserver` to an `OutputWriter`.

use sq_core::Tick;
use sq_grid::MultiGrid;
use sq_model::{AgentStore, ModelObserver};

use crate::row::{AgentSnapshotRow, QueueOccupancyRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ModelObserver`] that writes queue occupancy and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods have
/// no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct ModelOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ModelOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ModelObserver for ModelOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, grid: &MultiGrid, agents: &AgentStore) {
        let occupancy: Vec<QueueOccupancyRow> = (0..grid.width())
            .map(|queue| QueueOccupancyRow {
                tick: tick.0,
                queue,
                occupancy: grid.column_len(queue) as u64,
            })
            .collect();
        let result = self.writer.write_occupancy(&occupancy);
        self.store_err(result);

        let snapshots: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| match grid.position(agent) {
                Some(cell) => AgentSnapshotRow {
                    tick: tick.0,
                    agent_id: agent.0,
                    col: cell.col,
                    row: cell.row,
                    placed: true,
                },
                None => AgentSnapshotRow {
                    tick: tick.0,
                    agent_id: agent.0,
                    col: 0,
                    row: 0,
                    placed: false,
                },
            })
            .collect();
        let result = self.writer.write_snapshots(&snapshots);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
