//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `queue_occupancy.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, QueueOccupancyRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    occupancy: Writer<File>,
    snapshots: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut occupancy = Writer::from_path(dir.join("queue_occupancy.csv"))?;
        occupancy.write_record(["tick", "queue", "occupancy"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["tick", "agent_id", "col", "row", "placed"])?;

        Ok(Self {
            occupancy,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_occupancy(&mut self, rows: &[QueueOccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.tick.to_string(),
                row.queue.to_string(),
                row.occupancy.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.col.to_string(),
                row.row.to_string(),
                (row.placed as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.occupancy.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
