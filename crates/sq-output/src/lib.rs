//! `sq-output` — observer-driven CSV output for the queue simulation.
//!
//! # Architecture
//!
//! ```text
//! QueueModel ──ModelObserver──▶ ModelOutputObserver<W> ──OutputWriter──▶ CSV
//! ```
//!
//! The observer turns snapshot callbacks into plain rows; the writer trait
//! keeps backends swappable.  Writer errors cannot surface through the
//! observer (its methods return nothing), so they are stored and retrieved
//! with `take_error()` after the run.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ModelOutputObserver;
pub use row::{AgentSnapshotRow, QueueOccupancyRow};
pub use writer::OutputWriter;
