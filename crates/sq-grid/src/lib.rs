//! `sq-grid` — multi-occupancy cell space for the rust_sq queue simulation.
//!
//! One grid column is one queue; agents occupy cells and step toward
//! column 0.  Any number of agents may share a cell — queue depth is soft,
//! which is exactly why the rebalance heuristics in `sq-model` exist.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
