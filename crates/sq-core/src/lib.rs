//! `sq-core` — foundational types for the `rust_sq` queue simulation.
//!
//! This crate is a dependency of every other `sq-*` crate.  It intentionally
//! has no `sq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `AgentId`, `QueueId`                      |
//! | [`cell`]    | `Cell` grid coordinate                    |
//! | [`time`]    | `Tick`, `SimConfig`                       |
//! | [`rng`]     | `SimRng` (deterministic model RNG)        |
//! | [`error`]   | `SqError`, `SqResult`                     |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{SqError, SqResult};
pub use ids::{AgentId, QueueId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
