//! `sq-model` — the queue simulation proper.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Activation — step every agent once, in freshly shuffled order:
//!                   col > 0  → move one cell left
//!                   col == 0 → linger or dequeue, per ExitRule
//!   ② Rebalance  — every `rebalance_every` ticks the policy reads the grid
//!                   and produces QueueActions; the model applies them in
//!                   emission order:
//!                     Move  { agent, to } → grid.move_agent
//!                     Spawn { column }    → new agent, random row in column
//!   ③ Observers  — on_tick_end, on_snapshot at the configured interval.
//! ```
//!
//! The produce/apply split keeps policies read-only over the grid; all
//! mutation happens sequentially in the model, so runs are deterministic for
//! a fixed seed.  None of the shipped policies guarantee the soft capacity
//! actually holds afterwards — a pass can overfill its own target column.
//! That looseness is the modeled behavior, not an oversight.

pub mod activation;
pub mod agent;
pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod rebalance;

#[cfg(test)]
mod tests;

pub use activation::RandomActivation;
pub use agent::{AgentStore, ExitRule, StepOutcome, step_agent};
pub use builder::QueueModelBuilder;
pub use error::{ModelError, ModelResult};
pub use model::{QueueModel, TickStats};
pub use observer::{ModelObserver, NoopObserver};
pub use rebalance::{FixedShift, HalfForward, QueueAction, RandomSpread, RebalancePolicy};
