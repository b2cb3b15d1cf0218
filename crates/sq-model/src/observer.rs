//! Model observer trait for progress reporting and data collection.

use sq_core::Tick;
use sq_grid::MultiGrid;

use crate::{AgentStore, TickStats};

/// Callbacks invoked by [`QueueModel::run`][crate::QueueModel::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         println!("{tick}: {} moved, {} dequeued", stats.moved, stats.dequeued);
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Provides read-only access to the grid and agent store so output
    /// writers and viewers can record state without the model knowing about
    /// any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &MultiGrid, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`ModelObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
