//! `VizObserver` — publishes grid snapshots to a [`FrameHandle`].

use sq_core::Tick;
use sq_grid::MultiGrid;
use sq_model::{AgentStore, ModelObserver};

use crate::frame::{FrameHandle, GridFrame};

/// A [`ModelObserver`] that captures a [`GridFrame`] on every snapshot hook
/// and stores it in the shared handle for the HTTP server to serve.
pub struct VizObserver {
    frame: FrameHandle,
}

impl VizObserver {
    pub fn new(frame: FrameHandle) -> Self {
        Self { frame }
    }
}

impl ModelObserver for VizObserver {
    fn on_snapshot(&mut self, tick: Tick, grid: &MultiGrid, _agents: &AgentStore) {
        let frame = GridFrame::capture(tick.0, grid);
        // A poisoned lock only means a server thread panicked mid-read; the
        // frame data itself is always a complete value, so keep publishing.
        let mut slot = self.frame.lock().unwrap_or_else(|e| e.into_inner());
        *slot = frame;
    }
}
