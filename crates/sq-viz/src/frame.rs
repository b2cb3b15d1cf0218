//! `GridFrame` — the JSON snapshot served to the browser.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use sq_grid::MultiGrid;

use crate::Portrayal;

/// One agent's marker and position within a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentMarker {
    pub id: u32,
    pub col: u16,
    pub row: u16,
    pub portrayal: Portrayal,
}

/// A complete drawable snapshot of the grid at one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridFrame {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub agents: Vec<AgentMarker>,
}

impl GridFrame {
    /// An agent-less frame, served until the first snapshot arrives.
    pub fn empty(width: u16, height: u16) -> Self {
        Self {
            tick: 0,
            width,
            height,
            agents: Vec::new(),
        }
    }

    /// Capture the current grid state.  Markers are sorted by agent ID so the
    /// wire format is stable across runs (the grid iterates in hash order).
    pub fn capture(tick: u64, grid: &MultiGrid) -> Self {
        let mut agents: Vec<AgentMarker> = grid
            .iter_placed()
            .map(|(agent, cell)| AgentMarker {
                id: agent.0,
                col: cell.col,
                row: cell.row,
                portrayal: Portrayal::queue_agent(),
            })
            .collect();
        agents.sort_unstable_by_key(|m| m.id);

        Self {
            tick,
            width: grid.width(),
            height: grid.height(),
            agents,
        }
    }
}

/// Shared latest-frame slot between the sim thread and the HTTP server.
pub type FrameHandle = Arc<Mutex<GridFrame>>;

/// A fresh handle holding an empty `width` × `height` frame.
pub fn frame_handle(width: u16, height: u16) -> FrameHandle {
    Arc::new(Mutex::new(GridFrame::empty(width, height)))
}
