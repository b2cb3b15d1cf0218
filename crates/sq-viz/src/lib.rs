//! `sq-viz` — browser visualization for the queue simulation.
//!
//! # Architecture
//!
//! ```text
//! QueueModel ──ModelObserver──▶ VizObserver ──▶ FrameHandle (latest GridFrame)
//!                                                    │
//!                                    VizServer ──────┘
//!                                    GET /       → embedded canvas page
//!                                    GET /state  → latest frame as JSON
//! ```
//!
//! The model steps on its own thread and publishes a fresh [`GridFrame`]
//! through the shared handle after every snapshot; the HTTP server only ever
//! reads the latest frame.  The browser page polls `/state` and redraws —
//! there is no per-client state and no protocol beyond that one JSON shape.

pub mod error;
pub mod frame;
pub mod observer;
pub mod portrayal;
pub mod server;


pub use error::{VizError, VizResult};
pub use frame::{AgentMarker, FrameHandle, GridFrame, frame_handle};
pub use observer::VizObserver;
pub use portrayal::{Portrayal, Shape};
pub use server::{VizServer, VizServerConfig};
