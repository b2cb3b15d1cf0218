//! The visualization HTTP server.
//!
//! Two routes, no sessions, no state beyond the shared latest frame:
//!
//! - `GET /`      — the embedded canvas page
//! - `GET /state` — the latest [`GridFrame`] as JSON
//!
//! Per-connection failures are reported to stderr and do not stop the serve
//! loop; only failing to bind the listener is fatal.

use tiny_http::{Header, Method, Request, Response, Server};

use crate::frame::FrameHandle;
use crate::{VizError, VizResult};

/// Default listen address for the viewer.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8521";

const INDEX_HTML: &str = include_str!("../assets/index.html");

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct VizServerConfig {
    pub bind_addr: String,
    /// Page title shown above the canvas.
    pub title: String,
    /// Canvas edge length in pixels (the grid is square).
    pub canvas_px: u32,
}

impl VizServerConfig {
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            title: "Queue Model".to_string(),
            canvas_px: 500,
        }
    }

    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_canvas_px(mut self, px: u32) -> Self {
        self.canvas_px = px;
        self
    }
}

impl Default for VizServerConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

/// Serves the canvas page and the latest grid frame.
pub struct VizServer {
    config: VizServerConfig,
    frame: FrameHandle,
}

impl VizServer {
    pub fn new(config: VizServerConfig, frame: FrameHandle) -> Self {
        Self { config, frame }
    }

    /// Render the index page for this configuration.
    ///
    /// Exposed for tests; `run` serves exactly this string at `/`.
    pub fn index_page(&self) -> String {
        INDEX_HTML
            .replace("__TITLE__", &self.config.title)
            .replace("__CANVAS_PX__", &self.config.canvas_px.to_string())
    }

    /// Encode the latest frame as the `/state` JSON body.
    pub fn state_json(&self) -> VizResult<String> {
        let frame = self.frame.lock().unwrap_or_else(|e| e.into_inner());
        Ok(serde_json::to_string(&*frame)?)
    }

    /// Bind and serve forever.  Call from the main thread with the model
    /// stepping on a background thread.
    pub fn run(&self) -> VizResult<()> {
        let server = Server::http(&self.config.bind_addr).map_err(|e| VizError::Bind {
            addr: self.config.bind_addr.clone(),
            reason: e.to_string(),
        })?;
        println!("Visualization server on http://{}/", self.config.bind_addr);

        for request in server.incoming_requests() {
            if let Err(err) = self.handle(request) {
                eprintln!("viz server error: {err}");
            }
        }
        Ok(())
    }

    fn handle(&self, request: Request) -> VizResult<()> {
        match (request.method(), request.url()) {
            (Method::Get, "/") => {
                let response =
                    Response::from_string(self.index_page()).with_header(content_type("text/html; charset=utf-8"));
                request.respond(response)?;
            }
            (Method::Get, "/state") => {
                let response =
                    Response::from_string(self.state_json()?).with_header(content_type("application/json"));
                request.respond(response)?;
            }
            _ => {
                let response = Response::from_string("not found").with_status_code(404);
                request.respond(response)?;
            }
        }
        Ok(())
    }
}

fn content_type(value: &str) -> Header {
    // Both byte strings are known-valid header tokens.
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .unwrap_or_else(|_| unreachable!("static header tokens are valid"))
}
