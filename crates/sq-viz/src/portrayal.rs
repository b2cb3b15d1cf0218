//! Agent portrayal — how an agent is drawn on the canvas.

use serde::{Deserialize, Serialize};

/// Marker shape.  The queue model only ever draws circles; the enum exists so
/// the wire format names the shape instead of implying it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
}

/// Visual marker for one agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portrayal {
    pub shape: Shape,
    /// Radius in cell units (0.5 = the marker fills its cell).
    pub r: f32,
    /// CSS color name or hex string.
    pub color: String,
    pub filled: bool,
    /// Draw order; higher layers are drawn on top.
    pub layer: u8,
}

impl Portrayal {
    /// The fixed queue-agent marker: a filled purple circle, radius 0.5,
    /// layer 0.  Every agent gets the same marker — there is no conditional
    /// styling in this model.
    pub fn queue_agent() -> Self {
        Self {
            shape: Shape::Circle,
            r: 0.5,
            color: "purple".to_string(),
            filled: true,
            layer: 0,
        }
    }
}
