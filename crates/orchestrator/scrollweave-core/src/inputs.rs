//! Input contracts for the orchestrator.
//!
//! Hosts build one `Inputs` per frame from the events they observed
//! (scroll, resize, element measurement, pointer) and pass it into
//! Orchestrator::update(). Everything is optional; an empty `Inputs`
//! just advances clocks.

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::geometry::{DocumentMetrics, Rect};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// New vertical scroll position, if the user scrolled this frame.
    #[serde(default)]
    pub scroll_y: Option<f32>,
    /// New window size, if the viewport resized this frame.
    #[serde(default)]
    pub resize: Option<ViewportSize>,
    /// Updated whole-document metrics (usually alongside resize).
    #[serde(default)]
    pub document: Option<DocumentMetrics>,
    /// Fresh element measurements in document space.
    #[serde(default)]
    pub geometry: Vec<GeometryUpdate>,
    /// Pointer activity routed to the shared overlay.
    #[serde(default)]
    pub pointer: Vec<PointerEvent>,
    /// Host commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeometryUpdate {
    pub target: TargetHandle,
    pub rect: Rect,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered a mark; the host supplies the overlay payload.
    Enter { x: f32, y: f32, content: String },
    Move { x: f32, y: f32 },
    Leave,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Animate the document scroll position to a target's top edge minus
    /// a fixed offset (sticky-navbar allowance).
    ScrollTo {
        target: TargetHandle,
        offset_px: f32,
    },
    /// Simulated newsletter submission.
    SubmitNewsletter { email: String },
}
