//! Shared interactive overlay (tooltip) state.
//!
//! One instance serves every visualization on the page. State changes are
//! emitted as property changes on a single overlay target; the host owns
//! the actual floating element.

use crate::binding::TargetHandle;
use crate::outputs::{Change, Event, Outputs};
use crate::value::Value;

/// Handle the overlay's property changes are keyed by.
pub const OVERLAY_TARGET: &str = "overlay";

#[derive(Debug)]
pub struct Overlay {
    target: TargetHandle,
    /// Fixed pointer offset so the overlay never occludes the hovered mark.
    offset: [f32; 2],
    visible: bool,
}

impl Overlay {
    pub fn new(offset: [f32; 2]) -> Self {
        Self {
            target: OVERLAY_TARGET.to_string(),
            offset,
            visible: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the overlay with fresh content at the pointer position.
    /// At most one overlay is ever visible; a show while visible just
    /// replaces content and position.
    pub fn show(&mut self, content: &str, x: f32, y: f32, out: &mut Outputs) {
        let was_visible = self.visible;
        self.visible = true;
        out.push_change(Change {
            target: self.target.clone(),
            prop: "content".into(),
            value: Value::Text(content.to_string()),
        });
        self.emit_position(x, y, out);
        if !was_visible {
            out.push_change(Change {
                target: self.target.clone(),
                prop: "visible".into(),
                value: Value::Bool(true),
            });
            out.push_event(Event::OverlayShown);
        }
    }

    /// Track the pointer. Never shows a hidden overlay.
    pub fn move_to(&mut self, x: f32, y: f32, out: &mut Outputs) {
        if !self.visible {
            return;
        }
        self.emit_position(x, y, out);
    }

    /// Hide the overlay. Idempotent.
    pub fn hide(&mut self, out: &mut Outputs) {
        if !self.visible {
            return;
        }
        self.visible = false;
        out.push_change(Change {
            target: self.target.clone(),
            prop: "visible".into(),
            value: Value::Bool(false),
        });
        out.push_event(Event::OverlayHidden);
    }

    fn emit_position(&self, x: f32, y: f32, out: &mut Outputs) {
        out.push_change(Change {
            target: self.target.clone(),
            prop: "x".into(),
            value: Value::Scalar(x + self.offset[0]),
        });
        out.push_change(Change {
            target: self.target.clone(),
            prop: "y".into(),
            value: Value::Scalar(y + self.offset[1]),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes_for<'a>(out: &'a Outputs, prop: &str) -> Vec<&'a Change> {
        out.changes.iter().filter(|c| c.prop == prop).collect()
    }

    #[test]
    fn move_never_shows_hidden_overlay() {
        let mut overlay = Overlay::new([10.0, -10.0]);
        let mut out = Outputs::default();
        overlay.move_to(50.0, 50.0, &mut out);
        assert!(out.is_empty());
        assert!(!overlay.is_visible());
    }

    #[test]
    fn hide_is_idempotent() {
        let mut overlay = Overlay::new([10.0, -10.0]);
        let mut out = Outputs::default();
        overlay.show("hi", 0.0, 0.0, &mut out);
        out.clear();
        overlay.hide(&mut out);
        let first = out.changes.len();
        overlay.hide(&mut out);
        assert_eq!(out.changes.len(), first);
    }

    #[test]
    fn position_includes_pointer_offset() {
        let mut overlay = Overlay::new([10.0, -10.0]);
        let mut out = Outputs::default();
        overlay.show("<b>Kenya</b>", 100.0, 200.0, &mut out);
        let xs = changes_for(&out, "x");
        let ys = changes_for(&out, "y");
        assert_eq!(xs[0].value, Value::Scalar(110.0));
        assert_eq!(ys[0].value, Value::Scalar(190.0));
    }
}
