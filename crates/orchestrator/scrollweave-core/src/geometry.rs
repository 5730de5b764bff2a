//! Document-space geometry fed by the host.
//!
//! The engine is host-agnostic: an adapter measures elements and reports
//! rects in document coordinates (y grows downward, origin at document
//! top-left). Visibility math lives here so watch evaluation stays pure.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in document space.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Degenerate rects (zero or negative extent) never intersect anything.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Viewport state: window size plus vertical scroll offset.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scroll_y: 0.0,
        }
    }
}

impl Viewport {
    /// Fraction of `rect`'s area currently inside the viewport, in [0,1].
    /// Degenerate rects report 0 rather than dividing by zero.
    pub fn visible_fraction(&self, rect: &Rect) -> f32 {
        if rect.is_degenerate() || self.width <= 0.0 || self.height <= 0.0 {
            return 0.0;
        }
        let top = self.scroll_y;
        let bottom = self.scroll_y + self.height;
        let vis_h = (rect.bottom().min(bottom) - rect.y.max(top)).max(0.0);
        let vis_w = (rect.x + rect.width).min(self.width).max(0.0) - rect.x.max(0.0);
        let vis_w = vis_w.max(0.0).min(rect.width);
        (vis_h * vis_w) / (rect.height * rect.width)
    }
}

/// Whole-document metrics used for the scroll progress binding.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetrics {
    pub scroll_height: f32,
}

impl DocumentMetrics {
    /// Total scroll fraction in [0,1]; a document no taller than the
    /// viewport reports 0.
    pub fn progress(&self, viewport: &Viewport) -> f32 {
        let span = self.scroll_height - viewport.height;
        if span <= 0.0 {
            return 0.0;
        }
        (viewport.scroll_y / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_clamps_and_handles_degenerate() {
        let vp = Viewport {
            width: 100.0,
            height: 100.0,
            scroll_y: 0.0,
        };
        let fully_in = Rect::new(0.0, 10.0, 50.0, 50.0);
        assert!((vp.visible_fraction(&fully_in) - 1.0).abs() < 1e-6);

        let half_below = Rect::new(0.0, 75.0, 50.0, 50.0);
        assert!((vp.visible_fraction(&half_below) - 0.5).abs() < 1e-6);

        let degenerate = Rect::new(0.0, 0.0, 0.0, 40.0);
        assert_eq!(vp.visible_fraction(&degenerate), 0.0);
    }

    #[test]
    fn document_progress_short_page_is_zero() {
        let vp = Viewport {
            width: 100.0,
            height: 800.0,
            scroll_y: 500.0,
        };
        let doc = DocumentMetrics {
            scroll_height: 600.0,
        };
        assert_eq!(doc.progress(&vp), 0.0);
    }
}
