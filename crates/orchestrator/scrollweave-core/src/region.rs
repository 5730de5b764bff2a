//! Scroll regions: the continuous counterpart of viewport watches.
//!
//! A region maps vertical scroll through a section onto a progress value
//! p in [0,1]. Pinned regions additionally hold the section fixed while p
//! advances, driving horizontal content offset from vertical scroll; Span
//! regions cover plain parallax over the section's own height.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::geometry::{Rect, Viewport};
use crate::ids::RegionId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RegionMode {
    /// Section is held fixed while the inner content scrolls horizontally;
    /// distance = content width - viewport width.
    Pinned { content: TargetHandle },
    /// Progress spans the section's own height; nothing is pinned.
    Span,
}

/// Pin state transition observed during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinTransition {
    Engaged,
    Released,
}

#[derive(Clone, Debug)]
pub struct ScrollRegion {
    pub id: RegionId,
    pub section: TargetHandle,
    pub mode: RegionMode,
    /// Derived scroll distance; recomputed on (debounced) resize.
    scroll_distance: f32,
    section_top: f32,
    active: bool,
}

impl ScrollRegion {
    pub fn new(id: RegionId, section: TargetHandle, mode: RegionMode) -> Self {
        Self {
            id,
            section,
            mode,
            scroll_distance: 0.0,
            section_top: 0.0,
            active: false,
        }
    }

    #[inline]
    pub fn scroll_distance(&self) -> f32 {
        self.scroll_distance
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.active
    }

    /// Recompute layout-derived quantities from fresh geometry. Regions
    /// whose section has no geometry keep a zero distance and stay inert.
    pub fn refresh(&mut self, viewport: &Viewport, geometry: &HashMap<TargetHandle, Rect>) {
        let section = match geometry.get(&self.section) {
            Some(r) => r,
            None => {
                self.scroll_distance = 0.0;
                return;
            }
        };
        self.section_top = section.y;
        self.scroll_distance = match &self.mode {
            RegionMode::Pinned { content } => match geometry.get(content) {
                Some(c) => c.width - viewport.width,
                None => 0.0,
            },
            RegionMode::Span => section.height,
        };
        if self.scroll_distance <= 0.0 {
            log::debug!(
                "region {:?} '{}' has no scroll span; treating as inert",
                self.id,
                self.section
            );
        }
    }

    /// Progress through the region for the given scroll position.
    /// A non-positive distance pins p at 0 (no division, no NaN).
    pub fn progress(&self, scroll_y: f32) -> f32 {
        if self.scroll_distance <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.section_top) / self.scroll_distance).clamp(0.0, 1.0)
    }

    /// Update pin state for the current scroll position. Only Pinned
    /// regions with a positive distance ever engage.
    pub fn update_pin(&mut self, scroll_y: f32) -> Option<PinTransition> {
        let in_range = matches!(self.mode, RegionMode::Pinned { .. })
            && self.scroll_distance > 0.0
            && scroll_y >= self.section_top
            && scroll_y <= self.section_top + self.scroll_distance;
        match (self.active, in_range) {
            (false, true) => {
                self.active = true;
                Some(PinTransition::Engaged)
            }
            (true, false) => {
                self.active = false;
                Some(PinTransition::Released)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(content_width: f32) -> (ScrollRegion, Viewport, HashMap<TargetHandle, Rect>) {
        let vp = Viewport {
            width: 1000.0,
            height: 600.0,
            scroll_y: 0.0,
        };
        let mut geo = HashMap::new();
        geo.insert("section".to_string(), Rect::new(0.0, 2000.0, 1000.0, 600.0));
        geo.insert(
            "content".to_string(),
            Rect::new(0.0, 2000.0, content_width, 600.0),
        );
        let mut region = ScrollRegion::new(
            RegionId(0),
            "section".into(),
            RegionMode::Pinned {
                content: "content".into(),
            },
        );
        region.refresh(&vp, &geo);
        (region, vp, geo)
    }

    #[test]
    fn progress_clamps_over_distance() {
        let (region, _, _) = setup(3000.0);
        assert_eq!(region.scroll_distance(), 2000.0);
        assert_eq!(region.progress(1000.0), 0.0);
        assert!((region.progress(3000.0) - 0.5).abs() < 1e-6);
        assert_eq!(region.progress(9999.0), 1.0);
    }

    #[test]
    fn zero_distance_region_is_inert() {
        // Content narrower than the viewport: nothing to scrub.
        let (mut region, _, _) = setup(800.0);
        assert!(region.scroll_distance() <= 0.0);
        for scroll in [0.0, 2000.0, 5000.0, -100.0] {
            let p = region.progress(scroll);
            assert_eq!(p, 0.0);
            assert!(p.is_finite());
        }
        assert!(region.update_pin(2500.0).is_none());
    }

    #[test]
    fn pin_engages_and_releases_at_range_bounds() {
        let (mut region, _, _) = setup(3000.0);
        assert!(region.update_pin(1000.0).is_none());
        assert_eq!(region.update_pin(2000.0), Some(PinTransition::Engaged));
        assert!(region.update_pin(3500.0).is_none());
        assert_eq!(region.update_pin(4500.0), Some(PinTransition::Released));
    }
}
