//! Viewport watches: threshold-crossing detection over host geometry.
//!
//! A watch observes one target's visible fraction. Rising crossings fire
//! Enter, falling crossings fire Exit (EveryTransition only). `Once`
//! watches retire after their first Enter and their memory is released on
//! the next evaluation pass. A target already at threshold when the watch
//! is registered fires on the first pass rather than being skipped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::geometry::{Rect, Viewport};
use crate::ids::WatchId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePolicy {
    /// Fire Enter once, then retire.
    Once,
    /// Fire Enter/Exit on every crossing until teardown.
    EveryTransition,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrossingKind {
    Entered,
    Exited,
}

/// One threshold crossing observed during an evaluation pass. Crossing
/// order within a single pass is evaluation order and unspecified for
/// watches that cross simultaneously.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub watch: WatchId,
    pub kind: CrossingKind,
}

#[derive(Clone, Debug)]
struct ViewportWatch {
    id: WatchId,
    target: TargetHandle,
    threshold: f32,
    policy: FirePolicy,
    /// None until the first observation pass.
    last_inside: Option<bool>,
    retired: bool,
}

impl ViewportWatch {
    #[inline]
    fn inside(&self, fraction: f32) -> bool {
        if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        }
    }
}

/// Owned set of viewport watches.
#[derive(Default, Debug)]
pub struct WatchSet {
    watches: Vec<ViewportWatch>,
}

impl WatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        id: WatchId,
        target: TargetHandle,
        threshold: f32,
        policy: FirePolicy,
    ) {
        self.watches.push(ViewportWatch {
            id,
            target,
            threshold: threshold.clamp(0.0, 1.0),
            policy,
            last_inside: None,
            retired: false,
        });
    }

    pub fn retire(&mut self, id: WatchId) {
        if let Some(w) = self.watches.iter_mut().find(|w| w.id == id) {
            w.retired = true;
        }
    }

    pub fn retire_all(&mut self) {
        self.watches.clear();
    }

    pub fn len(&self) -> usize {
        self.watches.iter().filter(|w| !w.retired).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One observation pass over fresh geometry. Watches whose target has
    /// no geometry (absent or removed from the document) are retired
    /// silently; everything else compares its visible fraction against the
    /// threshold and reports crossings.
    pub fn evaluate(
        &mut self,
        viewport: &Viewport,
        geometry: &HashMap<TargetHandle, Rect>,
    ) -> Vec<Crossing> {
        let mut crossings = Vec::new();
        for w in &mut self.watches {
            if w.retired {
                continue;
            }
            let rect = match geometry.get(&w.target) {
                Some(r) => r,
                None => {
                    log::debug!("watch {:?} target '{}' gone; retiring", w.id, w.target);
                    w.retired = true;
                    continue;
                }
            };
            let inside = w.inside(viewport.visible_fraction(rect));
            let was_inside = w.last_inside;
            w.last_inside = Some(inside);
            match (was_inside, inside) {
                // First pass: above-the-fold content fires immediately.
                (None, true) | (Some(false), true) => {
                    crossings.push(Crossing {
                        watch: w.id,
                        kind: CrossingKind::Entered,
                    });
                    if w.policy == FirePolicy::Once {
                        w.retired = true;
                    }
                }
                (Some(true), false) => {
                    if w.policy == FirePolicy::EveryTransition {
                        crossings.push(Crossing {
                            watch: w.id,
                            kind: CrossingKind::Exited,
                        });
                    }
                }
                _ => {}
            }
        }
        // Release retired watches.
        self.watches.retain(|w| !w.retired);
        crossings
    }
}
