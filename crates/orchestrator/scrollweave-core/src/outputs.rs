//! Output contracts from the orchestrator.
//!
//! Outputs carry the property changes for this tick, keyed by opaque
//! TargetHandle, and a separate list of semantic events. Adapters apply
//! changes to the page and may surface events (pin state for CSS
//! position switches, slot renders for chart construction).

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::ids::{DirectiveId, RegionId, WatchId};
use crate::value::Value;

/// One changed target property this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub target: TargetHandle,
    pub prop: String,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum Event {
    WatchEntered { watch: WatchId },
    WatchExited { watch: WatchId },
    DirectiveStarted { directive: DirectiveId },
    DirectiveSettled { directive: DirectiveId },
    RegionPinned { region: RegionId },
    RegionReleased { region: RegionId },
    SlotRendered { section: String },
    OverlayShown,
    OverlayHidden,
    ScrollSettled,
    NewsletterConfirmed { email: String },
    Error { message: String },
}

/// Outputs returned by Orchestrator::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
