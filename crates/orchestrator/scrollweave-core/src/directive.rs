//! Declarative animation directives.
//!
//! A directive names what to animate (one or more targets in document
//! order), the from/to property states, timing, and the trigger that
//! drives it. Directives are plain data: the orchestrator owns the
//! runtime state they give rise to.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::binding::TargetPath;
use crate::ease::Ease;
use crate::ids::RegionId;
use crate::value::Value;

/// Properties the engine will tween. `to` keys outside a directive's
/// `from` set must come from this list so hosts can apply changes blindly.
pub const ANIMATABLE_PROPS: &[&str] = &[
    "opacity", "x", "y", "scale", "rotation", "width", "height", "color", "value",
];

/// Per-target delay policy.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Delay {
    /// Same delay for every target, in milliseconds.
    Fixed(f32),
    /// Target i waits base + i * step milliseconds; i follows the
    /// directive's target order (document order).
    Staggered { base_ms: f32, step_ms: f32 },
}

impl Default for Delay {
    fn default() -> Self {
        Delay::Fixed(0.0)
    }
}

impl Delay {
    /// Effective delay for target index i, in milliseconds.
    #[inline]
    pub fn for_index(&self, i: usize) -> f32 {
        match *self {
            Delay::Fixed(ms) => ms,
            Delay::Staggered { base_ms, step_ms } => base_ms + i as f32 * step_ms,
        }
    }
}

/// What happens on the discrete trigger's enter/exit edges.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Play from -> to on first enter, then never again.
    OnceOnEnter,
    /// Play forward on every enter and backward on every exit; the latest
    /// requested direction supersedes an in-flight run.
    ReverseOnExit,
}

/// Trigger condition for a directive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Trigger {
    /// Discrete: fires when the watch target's visible fraction crosses
    /// the threshold. `watch` defaults to the first animated target.
    Enter {
        threshold: f32,
        policy: TriggerPolicy,
    },
    /// Continuous: progress is a pure function of the owning region's
    /// scroll position, re-evaluated every tick.
    Scrub { region: RegionId },
}

/// A single declarative animation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationDirective {
    pub name: String,
    /// Animated targets in document order (stagger index order).
    pub targets: Vec<TargetPath>,
    /// Element whose visibility drives an Enter trigger; None means the
    /// first animated target.
    #[serde(default)]
    pub watch: Option<TargetPath>,
    pub from: IndexMap<String, Value>,
    pub to: IndexMap<String, Value>,
    pub duration_ms: u32,
    #[serde(default)]
    pub delay: Delay,
    #[serde(default)]
    pub ease: Ease,
    pub trigger: Trigger,
}

impl AnimationDirective {
    /// Validate basic invariants before registration.
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.targets.is_empty() {
            return Err(format!("directive '{}' has no targets", self.name));
        }
        if matches!(self.trigger, Trigger::Enter { .. }) && self.duration_ms == 0 {
            return Err(format!(
                "directive '{}' duration must be > 0 ms",
                self.name
            ));
        }
        if let Trigger::Enter { threshold, .. } = self.trigger {
            if !(0.0..=1.0).contains(&threshold) || !threshold.is_finite() {
                return Err(format!(
                    "directive '{}' threshold must be in [0,1]",
                    self.name
                ));
            }
        }
        match self.delay {
            Delay::Fixed(ms) if !ms.is_finite() || ms < 0.0 => {
                return Err(format!("directive '{}' delay must be >= 0", self.name));
            }
            Delay::Staggered { base_ms, step_ms }
                if !base_ms.is_finite() || base_ms < 0.0 || !step_ms.is_finite() || step_ms < 0.0 =>
            {
                return Err(format!("directive '{}' stagger must be >= 0", self.name));
            }
            _ => {}
        }
        for key in self.to.keys() {
            if !self.from.contains_key(key) && !ANIMATABLE_PROPS.contains(&key.as_str()) {
                return Err(format!(
                    "directive '{}' animates unknown property '{key}'",
                    self.name
                ));
            }
        }
        Ok(())
    }

    /// The element whose visibility gates an Enter trigger.
    #[inline]
    pub fn watch_target(&self) -> &str {
        self.watch.as_deref().unwrap_or(&self.targets[0])
    }
}
