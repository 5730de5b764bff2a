//! Per-target tween runtime.
//!
//! A tween tracks a raw timeline position u in [0,1]; forward playback
//! advances u, reverse playback retraces it, and the directive ease maps
//! u to the emitted progress. Keeping u direction-agnostic makes a
//! mid-flight direction flip continuous: the latest requested direction
//! wins and the value never jumps.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Delayed,
    Running,
}

#[derive(Clone, Debug)]
pub struct Tween {
    duration_s: f32,
    ease: Ease,
    /// Raw timeline position, 0 = from-state, 1 = to-state.
    u: f32,
    direction: Direction,
    delay_left_s: f32,
    phase: Phase,
}

impl Tween {
    pub fn new(duration_ms: u32, ease: Ease) -> Self {
        Self {
            duration_s: duration_ms as f32 / 1000.0,
            ease,
            u: 0.0,
            direction: Direction::Forward,
            delay_left_s: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Eased forward progress at the current position.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.ease.apply(self.u)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Request playback toward an end state. Latest direction wins:
    /// an in-flight run of the opposite direction is superseded in place
    /// (no delay re-applied); a run already heading the requested way, or
    /// a tween resting at the requested end, is left untouched. A replay
    /// from a completed boundary re-applies `delay_ms`.
    pub fn play(&mut self, direction: Direction, delay_ms: f32) {
        match self.phase {
            Phase::Running => {
                if self.direction != direction {
                    self.direction = direction;
                }
            }
            Phase::Delayed => {
                if self.direction != direction {
                    // Nothing has moved yet; flipping lands back on the
                    // rest position, so the pending run is cancelled.
                    self.phase = Phase::Idle;
                    self.delay_left_s = 0.0;
                }
            }
            Phase::Idle => {
                let at_end = match direction {
                    Direction::Forward => self.u >= 1.0,
                    Direction::Reverse => self.u <= 0.0,
                };
                if at_end {
                    return;
                }
                self.direction = direction;
                self.delay_left_s = (delay_ms / 1000.0).max(0.0);
                self.phase = if self.delay_left_s > 0.0 {
                    Phase::Delayed
                } else {
                    Phase::Running
                };
            }
        }
    }

    /// Drop any pending or in-flight run, holding the current position.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.delay_left_s = 0.0;
    }

    /// Advance by dt seconds. Returns the eased forward progress when the
    /// tween produced a sample this tick (including the exact boundary
    /// sample on the completing tick), None while idle or still delayed.
    pub fn step(&mut self, dt_s: f32) -> Option<f32> {
        match self.phase {
            Phase::Idle => None,
            Phase::Delayed => {
                self.delay_left_s -= dt_s;
                if self.delay_left_s > 0.0 {
                    return None;
                }
                let overshoot = -self.delay_left_s;
                self.delay_left_s = 0.0;
                self.phase = Phase::Running;
                Some(self.advance(overshoot))
            }
            Phase::Running => Some(self.advance(dt_s)),
        }
    }

    fn advance(&mut self, dt_s: f32) -> f32 {
        let span = if self.duration_s > 0.0 {
            dt_s / self.duration_s
        } else {
            1.0
        };
        match self.direction {
            Direction::Forward => {
                self.u += span;
                if self.u >= 1.0 {
                    self.u = 1.0;
                    self.phase = Phase::Idle;
                }
            }
            Direction::Reverse => {
                self.u -= span;
                if self.u <= 0.0 {
                    self.u = 0.0;
                    self.phase = Phase::Idle;
                }
            }
        }
        self.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_mid_flight_is_continuous() {
        let mut tw = Tween::new(1000, Ease::Linear);
        tw.play(Direction::Forward, 0.0);
        tw.step(0.4);
        let before = tw.progress();
        tw.play(Direction::Reverse, 0.0);
        assert!((tw.progress() - before).abs() < 1e-6);
        let p = tw.step(0.1).unwrap();
        assert!((p - 0.3).abs() < 1e-6);
    }

    #[test]
    fn pending_delay_cancelled_by_flip() {
        let mut tw = Tween::new(500, Ease::Linear);
        tw.play(Direction::Forward, 200.0);
        assert_eq!(tw.step(0.1), None);
        tw.play(Direction::Reverse, 0.0);
        assert!(!tw.is_active());
        assert_eq!(tw.step(1.0), None);
    }

    #[test]
    fn replay_from_boundary_reapplies_delay() {
        let mut tw = Tween::new(100, Ease::Linear);
        tw.play(Direction::Forward, 0.0);
        tw.step(1.0);
        assert!(!tw.is_active());
        tw.play(Direction::Reverse, 300.0);
        assert_eq!(tw.step(0.2), None);
        assert!(tw.step(0.2).is_some());
    }
}
