//! Simulated newsletter submission.
//!
//! Idle -> Submitting -> Confirmed -> Idle, with dwell times on the
//! engine clock. Submissions while a run is in flight are ignored, and
//! every visual state (button label, disabled flag, confirmation message)
//! is emitted as ordinary property changes so the host stays dumb.

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::outputs::{Change, Event, Outputs};
use crate::value::Value;

/// Handle the form's property changes are keyed by.
pub const NEWSLETTER_TARGET: &str = "newsletter-form";

const LABEL_IDLE: &str = "Subscribe";
const LABEL_SUBMITTING: &str = "Subscribing...";
const LABEL_CONFIRMED: &str = "Subscribed!";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsletterConfig {
    /// Simulated round-trip before confirmation.
    pub submit_dwell_s: f32,
    /// How long the confirmation stays up before the form resets.
    pub confirm_dwell_s: f32,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            submit_dwell_s: 1.5,
            confirm_dwell_s: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum State {
    Idle,
    Submitting { email: String, left_s: f32 },
    Confirmed { left_s: f32 },
}

#[derive(Debug)]
pub struct NewsletterForm {
    target: TargetHandle,
    cfg: NewsletterConfig,
    state: State,
}

impl NewsletterForm {
    pub fn new(cfg: NewsletterConfig) -> Self {
        Self {
            target: NEWSLETTER_TARGET.to_string(),
            cfg,
            state: State::Idle,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// Begin a simulated submission. Ignored unless the form is idle.
    pub fn submit(&mut self, email: &str, out: &mut Outputs) {
        if !self.is_idle() {
            log::debug!("newsletter submit ignored; already in flight");
            return;
        }
        self.state = State::Submitting {
            email: email.to_string(),
            left_s: self.cfg.submit_dwell_s,
        };
        self.emit_button(LABEL_SUBMITTING, true, out);
    }

    /// Advance the dwell clocks.
    pub fn update(&mut self, dt_s: f32, out: &mut Outputs) {
        match &mut self.state {
            State::Idle => {}
            State::Submitting { email, left_s } => {
                *left_s -= dt_s;
                if *left_s <= 0.0 {
                    let email = email.clone();
                    self.emit_button(LABEL_CONFIRMED, true, out);
                    out.push_change(Change {
                        target: self.target.clone(),
                        prop: "message".into(),
                        value: Value::Text(format!(
                            "Welcome aboard! Check {email} for your confirmation."
                        )),
                    });
                    out.push_event(Event::NewsletterConfirmed { email });
                    self.state = State::Confirmed {
                        left_s: self.cfg.confirm_dwell_s,
                    };
                }
            }
            State::Confirmed { left_s } => {
                *left_s -= dt_s;
                if *left_s <= 0.0 {
                    self.emit_button(LABEL_IDLE, false, out);
                    out.push_change(Change {
                        target: self.target.clone(),
                        prop: "message".into(),
                        value: Value::Text(String::new()),
                    });
                    self.state = State::Idle;
                }
            }
        }
    }

    /// Drop any in-flight run without emitting.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    fn emit_button(&self, label: &str, disabled: bool, out: &mut Outputs) {
        out.push_change(Change {
            target: self.target.clone(),
            prop: "button_text".into(),
            value: Value::Text(label.to_string()),
        });
        out.push_change(Change {
            target: self.target.clone(),
            prop: "button_disabled".into(),
            value: Value::Bool(disabled),
        });
    }
}
