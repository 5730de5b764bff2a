//! Cancellable repeating tasks on the engine clock.
//!
//! Decorative effects (particle redraws, pulsing marks, the live reader
//! counter) run as tickers. Every ticker carries a liveness flag that is
//! checked before each invocation, so cancellation takes effect mid-burst
//! and teardown leaves nothing schedulable. Fire-and-forget loops are not
//! representable.

use crate::ids::TickId;
use crate::outputs::Outputs;

/// Ticker callback. Receives the elapsed interval and the tick's outputs;
/// returning false stops the ticker from the inside.
pub type TickFn = Box<dyn FnMut(f32, &mut Outputs) -> bool>;

struct Ticker {
    id: TickId,
    /// Seconds between invocations; 0 runs every frame.
    period_s: f32,
    acc_s: f32,
    alive: bool,
    callback: TickFn,
}

/// Owned set of repeating tasks.
#[derive(Default)]
pub struct TickerSet {
    tickers: Vec<Ticker>,
}

impl TickerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: TickId, period_s: f32, callback: TickFn) {
        self.tickers.push(Ticker {
            id,
            period_s: period_s.max(0.0),
            acc_s: 0.0,
            alive: true,
            callback,
        });
    }

    pub fn cancel(&mut self, id: TickId) {
        if let Some(t) = self.tickers.iter_mut().find(|t| t.id == id) {
            t.alive = false;
        }
    }

    pub fn cancel_all(&mut self) {
        self.tickers.clear();
    }

    pub fn len(&self) -> usize {
        self.tickers.iter().filter(|t| t.alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance all tickers by dt. A period of 0 fires once per frame;
    /// longer periods may fire several times after a stall, each firing
    /// re-checking the liveness flag.
    pub fn step(&mut self, dt_s: f32, outputs: &mut Outputs) {
        for t in &mut self.tickers {
            if !t.alive {
                continue;
            }
            if t.period_s <= 0.0 {
                if !(t.callback)(dt_s, outputs) {
                    t.alive = false;
                }
                continue;
            }
            t.acc_s += dt_s;
            while t.acc_s >= t.period_s {
                t.acc_s -= t.period_s;
                if !t.alive {
                    break;
                }
                if !(t.callback)(t.period_s, outputs) {
                    t.alive = false;
                }
            }
        }
        self.tickers.retain(|t| t.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_ticker_fires_on_schedule() {
        let mut set = TickerSet::new();
        let mut out = Outputs::default();
        let count = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let c = count.clone();
        set.add(
            TickId(0),
            1.0,
            Box::new(move |_, _| {
                c.set(c.get() + 1);
                true
            }),
        );
        set.step(0.5, &mut out);
        assert_eq!(count.get(), 0);
        set.step(0.6, &mut out);
        assert_eq!(count.get(), 1);
        // A long stall catches up one period at a time.
        set.step(2.0, &mut out);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn cancelled_ticker_never_fires_again() {
        let mut set = TickerSet::new();
        let mut out = Outputs::default();
        let count = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let c = count.clone();
        set.add(
            TickId(1),
            0.0,
            Box::new(move |_, _| {
                c.set(c.get() + 1);
                true
            }),
        );
        set.step(0.016, &mut out);
        set.cancel(TickId(1));
        set.step(0.016, &mut out);
        set.step(0.016, &mut out);
        assert_eq!(count.get(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn ticker_can_stop_itself() {
        let mut set = TickerSet::new();
        let mut out = Outputs::default();
        set.add(TickId(2), 0.0, Box::new(|_, _| false));
        set.step(0.016, &mut out);
        assert!(set.is_empty());
    }
}
