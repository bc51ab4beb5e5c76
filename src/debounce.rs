//! Last-write-wins debounce.
//!
//! `Debounce` is the bookkeeping: every trigger hands out a fresh token and
//! only the newest token may settle, once. `Debouncer` drives it with a
//! `gloo_timers` timeout per trigger; replacing the stored timeout drops the
//! previous one, which clears it.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Debounce {
    latest: u64,
    settled: bool,
}

impl Debounce {
    pub fn new() -> Self {
        Debounce::default()
    }

    /// Register an event; any earlier pending token is now stale.
    pub fn trigger(&mut self) -> u64 {
        self.latest += 1;
        self.settled = false;
        self.latest
    }

    /// Called when a token's quiet window has elapsed. True exactly once,
    /// and only for the most recent token.
    pub fn settle(&mut self, token: u64) -> bool {
        if token == self.latest && !self.settled {
            self.settled = true;
            true
        } else {
            false
        }
    }
}

pub struct Debouncer {
    window_ms: u32,
    state: Rc<RefCell<Debounce>>,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Debouncer {
            window_ms,
            state: Rc::new(RefCell::new(Debounce::new())),
            pending: None,
        }
    }

    /// Run `action` once `window_ms` pass without another call to `call`.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let token = self.state.borrow_mut().trigger();
        let state = Rc::clone(&self.state);
        self.pending = Some(Timeout::new(self.window_ms, move || {
            if state.borrow_mut().settle(token) {
                action();
            }
        }));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays resize events at the given times through a fake timer queue
    /// and returns the times at which the debounced action ran.
    fn replay(events: &[u32], window: u32) -> Vec<u32> {
        let mut debounce = Debounce::new();
        let mut timers: Vec<(u32, u64)> = Vec::new();
        let mut fired = Vec::new();
        let mut events = events.iter().peekable();

        loop {
            let next_timer = timers.iter().map(|(at, _)| *at).min();
            match (events.peek(), next_timer) {
                (Some(&&at), Some(due)) if at < due => {
                    events.next();
                    timers.push((at + window, debounce.trigger()));
                }
                (Some(&&at), None) => {
                    events.next();
                    timers.push((at + window, debounce.trigger()));
                }
                (_, Some(due)) => {
                    let idx = timers.iter().position(|(at, _)| *at == due).unwrap();
                    let (_, token) = timers.remove(idx);
                    if debounce.settle(token) {
                        fired.push(due);
                    }
                }
                (None, None) => break,
            }
        }
        fired
    }

    #[test]
    fn burst_fires_once_after_quiet_window() {
        assert_eq!(replay(&[0, 16, 32, 48, 120, 310], 200), vec![510]);
    }

    #[test]
    fn separated_bursts_fire_separately() {
        assert_eq!(replay(&[0, 50, 400, 420, 1000], 200), vec![250, 620, 1200]);
    }

    #[test]
    fn stale_token_never_settles() {
        let mut debounce = Debounce::new();
        let first = debounce.trigger();
        let second = debounce.trigger();
        assert!(!debounce.settle(first));
        assert!(debounce.settle(second));
        assert!(!debounce.settle(second));
    }
}
