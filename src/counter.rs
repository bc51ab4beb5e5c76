// Stat counters: count from 0 up to `data-count` in a fixed number of steps
// the first time the number scrolls into view.

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS, COUNTER_THRESHOLD};
use crate::dom_helpers;
use crate::error::SetupError;
use crate::reveal;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let target = target as f64;
        CounterAnimation {
            target,
            current: 0.0,
            increment: target / COUNTER_STEPS as f64,
            finished: false,
        }
    }

    /// Time between ticks, truncated to whole ms like a browser timer.
    pub fn step_ms() -> u32 {
        (COUNTER_DURATION_MS / COUNTER_STEPS as f64) as u32
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the number to display.
    pub fn tick(&mut self) -> i64 {
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
        self.current.floor() as i64
    }
}

fn run(element: Element, mut animation: CounterAnimation) {
    Timeout::new(CounterAnimation::step_ms(), move || {
        let shown = animation.tick();
        element.set_text_content(Some(&shown.to_string()));
        if !animation.is_finished() {
            run(element, animation);
        }
    })
    .forget();
}

pub fn setup(document: &Document) -> Result<(), SetupError> {
    let counters = dom_helpers::query_all_in_document(document, ".stat-number[data-count]")?;
    reveal::on_intersect(&counters, COUNTER_THRESHOLD, None, |target, observer| {
        let count = target
            .get_attribute("data-count")
            .map(|raw| dom_helpers::parse_int_prefix(&raw))
            .unwrap_or(0);
        observer.unobserve(&target);
        run(target, CounterAnimation::new(count));
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_in_forty_ticks() {
        let mut counter = CounterAnimation::new(150);
        let shown: Vec<i64> = (0..40).map(|_| counter.tick()).collect();
        assert_eq!(shown[0], 3);
        assert_eq!(shown[1], 7);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*shown.last().unwrap(), 150);
        assert!(counter.is_finished());
    }

    #[test]
    fn zero_target_finishes_at_once() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn small_targets_floor_intermediate_values() {
        let mut counter = CounterAnimation::new(4);
        let shown: Vec<i64> = (0..10).map(|_| counter.tick()).collect();
        assert_eq!(shown, vec![0; 10]);
        // float steps may land just short of the target on the 40th tick
        let mut last = 0;
        for _ in 10..41 {
            last = counter.tick();
            if counter.is_finished() {
                break;
            }
        }
        assert_eq!(last, 4);
        assert!(counter.is_finished());
    }

    #[test]
    fn tick_interval() {
        assert_eq!(CounterAnimation::step_ms(), 37);
    }
}
