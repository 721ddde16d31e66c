//! Trailing-edge debounce
//!
//! Every `poke` pushes the deadline out by the quiet period; `poll` fires once
//! the deadline has passed, so a burst of events collapses into one action.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record an event at `now`, restarting the quiet period.
    pub fn poke(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_idle_debouncer_never_fires() {
        let mut d = Debouncer::new(ms(120));
        assert!(!d.poll(ms(10_000)));
    }

    #[test]
    fn test_burst_fires_once() {
        let mut d = Debouncer::new(ms(120));
        let mut fired = 0;
        for t in (0..100).step_by(10) {
            d.poke(ms(t));
            if d.poll(ms(t)) {
                fired += 1;
            }
        }
        // Last poke at 90 ms; nothing until 210 ms.
        assert!(!d.poll(ms(209)));
        for t in 210..400 {
            if d.poll(ms(t)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let mut d = Debouncer::new(ms(100));
        d.poke(ms(0));
        assert!(d.poll(ms(100)));
        d.poke(ms(500));
        assert!(!d.poll(ms(550)));
        assert!(d.poll(ms(600)));
    }
}
