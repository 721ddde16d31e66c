//! Roll animation state machine
//!
//! A roll shuffles random faces on every painted frame until the configured
//! duration has elapsed, then settles on one final random pair. Pacing is
//! purely time based: a slow display shows fewer shuffle frames, never a
//! longer roll.

use rand::Rng;
use std::time::{Duration, Instant};

use crate::duel::types::{DieValue, RollOutcome};

/// Duration used when the caller does not pick one.
pub const DEFAULT_ROLL_DURATION: Duration = Duration::from_millis(700);

/// Monotonic time source.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Blocks (or yields) until the host is ready to paint the next frame.
pub trait FrameScheduler {
    fn next_frame(&mut self);
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Frame scheduler for terminals: sleeps one frame interval per frame.
#[derive(Debug, Clone, Copy)]
pub struct SleepScheduler {
    pub frame_interval: Duration,
}

impl SleepScheduler {
    pub fn from_fps(fps: u32) -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
        }
    }
}

impl Default for SleepScheduler {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl FrameScheduler for SleepScheduler {
    fn next_frame(&mut self) {
        std::thread::sleep(self.frame_interval);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollPhase {
    Idle,
    Animating { started_at: Duration },
    Settled(RollOutcome),
}

/// What to paint for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Intermediate random faces; another frame follows.
    Shuffle(DieValue, DieValue),
    /// Final faces. Emitted exactly once per roll.
    Settle(RollOutcome),
}

impl FrameStep {
    pub fn faces(&self) -> (DieValue, DieValue) {
        match *self {
            FrameStep::Shuffle(a, b) => (a, b),
            FrameStep::Settle(outcome) => (outcome.player1, outcome.player2),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RollAnimator {
    phase: RollPhase,
    duration: Duration,
}

impl Default for RollAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_ROLL_DURATION)
    }
}

impl RollAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: RollPhase::Idle,
            duration,
        }
    }

    pub fn phase(&self) -> RollPhase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RollPhase::Animating { .. })
    }

    /// Begin a roll at `now`. Refused while a roll is already in flight.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = RollPhase::Animating { started_at: now };
        true
    }

    /// Advance by one painted frame. Returns `None` when no roll is running.
    pub fn step(&mut self, now: Duration, rng: &mut impl Rng) -> Option<FrameStep> {
        let RollPhase::Animating { started_at } = self.phase else {
            return None;
        };

        let elapsed = now.saturating_sub(started_at);
        if elapsed < self.duration {
            Some(FrameStep::Shuffle(
                DieValue::random(rng),
                DieValue::random(rng),
            ))
        } else {
            let outcome = RollOutcome::random(rng);
            self.phase = RollPhase::Settled(outcome);
            Some(FrameStep::Settle(outcome))
        }
    }
}

/// Run one complete roll: wait for a frame, step, paint, repeat until the
/// dice settle. `on_frame` sees every painted pair including the final one.
pub fn animate_roll(
    animator: &mut RollAnimator,
    clock: &impl Clock,
    scheduler: &mut impl FrameScheduler,
    rng: &mut impl Rng,
    mut on_frame: impl FnMut(DieValue, DieValue),
) -> Option<RollOutcome> {
    if !animator.start(clock.now()) {
        return None;
    }

    loop {
        scheduler.next_frame();
        match animator.step(clock.now(), rng)? {
            FrameStep::Shuffle(a, b) => on_frame(a, b),
            FrameStep::Settle(outcome) => {
                on_frame(outcome.player1, outcome.player2);
                return Some(outcome);
            }
        }
    }
}
