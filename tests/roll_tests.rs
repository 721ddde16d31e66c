//! Tests for the roll cycle

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use diceduel::duel::roll_control::{
    animate_roll, Clock, DuelController, FrameScheduler, FrameStep, RollAnimator, EMPTY_SCORE_TEXT,
};
use diceduel::duel::types::{AppSettings, DieValue, RollOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Default)]
struct TestClock(Rc<Cell<Duration>>);

impl Clock for TestClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

struct TestScheduler {
    clock: TestClock,
    frame: Duration,
    frames: u32,
}

impl FrameScheduler for TestScheduler {
    fn next_frame(&mut self) {
        self.frames += 1;
        self.clock.0.set(self.clock.0.get() + self.frame);
    }
}

fn outcome(a: u8, b: u8) -> RollOutcome {
    RollOutcome::new(DieValue::new(a).unwrap(), DieValue::new(b).unwrap())
}

#[test]
fn test_outcome_messages() {
    let names = AppSettings::default().players;
    assert_eq!(outcome(5, 3).message(&names), "Player 1 Wins! (5 : 3)");
    assert_eq!(outcome(2, 2).message(&names), "Draw! (2 : 2)");
    assert_eq!(outcome(1, 6).message(&names), "Player 2 Wins! ⚑ (1 : 6)");
}

#[test]
fn test_roll_resolves_once_with_valid_values() {
    for seed in 0..20 {
        let clock = TestClock::default();
        let mut scheduler = TestScheduler {
            clock: clock.clone(),
            frame: Duration::from_millis(17),
            frames: 0,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut animator = RollAnimator::new(Duration::from_millis(750));

        let result = animate_roll(&mut animator, &clock, &mut scheduler, &mut rng, |_, _| {})
            .expect("roll completes");
        assert!((1..=6).contains(&result.player1.get()));
        assert!((1..=6).contains(&result.player2.get()));
        assert!(scheduler.frames >= 1);
        assert!(clock.now() >= Duration::from_millis(750));

        // Already settled: stepping again produces nothing.
        assert_eq!(animator.step(clock.now(), &mut rng), None);
    }
}

#[test]
fn test_slow_frames_do_not_lengthen_the_roll() {
    let clock = TestClock::default();
    let mut scheduler = TestScheduler {
        clock: clock.clone(),
        frame: Duration::from_millis(400),
        frames: 0,
    };
    let mut rng = StdRng::seed_from_u64(9);
    let mut animator = RollAnimator::new(Duration::from_millis(800));
    animate_roll(&mut animator, &clock, &mut scheduler, &mut rng, |_, _| {});
    // 400 ms shuffle, then settle at 800 ms.
    assert_eq!(scheduler.frames, 2);
}

#[test]
fn test_controller_cycle_with_custom_duration() {
    let settings = AppSettings {
        roll_duration_ms: 100,
        ..AppSettings::default()
    };
    let mut controller = DuelController::new(&settings);
    let mut rng = StdRng::seed_from_u64(21);

    assert!(controller.trigger(Duration::ZERO));
    assert_eq!(controller.score_text(), EMPTY_SCORE_TEXT);

    let mut shuffles = 0;
    let mut now = Duration::ZERO;
    loop {
        now += Duration::from_millis(10);
        match controller.frame(now, &mut rng) {
            Some(FrameStep::Shuffle(..)) => shuffles += 1,
            Some(FrameStep::Settle(_)) => break,
            None => panic!("controller stopped rolling"),
        }
    }
    assert_eq!(shuffles, 9);
    assert!(controller.trigger_enabled());
    assert!(controller.trigger(now));
}
