//! Roll-and-report orchestration
//!
//! [`DuelController`] owns everything the board shows: the layout, the two
//! faces on screen, the trigger state and the result/score texts. Front ends
//! feed it events and timestamps and read the state back; it never touches a
//! window itself.

use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::Rng;
use std::time::Duration;

use crate::duel::types::{
    compute_layout, AppSettings, DieValue, Layout, LayoutConfig, PlayerNames, RollOutcome,
};

use super::animator::{FrameStep, RollAnimator};
use super::debounce::Debouncer;

pub const ROLLING_TEXT: &str = "Rolling...";
pub const EMPTY_SCORE_TEXT: &str = "\u{2014} : \u{2014}";
pub const IDLE_RESULT_TEXT: &str = "Press Roll to start";

#[derive(Resource, Debug, Clone)]
pub struct DuelController {
    animator: RollAnimator,
    layout_config: LayoutConfig,
    layout: Layout,
    faces: (DieValue, DieValue),
    names: PlayerNames,
    trigger_enabled: bool,
    result_text: String,
    score_text: String,
    last_outcome: Option<RollOutcome>,
    resize: Debouncer,
    orientation: Debouncer,
    /// Bumped whenever the painted board would change.
    revision: u64,
}

impl Default for DuelController {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl DuelController {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            animator: RollAnimator::new(settings.roll_duration()),
            layout_config: settings.layout.clone(),
            layout: compute_layout(600.0, 1.0, &settings.layout),
            faces: (DieValue::ONE, DieValue::ONE),
            names: settings.players.clone(),
            trigger_enabled: true,
            result_text: IDLE_RESULT_TEXT.to_string(),
            score_text: EMPTY_SCORE_TEXT.to_string(),
            last_outcome: None,
            resize: Debouncer::new(settings.resize_debounce()),
            orientation: Debouncer::new(settings.orientation_debounce()),
            revision: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn faces(&self) -> (DieValue, DieValue) {
        self.faces
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn is_rolling(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn last_outcome(&self) -> Option<RollOutcome> {
        self.last_outcome
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recompute the layout right away and show the board at rest.
    pub fn apply_layout(&mut self, container_width: f32, pixel_ratio: f32) -> Layout {
        self.layout = compute_layout(container_width, pixel_ratio, &self.layout_config);
        self.faces = (DieValue::ONE, DieValue::ONE);
        self.revision += 1;
        debug!(
            "Layout: {}x{} die={} ratio={}",
            self.layout.css_width, self.layout.css_height, self.layout.die_size, self.layout.pixel_ratio
        );
        self.layout
    }

    /// Start a roll. Ignored while one is in flight.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if !self.trigger_enabled || !self.animator.start(now) {
            return false;
        }
        self.trigger_enabled = false;
        self.result_text = ROLLING_TEXT.to_string();
        self.score_text = EMPTY_SCORE_TEXT.to_string();
        true
    }

    /// Advance the roll by one painted frame.
    pub fn frame(&mut self, now: Duration, rng: &mut impl Rng) -> Option<FrameStep> {
        let step = self.animator.step(now, rng)?;
        self.faces = step.faces();
        self.revision += 1;

        if let FrameStep::Settle(outcome) = step {
            self.finish(outcome);
        }
        Some(step)
    }

    fn finish(&mut self, outcome: RollOutcome) {
        self.score_text = outcome.score();
        self.result_text = outcome.message(&self.names);
        self.last_outcome = Some(outcome);
        self.trigger_enabled = true;
        info!("{}", self.result_text);
    }

    pub fn on_resize(&mut self, now: Duration) {
        self.resize.poke(now);
    }

    pub fn on_orientation_change(&mut self, now: Duration) {
        self.orientation.poke(now);
    }

    /// Fire any debounced resize whose quiet period has elapsed. Both signals
    /// share one recomputation per poll.
    pub fn poll_resize(
        &mut self,
        now: Duration,
        container_width: f32,
        pixel_ratio: f32,
    ) -> Option<Layout> {
        let resized = self.resize.poll(now);
        let reoriented = self.orientation.poll(now);
        if resized || reoriented {
            Some(self.apply_layout(container_width, pixel_ratio))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_trigger_disables_and_resets_texts() {
        let mut c = DuelController::default();
        assert!(c.trigger_enabled());
        assert!(c.trigger(ms(0)));
        assert!(!c.trigger_enabled());
        assert_eq!(c.result_text(), ROLLING_TEXT);
        assert_eq!(c.score_text(), EMPTY_SCORE_TEXT);
        // Second trigger while rolling is ignored.
        assert!(!c.trigger(ms(10)));
    }

    #[test]
    fn test_full_cycle_reports_outcome_and_reenables() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = DuelController::default();
        c.trigger(ms(0));

        let mut t = 0;
        let outcome = loop {
            t += 16;
            match c.frame(ms(t), &mut rng) {
                Some(FrameStep::Settle(outcome)) => break outcome,
                Some(FrameStep::Shuffle(..)) => assert!(!c.trigger_enabled()),
                None => panic!("roll stopped without settling"),
            }
        };

        assert!(t >= 800);
        assert!(c.trigger_enabled());
        assert_eq!(c.faces(), (outcome.player1, outcome.player2));
        assert_eq!(c.score_text(), outcome.score());
        assert_eq!(c.result_text(), outcome.message(&PlayerNames::default()));
        assert_eq!(c.last_outcome(), Some(outcome));
        assert_eq!(c.frame(ms(t + 16), &mut rng), None);
    }

    #[test]
    fn test_frames_bump_revision() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut c = DuelController::default();
        let before = c.revision();
        assert_eq!(c.frame(ms(0), &mut rng), None);
        assert_eq!(c.revision(), before);

        c.trigger(ms(0));
        c.frame(ms(16), &mut rng);
        assert_eq!(c.revision(), before + 1);
    }

    #[test]
    fn test_resize_burst_recomputes_once() {
        let mut c = DuelController::default();
        let mut recomputed = 0;
        for i in 0..20u64 {
            c.on_resize(ms(i * 5));
            if c.poll_resize(ms(i * 5), 500.0, 1.0).is_some() {
                recomputed += 1;
            }
        }
        for t in 100..1000 {
            if c.poll_resize(ms(t), 500.0, 1.0).is_some() {
                recomputed += 1;
            }
        }
        assert_eq!(recomputed, 1);
        assert_eq!(c.layout().css_width, 500.0);
    }

    #[test]
    fn test_resize_and_orientation_in_one_poll_recompute_once() {
        let mut c = DuelController::default();
        c.on_resize(ms(0));
        c.on_orientation_change(ms(0));
        // Resize window (120 ms) elapses first.
        assert!(c.poll_resize(ms(120), 400.0, 1.0).is_some());
        assert!(c.poll_resize(ms(150), 400.0, 1.0).is_none());
        assert!(c.poll_resize(ms(200), 400.0, 1.0).is_some());
        assert!(c.poll_resize(ms(1000), 400.0, 1.0).is_none());
    }

    #[test]
    fn test_resize_resets_faces_to_rest() {
        let mut rng = StdRng::seed_from_u64(13);
        let settings = AppSettings {
            roll_duration_ms: 0,
            ..AppSettings::default()
        };
        let mut c = DuelController::new(&settings);
        c.trigger(ms(0));
        c.frame(ms(16), &mut rng);
        assert!(c.last_outcome().is_some());

        c.on_resize(ms(20));
        let layout = c.poll_resize(ms(500), 320.0, 2.0).unwrap();
        assert_eq!(layout.backing_width, 640);
        assert_eq!(c.faces(), (DieValue::ONE, DieValue::ONE));
        // The outcome text survives a resize.
        assert_eq!(c.result_text(), c.last_outcome().unwrap().message(&PlayerNames::default()));
    }
}
