//! Window size tracking
//!
//! Resize and scale-factor messages only arm the controller's debouncers;
//! the layout is recomputed once the window has been quiet long enough.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized, WindowScaleFactorChanged};

use crate::duel::roll_control::DuelController;

use super::setup::container_metrics;

pub fn track_window_changes(
    mut resized: MessageReader<WindowResized>,
    mut rescaled: MessageReader<WindowScaleFactorChanged>,
    time: Res<Time>,
    mut controller: ResMut<DuelController>,
) {
    let now = time.elapsed();
    if resized.read().count() > 0 {
        controller.on_resize(now);
    }
    // Scale-factor changes stand in for device orientation changes.
    if rescaled.read().count() > 0 {
        controller.on_orientation_change(now);
    }
}

pub fn apply_debounced_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut controller: ResMut<DuelController>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, ratio) = container_metrics(window);
    if let Some(layout) = controller
        .bypass_change_detection()
        .poll_resize(time.elapsed(), width, ratio)
    {
        controller.set_changed();
        info!(
            "Resized board to {}x{} (die {})",
            layout.css_width, layout.css_height, layout.die_size
        );
    }
}
