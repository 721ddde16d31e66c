//! Window front end plugin

use bevy::prelude::*;

use super::render::{MonospaceMeasure, SceneStyle};
use super::roll_control::{
    drive_roll_animation, handle_roll_trigger, update_roll_button, update_roll_texts,
    DuelController,
};
use super::systems::{
    apply_debounced_layout, init_board_layout, paint_board, setup, track_window_changes,
    BoardStyle, PaintedRevision,
};
use super::types::AppSettings;

/// Everything the board needs: resources, startup and per-frame systems.
pub struct DiceDuelPlugin {
    pub settings: AppSettings,
}

impl Plugin for DiceDuelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(DuelController::new(&self.settings))
            .insert_resource(BoardStyle {
                scene: SceneStyle::from_settings(&self.settings),
                measure: MonospaceMeasure::default(),
            })
            .init_resource::<PaintedRevision>()
            .add_systems(Startup, (setup, init_board_layout).chain())
            .add_systems(
                Update,
                (
                    track_window_changes,
                    apply_debounced_layout,
                    drive_roll_animation,
                    handle_roll_trigger,
                    update_roll_texts,
                    update_roll_button,
                    paint_board,
                )
                    .chain(),
            );
    }
}
