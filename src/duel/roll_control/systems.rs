//! Roll Control Systems
//!
//! The Bevy `Update` frame is the next-paint callback: the animator is
//! stepped once per frame with the app clock.

use bevy::prelude::*;

use crate::duel::types::{
    ResultText, RollButton, ScoreText, ROLL_BUTTON_DISABLED, ROLL_BUTTON_ENABLED,
    ROLL_BUTTON_HOVERED,
};

use super::controller::DuelController;

/// Start a roll on a button click or the Space key.
pub fn handle_roll_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<RollButton>)>,
    time: Res<Time>,
    mut controller: ResMut<DuelController>,
) {
    let clicked = buttons.iter().any(|i| *i == Interaction::Pressed);
    if !clicked && !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    if controller.trigger(time.elapsed()) {
        info!("Roll started");
    }
}

/// Step the running roll by one frame. Runs before `handle_roll_trigger`
/// so a fresh roll paints its first shuffle on the following frame.
pub fn drive_roll_animation(time: Res<Time>, mut controller: ResMut<DuelController>) {
    if !controller.is_rolling() {
        return;
    }
    let mut rng = rand::thread_rng();
    controller.frame(time.elapsed(), &mut rng);
}

/// Mirror the controller's texts into the UI.
pub fn update_roll_texts(
    controller: Res<DuelController>,
    mut result_query: Query<&mut Text, (With<ResultText>, Without<ScoreText>)>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<ResultText>)>,
) {
    if !controller.is_changed() {
        return;
    }

    for mut text in result_query.iter_mut() {
        if text.0 != controller.result_text() {
            text.0 = controller.result_text().to_string();
        }
    }
    for mut text in score_query.iter_mut() {
        if text.0 != controller.score_text() {
            text.0 = controller.score_text().to_string();
        }
    }
}

/// Grey the button out while a roll is in flight.
pub fn update_roll_button(
    controller: Res<DuelController>,
    mut buttons: Query<(&Interaction, &mut BackgroundColor), With<RollButton>>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        let color = if !controller.trigger_enabled() {
            ROLL_BUTTON_DISABLED
        } else if *interaction == Interaction::Hovered {
            ROLL_BUTTON_HOVERED
        } else {
            ROLL_BUTTON_ENABLED
        };
        if background.0 != color {
            background.0 = color;
        }
    }
}
