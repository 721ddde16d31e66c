//! Roll Control UI
//!
//! Contains functions for spawning the trigger button and the result/score
//! texts under the board.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::duel::types::{
    ResultText, RollButton, ScoreText, PAGE_TEXT, ROLL_BUTTON_ENABLED,
};

use super::controller::DuelController;

/// Spawn the "Roll" button followed by the result and score texts.
pub fn spawn_roll_controls(parent: &mut ChildSpawnerCommands, controller: &DuelController) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                RollButton,
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(ROLL_BUTTON_ENABLED),
                BorderRadius::all(Val::Px(8.0)),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new("Roll"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::BLACK),
                ));
            });

            row.spawn((
                ResultText,
                Text::new(controller.result_text()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(PAGE_TEXT),
            ));

            row.spawn((
                ScoreText,
                Text::new(controller.score_text()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(PAGE_TEXT.with_alpha(0.7)),
            ));
        });
}
