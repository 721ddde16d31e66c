//! Scene setup
//!
//! Spawns the camera and the page: the board on top, the roll controls below.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::duel::roll_control::{spawn_roll_controls, DuelController};
use crate::duel::types::{BoardRoot, PAGE_BACKGROUND};

/// Horizontal padding between the window edge and the board container.
pub const PAGE_PADDING: f32 = 16.0;

/// Container width and pixel ratio for the primary window.
pub fn container_metrics(window: &Window) -> (f32, f32) {
    let width = (window.width() - PAGE_PADDING * 2.0).max(0.0);
    (width, window.scale_factor())
}

pub fn setup(mut commands: Commands, controller: Res<DuelController>) {
    commands.spawn(Camera2d);

    let layout = *controller.layout();
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                padding: UiRect::all(Val::Px(PAGE_PADDING)),
                ..default()
            },
            BackgroundColor(PAGE_BACKGROUND),
        ))
        .with_children(|page| {
            page.spawn((
                BoardRoot,
                Node {
                    width: Val::Px(layout.css_width),
                    height: Val::Px(layout.css_height),
                    overflow: Overflow::clip(),
                    ..default()
                },
            ));
            spawn_roll_controls(page, &controller);
        });
}

/// Measure the window once at startup so the first paint uses real geometry.
pub fn init_board_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controller: ResMut<DuelController>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, ratio) = container_metrics(window);
    let layout = controller.apply_layout(width, ratio);
    info!(
        "Board {}x{} (backing {}x{})",
        layout.css_width, layout.css_height, layout.backing_width, layout.backing_height
    );
}
