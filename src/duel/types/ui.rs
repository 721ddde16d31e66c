//! UI marker components for the window front end

use bevy::prelude::*;

/// The node that hosts the board; sized to the current layout.
#[derive(Component)]
pub struct BoardRoot;

/// A node spawned from one draw command. Rebuilt on every repaint.
#[derive(Component)]
pub struct SceneNode;

/// The trigger button.
#[derive(Component)]
pub struct RollButton;

/// Text showing the latest roll outcome.
#[derive(Component)]
pub struct ResultText;

/// Text showing the `a : b` score pair.
#[derive(Component)]
pub struct ScoreText;

pub const ROLL_BUTTON_ENABLED: Color = Color::srgb(0.306, 0.8, 0.639);
pub const ROLL_BUTTON_HOVERED: Color = Color::srgb(0.4, 0.88, 0.72);
pub const ROLL_BUTTON_DISABLED: Color = Color::srgb(0.35, 0.38, 0.42);
pub const PAGE_BACKGROUND: Color = Color::srgb(0.133, 0.157, 0.192);
pub const PAGE_TEXT: Color = Color::srgb(0.93, 0.93, 0.93);
