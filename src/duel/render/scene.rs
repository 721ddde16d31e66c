//! Whole-board repaint
//!
//! `render_scene` is a pure function of the layout, the two faces and the
//! style. Calling it twice with the same inputs yields the same display list.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use crate::duel::types::{AppSettings, Layout, PlayerNames, ThemeSetting};

use super::shape::{draw_die, DieStyle};
use super::surface::{DisplayList, DrawCommand, TextMeasure};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub background: Color,
    pub die: DieStyle,
    pub label: Color,
    pub names: PlayerNames,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Color::srgb_u8(0x39, 0x3E, 0x46),
            die: DieStyle::default(),
            label: Color::srgb_u8(0x4E, 0xCC, 0xA3),
            names: PlayerNames::default(),
        }
    }
}

impl SceneStyle {
    pub fn from_settings(settings: &AppSettings) -> Self {
        let theme = &settings.theme;
        let defaults = ThemeSetting::default();
        Self {
            background: theme.background.to_color_or(&defaults.background),
            die: DieStyle {
                fill: theme.die_fill.to_color_or(&defaults.die_fill),
                ink: theme.die_ink.to_color_or(&defaults.die_ink),
            },
            label: theme.label.to_color_or(&defaults.label),
            names: settings.players.clone(),
        }
    }
}

/// Repaint the whole board showing faces `d1` (player 1) and `d2` (player 2).
pub fn render_scene(
    layout: &Layout,
    d1: u8,
    d2: u8,
    style: &SceneStyle,
    measure: &impl TextMeasure,
) -> DisplayList {
    let mut list = DisplayList::new();
    let surface = Rect::new(0.0, 0.0, layout.css_width, layout.css_height);

    list.push(DrawCommand::Clear { rect: surface });
    list.push(DrawCommand::FillRect {
        rect: surface,
        color: style.background,
    });

    draw_die(
        &mut list,
        Vec2::new(layout.left_x, layout.top_y),
        layout.die_size,
        d1,
        &style.die,
    );
    draw_die(
        &mut list,
        Vec2::new(layout.right_x, layout.top_y),
        layout.die_size,
        d2,
        &style.die,
    );

    let font_size = layout.label_font_size();
    let label_y = layout.label_top();
    for (text, die_x) in [
        (&style.names.player1, layout.left_x),
        (&style.names.player2, layout.right_x),
    ] {
        let center = die_x + layout.die_size / 2.0;
        let width = measure.text_width(text, font_size);
        list.push(DrawCommand::Text {
            text: text.clone(),
            origin: Vec2::new(center - width / 2.0, label_y),
            font_size,
            color: style.label,
        });
    }

    list
}

/// The neutral board shown at startup and after every resize.
pub fn render_scene_at_rest(
    layout: &Layout,
    style: &SceneStyle,
    measure: &impl TextMeasure,
) -> DisplayList {
    render_scene(layout, 1, 1, style, measure)
}
