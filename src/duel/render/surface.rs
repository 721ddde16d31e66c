//! Display list
//!
//! Renderers never touch a real drawing surface. They append [`DrawCommand`]s
//! in device-independent units; the window front end turns them into UI
//! nodes and the rasterizer paints them into a pixel buffer.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Discard everything painted inside `rect`.
    Clear { rect: Rect },
    FillRect { rect: Rect, color: Color },
    /// A filled and stroked rounded rectangle. The stroke is centered on the
    /// outline.
    RoundedRect {
        rect: Rect,
        radius: f32,
        fill: Color,
        stroke: Color,
        line_width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text whose top-left corner is at `origin`.
    Text {
        text: String,
        origin: Vec2,
        font_size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Measures the advance width of a single line of text.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed-advance measurement for monospace fonts.
///
/// Bevy's bundled default font is Fira Mono, whose advance is 0.6 em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance_em: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance_em
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let measure = MonospaceMeasure::default();
        assert_eq!(measure.text_width("", 20.0), 0.0);
        assert!((measure.text_width("Player 1", 10.0) - 48.0).abs() < 1e-4);
        // Width counts characters, not bytes.
        assert_eq!(
            measure.text_width("\u{2691}", 10.0),
            measure.text_width("x", 10.0)
        );
    }

    #[test]
    fn test_display_list_push() {
        let mut list = DisplayList::new();
        assert!(list.is_empty());
        list.push(DrawCommand::Clear {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        });
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Clear { .. }));
    }
}
