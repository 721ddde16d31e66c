//! Die face shape
//!
//! Draws one rounded-square die with the conventional pip layout. All
//! proportions scale with the edge length so the face stays recognizable from
//! thumbnail size up.

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use super::surface::{DisplayList, DrawCommand};

/// Pip distance from the face center, as a fraction of the edge length.
pub const PIP_OFFSET_RATIO: f32 = 0.28;
pub const PIP_RADIUS_RATIO: f32 = 0.06;
pub const MIN_PIP_RADIUS: f32 = 4.0;
pub const CORNER_RADIUS_RATIO: f32 = 0.09;
pub const MIN_CORNER_RADIUS: f32 = 8.0;
pub const OUTLINE_RATIO: f32 = 0.035;
pub const MIN_OUTLINE: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieStyle {
    pub fill: Color,
    /// Outline and pip color.
    pub ink: Color,
}

impl Default for DieStyle {
    fn default() -> Self {
        Self {
            fill: Color::srgb_u8(0xFF, 0xFF, 0xFF),
            ink: Color::srgb_u8(0x22, 0x28, 0x31),
        }
    }
}

const FACE_1: &[(f32, f32)] = &[(0.0, 0.0)];
const FACE_2: &[(f32, f32)] = &[(-1.0, -1.0), (1.0, 1.0)];
const FACE_3: &[(f32, f32)] = &[(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)];
const FACE_4: &[(f32, f32)] = &[(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
const FACE_5: &[(f32, f32)] = &[
    (-1.0, -1.0),
    (1.0, -1.0),
    (0.0, 0.0),
    (-1.0, 1.0),
    (1.0, 1.0),
];
const FACE_6: &[(f32, f32)] = &[
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (1.0, 1.0),
];

/// Pip positions for `face` in units of the pip offset, relative to the face
/// center (y grows downwards). Unknown faces have no pips.
pub fn pip_offsets(face: u8) -> &'static [(f32, f32)] {
    match face {
        1 => FACE_1,
        2 => FACE_2,
        3 => FACE_3,
        4 => FACE_4,
        5 => FACE_5,
        6 => FACE_6,
        _ => &[],
    }
}

pub fn corner_radius(size: f32) -> f32 {
    MIN_CORNER_RADIUS.max(size * CORNER_RADIUS_RATIO)
}

pub fn outline_width(size: f32) -> f32 {
    MIN_OUTLINE.max((size * OUTLINE_RATIO).floor())
}

pub fn pip_radius(size: f32) -> f32 {
    MIN_PIP_RADIUS.max(size * PIP_RADIUS_RATIO)
}

/// Append one die with its top-left corner at `origin`.
pub fn draw_die(list: &mut DisplayList, origin: Vec2, size: f32, face: u8, style: &DieStyle) {
    list.push(DrawCommand::RoundedRect {
        rect: Rect::from_corners(origin, origin + Vec2::splat(size)),
        radius: corner_radius(size),
        fill: style.fill,
        stroke: style.ink,
        line_width: outline_width(size),
    });

    let center = origin + Vec2::splat(size / 2.0);
    let offset = size * PIP_OFFSET_RATIO;
    let radius = pip_radius(size);

    for &(dx, dy) in pip_offsets(face) {
        list.push(DrawCommand::Circle {
            center: center + Vec2::new(dx, dy) * offset,
            radius,
            color: style.ink,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pips(list: &DisplayList) -> Vec<Vec2> {
        list.iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_pip_count_matches_face() {
        for face in 1..=6u8 {
            let mut list = DisplayList::new();
            draw_die(&mut list, Vec2::ZERO, 100.0, face, &DieStyle::default());
            assert_eq!(pips(&list).len(), face as usize, "face {face}");
        }
    }

    #[test]
    fn test_pips_are_symmetric_about_center() {
        let origin = Vec2::new(30.0, 12.0);
        let size = 150.0;
        let center = origin + Vec2::splat(size / 2.0);

        for face in 1..=6u8 {
            let mut list = DisplayList::new();
            draw_die(&mut list, origin, size, face, &DieStyle::default());
            let positions = pips(&list);
            for p in &positions {
                let mirrored = center * 2.0 - *p;
                assert!(
                    positions.iter().any(|q| q.distance(mirrored) < 1e-3),
                    "face {face}: pip {p:?} has no mirror"
                );
            }
        }
    }

    #[test]
    fn test_pips_stay_inside_the_face() {
        let size = 40.0;
        for face in 1..=6u8 {
            let mut list = DisplayList::new();
            draw_die(&mut list, Vec2::ZERO, size, face, &DieStyle::default());
            for p in pips(&list) {
                let r = pip_radius(size);
                assert!(p.x - r >= 0.0 && p.x + r <= size);
                assert!(p.y - r >= 0.0 && p.y + r <= size);
            }
        }
    }

    #[test]
    fn test_unknown_face_draws_body_only() {
        for face in [0u8, 7, 255] {
            let mut list = DisplayList::new();
            draw_die(&mut list, Vec2::ZERO, 100.0, face, &DieStyle::default());
            assert_eq!(list.len(), 1);
            assert!(matches!(list.commands()[0], DrawCommand::RoundedRect { .. }));
        }
    }

    #[test]
    fn test_proportions_have_floors() {
        assert_eq!(corner_radius(10.0), MIN_CORNER_RADIUS);
        assert!((corner_radius(200.0) - 18.0).abs() < 1e-3);
        assert_eq!(outline_width(10.0), MIN_OUTLINE);
        assert_eq!(outline_width(200.0), 7.0);
        assert_eq!(pip_radius(10.0), MIN_PIP_RADIUS);
        assert!((pip_radius(200.0) - 12.0).abs() < 1e-3);
    }
}
