//! Board geometry
//!
//! The layout is a value object: it is derived from the container width and the
//! device pixel ratio, and replaced wholesale whenever either changes.

use bevy::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Gap between the bottom edge of a die and the top of its label.
pub const LABEL_SPACING: f32 = 8.0;

/// Smallest label font size, regardless of die size.
pub const MIN_LABEL_FONT_SIZE: f32 = 12.0;

/// Tunable constants for [`compute_layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_max_width")]
    pub max_width: f32,

    #[serde(default = "default_min_width")]
    pub min_width: f32,

    /// Surface height as a fraction of surface width.
    #[serde(default = "default_height_ratio")]
    pub height_ratio: f32,

    #[serde(default = "default_min_height")]
    pub min_height: f32,

    #[serde(default = "default_outer_margin")]
    pub outer_margin: f32,

    #[serde(default = "default_min_gap")]
    pub min_gap: f32,

    /// Gap between the dice as a fraction of surface width.
    #[serde(default = "default_gap_ratio")]
    pub gap_ratio: f32,

    /// Vertical band reserved under the dice for the player labels.
    #[serde(default = "default_label_band")]
    pub label_band: f32,

    #[serde(default = "default_min_top")]
    pub min_top: f32,

    #[serde(default = "default_min_die_size")]
    pub min_die_size: f32,
}

fn default_max_width() -> f32 {
    760.0
}
fn default_min_width() -> f32 {
    96.0
}
fn default_height_ratio() -> f32 {
    0.48
}
fn default_min_height() -> f32 {
    240.0
}
fn default_outer_margin() -> f32 {
    20.0
}
fn default_min_gap() -> f32 {
    16.0
}
fn default_gap_ratio() -> f32 {
    0.03
}
fn default_label_band() -> f32 {
    40.0
}
fn default_min_top() -> f32 {
    12.0
}
fn default_min_die_size() -> f32 {
    8.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            min_width: default_min_width(),
            height_ratio: default_height_ratio(),
            min_height: default_min_height(),
            outer_margin: default_outer_margin(),
            min_gap: default_min_gap(),
            gap_ratio: default_gap_ratio(),
            label_band: default_label_band(),
            min_top: default_min_top(),
            min_die_size: default_min_die_size(),
        }
    }
}

/// Computed geometry for drawing one frame of the board.
///
/// All positions are in device-independent units with the origin at the
/// top-left corner of the surface. `backing_width`/`backing_height` are the
/// physical pixel dimensions of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub die_size: f32,
    pub margin: f32,
    pub gap: f32,
    pub left_x: f32,
    pub right_x: f32,
    pub top_y: f32,
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl Default for Layout {
    /// Geometry used before the first container measurement arrives: a
    /// 600 unit container at pixel ratio 1.
    fn default() -> Self {
        compute_layout(600.0, 1.0, &LayoutConfig::default())
    }
}

impl Layout {
    pub fn left_die_rect(&self) -> Rect {
        square(Vec2::new(self.left_x, self.top_y), self.die_size)
    }

    pub fn right_die_rect(&self) -> Rect {
        square(Vec2::new(self.right_x, self.top_y), self.die_size)
    }

    pub fn surface_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.css_width, self.css_height)
    }

    /// Top of the label text line under both dice.
    pub fn label_top(&self) -> f32 {
        self.top_y + self.die_size + LABEL_SPACING
    }

    pub fn label_font_size(&self) -> f32 {
        MIN_LABEL_FONT_SIZE.max((self.die_size * 0.12).floor())
    }
}

fn square(corner: Vec2, size: f32) -> Rect {
    Rect::from_corners(corner, corner + Vec2::splat(size))
}

/// Normalize a reported pixel ratio. Hosts that report nothing useful get 1.
pub fn sanitize_pixel_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Compute the board geometry for a container of `container_width`
/// device-independent units on a display with `pixel_ratio` physical pixels
/// per unit.
pub fn compute_layout(container_width: f32, pixel_ratio: f32, config: &LayoutConfig) -> Layout {
    let measured = if container_width.is_finite() {
        container_width.max(0.0).floor()
    } else {
        0.0
    };
    let pixel_ratio = sanitize_pixel_ratio(pixel_ratio);

    let css_width = measured.min(config.max_width).max(config.min_width);
    let css_height = config.min_height.max((css_width * config.height_ratio).floor());

    let margin = config.outer_margin;
    let gap = config.min_gap.max((css_width * config.gap_ratio).floor());
    let available_width = css_width - margin * 2.0;

    // Either axis can be the binding constraint.
    let by_width = ((available_width - gap) / 2.0).floor();
    let by_height = (css_height - margin * 2.0 - config.label_band).floor();
    let die_size = by_width.min(by_height).max(config.min_die_size);

    let total_dice_width = die_size * 2.0 + gap;
    let left_x = margin.max(((css_width - total_dice_width) / 2.0).floor());
    let top_y = config
        .min_top
        .max(((css_height - die_size - config.label_band) / 2.0).floor());

    Layout {
        die_size,
        margin,
        gap,
        left_x,
        right_x: left_x + die_size + gap,
        top_y,
        css_width,
        css_height,
        pixel_ratio,
        backing_width: (css_width * pixel_ratio).floor() as u32,
        backing_height: (css_height * pixel_ratio).floor() as u32,
    }
}
