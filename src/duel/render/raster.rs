//! Software rasterizer for display lists
//!
//! Paints into an RGBA backing store sized in physical pixels
//! (`Layout::backing_width` x `Layout::backing_height`). Shapes are sampled
//! at pixel centers with no anti-aliasing. Text commands are skipped: there
//! is no font rasterizer in this path.

use bevy::color::Color;
use bevy::log::debug;
use bevy::math::{Rect, Vec2};
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::duel::types::Layout;

use super::surface::{DisplayList, DrawCommand};

fn to_rgba(color: Color) -> Rgba<u8> {
    let c = color.to_srgba();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([
        channel(c.red),
        channel(c.green),
        channel(c.blue),
        channel(c.alpha),
    ])
}

/// Distance from `p` to the outline of a rounded rectangle; negative inside.
fn rounded_rect_distance(p: Vec2, rect: Rect, radius: f32) -> f32 {
    let half = rect.half_size();
    let radius = radius.min(half.x).min(half.y).max(0.0);
    let q = (p - rect.center()).abs() - half + Vec2::splat(radius);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - radius
}

/// Largest backing store side, in physical pixels, the rasterizer accepts.
pub const MAX_BACKING_SIDE: u32 = 16_384;

/// Refuse backing stores too large to allocate.
pub fn check_backing_size(layout: &Layout) -> Result<(), String> {
    let (width, height) = (layout.backing_width, layout.backing_height);
    if width > MAX_BACKING_SIDE || height > MAX_BACKING_SIDE {
        return Err(format!(
            "Backing store {width}x{height} px exceeds the {MAX_BACKING_SIDE} px limit; lower the pixel ratio"
        ));
    }
    Ok(())
}

pub struct Rasterizer {
    image: RgbaImage,
    scale: f32,
}

impl Rasterizer {
    pub fn new(layout: &Layout) -> Result<Self, String> {
        check_backing_size(layout)?;
        Ok(Self {
            image: RgbaImage::new(layout.backing_width.max(1), layout.backing_height.max(1)),
            scale: layout.pixel_ratio,
        })
    }

    /// Physical pixel bounds covering a device-independent rectangle.
    fn pixel_bounds(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let (w, h) = self.image.dimensions();
        let clamp_x = |v: f32| (v.max(0.0) as u32).min(w);
        let clamp_y = |v: f32| (v.max(0.0) as u32).min(h);
        (
            clamp_x((rect.min.x * self.scale).floor()),
            clamp_y((rect.min.y * self.scale).floor()),
            clamp_x((rect.max.x * self.scale).ceil()),
            clamp_y((rect.max.y * self.scale).ceil()),
        )
    }

    /// Center of physical pixel `(x, y)` in device-independent units.
    fn sample_point(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5) / self.scale
    }

    fn fill_where(&mut self, bounds: Rect, color: Color, inside: impl Fn(Vec2) -> bool) {
        let pixel = to_rgba(color);
        let (x0, y0, x1, y1) = self.pixel_bounds(bounds);
        for y in y0..y1 {
            for x in x0..x1 {
                if inside(self.sample_point(x, y)) {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    pub fn paint(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { rect } => {
                let r = *rect;
                self.fill_where(r, Color::NONE, |p| r.contains(p));
            }
            DrawCommand::FillRect { rect, color } => {
                let r = *rect;
                self.fill_where(r, *color, |p| r.contains(p));
            }
            DrawCommand::RoundedRect {
                rect,
                radius,
                fill,
                stroke,
                line_width,
            } => {
                let (r, radius, half_line) = (*rect, *radius, *line_width / 2.0);
                let outer = Rect::from_corners(r.min - Vec2::splat(half_line), r.max + Vec2::splat(half_line));
                self.fill_where(r, *fill, |p| rounded_rect_distance(p, r, radius) <= 0.0);
                self.fill_where(outer, *stroke, |p| {
                    rounded_rect_distance(p, r, radius).abs() <= half_line
                });
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let (c, radius) = (*center, *radius);
                let bounds = Rect::from_center_half_size(c, Vec2::splat(radius));
                self.fill_where(bounds, *color, |p| p.distance(c) <= radius);
            }
            DrawCommand::Text { text, .. } => {
                debug!("Skipping text '{}' in software raster", text);
            }
        }
    }

    pub fn paint_all(&mut self, list: &DisplayList) {
        for command in list {
            self.paint(command);
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Rasterize `list` into a fresh backing store for `layout`.
pub fn rasterize(layout: &Layout, list: &DisplayList) -> Result<RgbaImage, String> {
    let mut raster = Rasterizer::new(layout)?;
    raster.paint_all(list);
    Ok(raster.into_image())
}

/// Rasterize and write a PNG file.
pub fn save_png(layout: &Layout, list: &DisplayList, path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    rasterize(layout, list)?
        .save(path)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
