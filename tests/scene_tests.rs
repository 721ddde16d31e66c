//! Tests for scene painting

use diceduel::duel::render::{
    rasterize, render_scene, render_scene_at_rest, DrawCommand, MonospaceMeasure, SceneStyle,
};
use diceduel::duel::types::{compute_layout, LayoutConfig};

#[test]
fn test_every_face_has_matching_pip_count() {
    let layout = compute_layout(600.0, 1.0, &LayoutConfig::default());
    for d1 in 1..=6u8 {
        for d2 in 1..=6u8 {
            let list = render_scene(
                &layout,
                d1,
                d2,
                &SceneStyle::default(),
                &MonospaceMeasure::default(),
            );
            let pips = list
                .iter()
                .filter(|c| matches!(c, DrawCommand::Circle { .. }))
                .count();
            assert_eq!(pips, (d1 + d2) as usize);
        }
    }
}

#[test]
fn test_rest_scene_shows_ones() {
    let layout = compute_layout(480.0, 1.0, &LayoutConfig::default());
    let style = SceneStyle::default();
    let measure = MonospaceMeasure::default();
    assert_eq!(
        render_scene_at_rest(&layout, &style, &measure),
        render_scene(&layout, 1, 1, &style, &measure)
    );
}

#[test]
fn test_rasterized_scene_is_repeatable() {
    let layout = compute_layout(300.0, 2.0, &LayoutConfig::default());
    let list = render_scene(
        &layout,
        6,
        3,
        &SceneStyle::default(),
        &MonospaceMeasure::default(),
    );
    let a = rasterize(&layout, &list).unwrap();
    let b = rasterize(&layout, &list).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}
