//! Board painting
//!
//! Turns the scene's display list into absolutely positioned UI nodes under
//! [`BoardRoot`]. Bevy UI works in logical pixels and scales by the window's
//! scale factor, which gives the physical-pixel backing store for free.

use bevy::prelude::*;

use crate::duel::render::{render_scene, DrawCommand, MonospaceMeasure, SceneStyle};
use crate::duel::roll_control::DuelController;
use crate::duel::types::{BoardRoot, SceneNode};

/// Style and text metrics used for every repaint.
#[derive(Resource, Default)]
pub struct BoardStyle {
    pub scene: SceneStyle,
    pub measure: MonospaceMeasure,
}

/// Controller revision currently on screen.
#[derive(Resource, Default)]
pub struct PaintedRevision(pub Option<u64>);

fn absolute(rect: Rect) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(rect.min.x),
        top: Val::Px(rect.min.y),
        width: Val::Px(rect.width()),
        height: Val::Px(rect.height()),
        ..default()
    }
}

fn spawn_command(commands: &mut Commands, board: Entity, command: &DrawCommand) {
    match command {
        // Old nodes are despawned before a repaint.
        DrawCommand::Clear { .. } => {}
        DrawCommand::FillRect { rect, color } => {
            commands.spawn((SceneNode, ChildOf(board), absolute(*rect), BackgroundColor(*color)));
        }
        DrawCommand::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
            line_width,
        } => {
            // UI borders are drawn inside the node; grow it so the stroke is
            // centered on the outline.
            let half = Vec2::splat(line_width / 2.0);
            let outer = Rect::from_corners(rect.min - half, rect.max + half);
            let mut node = absolute(outer);
            node.border = UiRect::all(Val::Px(*line_width));
            commands.spawn((
                SceneNode,
                ChildOf(board),
                node,
                BackgroundColor(*fill),
                BorderColor::all(*stroke),
                BorderRadius::all(Val::Px(radius + line_width / 2.0)),
            ));
        }
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            let bounds = Rect::from_center_half_size(*center, Vec2::splat(*radius));
            commands.spawn((
                SceneNode,
                ChildOf(board),
                absolute(bounds),
                BackgroundColor(*color),
                BorderRadius::MAX,
            ));
        }
        DrawCommand::Text {
            text,
            origin,
            font_size,
            color,
        } => {
            commands.spawn((
                SceneNode,
                ChildOf(board),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(origin.x),
                    top: Val::Px(origin.y),
                    ..default()
                },
                Text::new(text.clone()),
                TextFont {
                    font_size: *font_size,
                    ..default()
                },
                TextColor(*color),
            ));
        }
    }
}

/// Repaint the board whenever the controller's revision moves on.
pub fn paint_board(
    mut commands: Commands,
    controller: Res<DuelController>,
    style: Res<BoardStyle>,
    mut painted: ResMut<PaintedRevision>,
    mut board_query: Query<(Entity, &mut Node), With<BoardRoot>>,
    old_nodes: Query<Entity, With<SceneNode>>,
) {
    if painted.0 == Some(controller.revision()) {
        return;
    }
    let Ok((board, mut board_node)) = board_query.single_mut() else {
        return;
    };

    let layout = controller.layout();
    board_node.width = Val::Px(layout.css_width);
    board_node.height = Val::Px(layout.css_height);

    for entity in old_nodes.iter() {
        commands.entity(entity).despawn();
    }

    let (d1, d2) = controller.faces();
    let list = render_scene(layout, d1.get(), d2.get(), &style.scene, &style.measure);
    for command in &list {
        spawn_command(&mut commands, board, command);
    }

    painted.0 = Some(controller.revision());
}
