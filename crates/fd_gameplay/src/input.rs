use bevy::prelude::*;

use fd_core::{BallDropped, Barrier, Draggable, Funnel, GameState, ResetRequested, ShapeGeometry};

/// Tracks the currently dragged barrier (if any) and whether movement exceeded
/// the tap threshold this gesture.
#[derive(Resource, Default, Debug)]
pub struct ActiveDrag {
    pub entity: Option<Entity>,
    pub started: bool,
    pub grab_offset: Vec2,
    pub last_pos: Option<Vec2>,
}

/// Convert a window cursor position (top-left origin, logical coordinates) to world coordinates.
fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?; // assume single active camera
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Unified pointer (first touch if present, else mouse) world position.
fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

/// Pointer gestures: press grabs a draggable barrier under the pointer, moving
/// past the tap threshold drags it, and a release that never became a drag
/// counts as a tap. A tap on the funnel drops the ball.
pub fn pointer_gestures(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    state: Res<GameState>,
    mut active: ResMut<ActiveDrag>,
    mut drops: EventWriter<BallDropped>,
    mut barriers: Query<(Entity, &mut Transform, &ShapeGeometry, &Draggable), With<Barrier>>,
    funnels: Query<(&Transform, &ShapeGeometry), (With<Funnel>, Without<Barrier>)>,
) {
    if state.alert_open {
        return;
    }
    let Some(window) = windows_q.iter().next() else { return };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else { return };

    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();

    if pressed {
        active.started = false;
        active.last_pos = Some(world_pos);
        active.entity = None;
        for (entity, transform, geometry, draggable) in barriers.iter() {
            if draggable.0 && point_in_shape(world_pos, transform, geometry) {
                active.entity = Some(entity);
                active.grab_offset = transform.translation.truncate() - world_pos;
                break;
            }
        }
    }

    if let Some(last) = active.last_pos {
        if world_pos.distance_squared(last) > 4.0 {
            // ~2 units of travel: this gesture is a drag, not a tap.
            active.started = true;
        }
        active.last_pos = Some(world_pos);
        if let Some(entity) = active.entity {
            match barriers.get_mut(entity) {
                Ok((_, mut transform, _, draggable)) if draggable.0 => {
                    let dest = world_pos + active.grab_offset;
                    transform.translation.x = dest.x;
                    transform.translation.y = dest.y;
                }
                // Locked mid-gesture (the ball dropped) or despawned: let go.
                _ => active.entity = None,
            }
        }
    }

    if released {
        if !active.started && active.last_pos.is_some() {
            if let Ok((funnel_tf, geometry)) = funnels.single() {
                if point_in_shape(world_pos, funnel_tf, geometry) {
                    info!("Funnel tapped");
                    drops.write(BallDropped);
                }
            }
        }
        active.entity = None;
        active.started = false;
        active.last_pos = None;
    }
}

/// Keyboard fallbacks for the pointer gestures.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<GameState>,
    mut drops: EventWriter<BallDropped>,
    mut resets: EventWriter<ResetRequested>,
) {
    if state.alert_open {
        return;
    }
    if keys.just_pressed(KeyCode::Space) {
        info!("Space: drop ball");
        drops.write(BallDropped);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        info!("R: park ball");
        resets.write(ResetRequested);
    }
}

/// Point-in-shape test in world space (rotation-aware, shapes are unscaled).
pub fn point_in_shape(p: Vec2, transform: &Transform, geometry: &ShapeGeometry) -> bool {
    let local = (transform.rotation.inverse()
        * (p - transform.translation.truncate()).extend(0.0))
    .truncate();
    match geometry {
        ShapeGeometry::Circle { radius } => local.length_squared() <= radius * radius,
        ShapeGeometry::Polygon { points } => point_in_convex_polygon(local, points),
    }
}

/// Convex containment: the point must lie left of every edge (counter-clockwise
/// winding, as produced by the `ShapeGeometry` constructors).
pub fn point_in_convex_polygon(p: Vec2, points: &[Vec2]) -> bool {
    if points.len() < 3 {
        return false;
    }
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        if (b - a).perp_dot(p - a) < 0.0 {
            return false;
        }
    }
    true
}
