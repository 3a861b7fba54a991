use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use fd_core::{ArenaBounds, BallExited, GameState, ShapeGeometry, ShapeKind, TargetHit, TrackedForExit};

/// Push `PhysicsConfig` gravity into the Rapier context whenever it changes.
pub fn sync_rapier_gravity(
    config: Res<crate::PhysicsConfig>,
    mut rapier: Query<&mut RapierConfiguration>,
) {
    if !config.is_changed() {
        return;
    }
    // RapierConfiguration lives on the context entity (component, not resource).
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = config.gravity;
    }
}

/// Build a collider matching a shape's drawable outline. Polygon outlines must
/// be convex; `None` means the hull could not be computed.
pub fn collider_for(geometry: &ShapeGeometry) -> Option<Collider> {
    match geometry {
        ShapeGeometry::Circle { radius } => Some(Collider::ball(*radius)),
        ShapeGeometry::Polygon { points } => Collider::convex_hull(points),
    }
}

/// Translate raw collision events into `TargetHit`. Pairs are matched on
/// `ShapeKind`; anything that is not a ball-target pair is ignored, so
/// non-target shapes are never painted.
pub fn detect_target_collisions(
    mut collisions: EventReader<CollisionEvent>,
    kinds: Query<&ShapeKind>,
    mut hits: EventWriter<TargetHit>,
) {
    for ev in collisions.read() {
        if let CollisionEvent::Started(a, b, _flags) = ev {
            let (Ok(kind_a), Ok(kind_b)) = (kinds.get(*a), kinds.get(*b)) else {
                continue;
            };
            let target = match (kind_a, kind_b) {
                (ShapeKind::Target, ShapeKind::Ball) => *a,
                (ShapeKind::Ball, ShapeKind::Target) => *b,
                _ => continue,
            };
            hits.write(TargetHit(target));
        }
    }
}

/// Emit `BallExited` when a tracked shape leaves the arena while a round is in
/// flight. Clearing `in_flight` here guarantees at most one event per drop.
pub fn watch_scene_exits(
    bounds: Res<ArenaBounds>,
    mut state: ResMut<GameState>,
    tracked: Query<&Transform, With<TrackedForExit>>,
    mut exits: EventWriter<BallExited>,
) {
    if !state.in_flight {
        return;
    }
    for tf in &tracked {
        if !bounds.contains(tf.translation.truncate()) {
            state.in_flight = false;
            exits.write(BallExited);
            break;
        }
    }
}
