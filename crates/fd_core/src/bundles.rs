use bevy::prelude::*;

use crate::{Ball, Barrier, Draggable, FillColor, Funnel, GameColor, ShapeGeometry, ShapeKind, Target, TrackedForExit};

// Physics components (rigid bodies, colliders, sensors) are attached at the
// spawn site; these bundles stay free of the physics dependency.

#[derive(Bundle)]
pub struct BallBundle {
    pub ball: Ball,
    pub kind: ShapeKind,
    pub geometry: ShapeGeometry,
    pub fill: FillColor,
    pub tracked: TrackedForExit,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl BallBundle {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            ball: Ball,
            kind: ShapeKind::Ball,
            geometry: ShapeGeometry::circle(radius),
            fill: FillColor(GameColor::Red),
            tracked: TrackedForExit,
            transform: Transform::from_translation(position.extend(0.2)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}

#[derive(Bundle)]
pub struct BarrierBundle {
    pub barrier: Barrier,
    pub kind: ShapeKind,
    pub geometry: ShapeGeometry,
    pub fill: FillColor,
    pub draggable: Draggable,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl BarrierBundle {
    pub fn new(position: Vec2, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            barrier: Barrier,
            kind: ShapeKind::Barrier,
            geometry: ShapeGeometry::rectangle(width, height),
            fill: FillColor(GameColor::Gray),
            // Arrangeable until the first drop locks the layout.
            draggable: Draggable(true),
            transform: Transform::from_translation(position.extend(0.0))
                .with_rotation(Quat::from_rotation_z(rotation)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}

#[derive(Bundle)]
pub struct FunnelBundle {
    pub funnel: Funnel,
    pub kind: ShapeKind,
    pub geometry: ShapeGeometry,
    pub fill: FillColor,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl FunnelBundle {
    pub fn new(position: Vec2, top_width: f32, bottom_width: f32, height: f32) -> Self {
        Self {
            funnel: Funnel,
            kind: ShapeKind::Funnel,
            geometry: ShapeGeometry::trapezoid(top_width, bottom_width, height),
            fill: FillColor(GameColor::White),
            transform: Transform::from_translation(position.extend(0.1)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}

#[derive(Bundle)]
pub struct TargetBundle {
    pub target: Target,
    pub kind: ShapeKind,
    pub geometry: ShapeGeometry,
    pub fill: FillColor,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl TargetBundle {
    pub fn new(position: Vec2, half_extent: f32) -> Self {
        Self {
            target: Target,
            kind: ShapeKind::Target,
            geometry: ShapeGeometry::diamond(half_extent),
            fill: FillColor(GameColor::Blue),
            transform: Transform::from_translation(position.extend(0.1)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}
