//! fd_physics: Rapier2D integration + the framework-edge systems.
//!
//! Responsibilities:
//! * Install Rapier and keep its gravity in sync with `PhysicsConfig`.
//! * Translate raw collision events into `TargetHit` (tag discrimination, no names).
//! * Watch tracked shapes and emit `BallExited` when one leaves the arena.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

mod config;
mod systems;

pub use config::PhysicsConfig;
pub use systems::{collider_for, detect_target_collisions, sync_rapier_gravity, watch_scene_exits};

pub struct PhysicsPlugin;
impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsConfig>();

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(50.0));

        app.add_systems(
            Update,
            (sync_rapier_gravity, detect_target_collisions, watch_scene_exits),
        );
    }
}
