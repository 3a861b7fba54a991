//! fd_rendering: camera, shape visuals, HUD, and the win alert overlay.
//!
//! Visuals are child entities carrying a `Mesh2d` built from the parent's
//! `ShapeGeometry`; `FillColor` changes re-key the child's material. Under
//! `cfg(test)` or the `headless` feature the plugin only spawns marker
//! children, so logic crates can compose it without a render backend.

use bevy::prelude::*;

#[cfg(not(any(test, feature = "headless")))]
mod alert;
#[cfg(not(any(test, feature = "headless")))]
mod hud;
#[cfg(not(any(test, feature = "headless")))]
mod shapes;

/// Tag component for the mesh child of a shape.
#[derive(Component, Debug)]
pub struct ShapeVisual;

/// Root node of the win alert overlay.
#[derive(Component, Debug)]
pub struct WinAlert;

/// Marker for the HUD status text.
#[derive(Component, Debug)]
pub struct HudText;

pub struct RenderingPlugin;

#[cfg(not(any(test, feature = "headless")))]
impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (shapes::setup_camera, shapes::prepare_meshes, hud::spawn_hud))
            .add_systems(
                Update,
                (
                    shapes::spawn_shape_visuals,
                    shapes::sync_fill_colors,
                    hud::update_hud,
                    alert::open_win_alert,
                    alert::dismiss_win_alert,
                ),
            );
    }
}

#[cfg(any(test, feature = "headless"))]
impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        // Test variant: no meshes/materials/UI; just a marker child per new shape.
        app.add_systems(
            Update,
            |mut commands: Commands, q_new: Query<Entity, Added<fd_core::ShapeGeometry>>| {
                for e in &q_new {
                    let child = commands.spawn((ShapeVisual,)).id();
                    commands.entity(e).add_child(child);
                }
            },
        );
    }
}
