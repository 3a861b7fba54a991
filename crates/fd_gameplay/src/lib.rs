//! fd_gameplay: scene setup from layout literals, the game's event handlers,
//! and pointer/keyboard input.
//!
//! The round is a small loop: tap the funnel to drop the ball, the ball paints
//! any target it touches, leaving the scene unlocks the barriers and runs the
//! win check, then the ball parks off-screen for the next drop.

use bevy::prelude::*;

mod input;
mod rules;
mod setup;

pub use input::{keyboard_shortcuts, point_in_convex_polygon, point_in_shape, pointer_gestures, ActiveDrag};
pub use rules::{handle_ball_drop, handle_ball_exit, handle_reset, note_alert_dismissed, paint_hit_targets};
pub use setup::setup_scene;

pub struct GameplayPlugin;
impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDrag>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    pointer_gestures,
                    keyboard_shortcuts,
                    handle_ball_drop,
                    paint_hit_targets,
                    handle_ball_exit,
                    handle_reset,
                    note_alert_dismissed,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::{CorePlugin, GameState};

    #[test]
    fn plugin_builds_the_scene() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::input::InputPlugin);
        app.add_plugins(CorePlugin);
        app.add_plugins(GameplayPlugin);
        app.update();
        let state = app.world().resource::<GameState>();
        assert!(state.ball.is_some());
        assert!(state.funnel.is_some());
        assert_eq!(state.barriers.len(), 3);
        assert_eq!(state.targets.len(), 6);
    }
}
