//! Black-box integration tests across the published plugin APIs.
//!
//! `fd_rendering` is composed with its `headless` feature, so a full app can be
//! driven without a render backend.

use bevy::prelude::*;

pub fn build_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // AssetPlugin -> asset storage for the headless rendering variant
    // InputPlugin -> provides ButtonInput<MouseButton>/KeyCode/Touches used by
    // the gameplay input systems.
    app.add_plugins((
        bevy::asset::AssetPlugin::default(),
        bevy::input::InputPlugin,
    ));
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bevy_rapier2d::prelude::{GravityScale, Velocity};
    use fd_core::{
        BallDropped, BallExited, CorePlugin, Draggable, FillColor, GameColor, GameState, GameWon,
        TargetHit,
    };
    use fd_gameplay::GameplayPlugin;
    use fd_physics::PhysicsPlugin;
    use fd_rendering::RenderingPlugin;

    /// Advance the app by a fixed dt for `steps` iterations.
    fn advance_fixed(app: &mut App, dt: f32, steps: u32) {
        for _ in 0..steps {
            {
                let mut time = app.world_mut().resource_mut::<Time>();
                time.advance_by(Duration::from_secs_f32(dt));
            }
            app.update();
        }
    }

    fn build_game_app() -> App {
        let mut app = build_minimal_app();
        app.add_plugins(CorePlugin);
        app.add_plugins(PhysicsPlugin);
        app.add_plugins(GameplayPlugin);
        app.add_plugins(RenderingPlugin);
        app
    }

    fn ball_pos(app: &App) -> Vec2 {
        let ball = app.world().resource::<GameState>().ball.expect("ball registered");
        app.world().entity(ball).get::<Transform>().unwrap().translation.truncate()
    }

    #[test]
    fn compose_all_plugins() {
        let mut app = build_game_app();
        app.update();
        let state = app.world().resource::<GameState>();
        assert!(state.ball.is_some());
        assert_eq!(state.barriers.len(), 3);
        assert_eq!(state.targets.len(), 6);
    }

    #[test]
    fn round_starts_parked_with_visuals() {
        let mut app = build_game_app();
        app.update();
        let park = fd_config::GameConfig::default().layout.ball.park;
        assert!(ball_pos(&app).distance(Vec2::new(park.x, park.y)) < 0.5);
        // Headless rendering spawns one marker visual per shape (1 ball + 1
        // funnel + 3 barriers + 6 targets).
        let world = app.world_mut();
        let mut q = world.query::<&fd_rendering::ShapeVisual>();
        assert_eq!(q.iter(world).count(), 11);
    }

    #[test]
    fn dropped_ball_falls_under_rapier_gravity() {
        let mut app = build_game_app();
        app.update();
        app.world_mut().send_event(BallDropped);
        app.update();

        let funnel_y = fd_config::GameConfig::default().layout.funnel.y;
        // Rapier may have integrated a sliver of fall within the same frame.
        assert!((ball_pos(&app).y - funnel_y).abs() < 1.0);

        advance_fixed(&mut app, 1.0 / 60.0, 30);
        let ball = app.world().resource::<GameState>().ball.unwrap();
        let vel = app.world().entity(ball).get::<Velocity>().unwrap();
        assert!(vel.linvel.y < 0.0, "expected downward velocity, got {:?}", vel.linvel);
        assert!(
            ball_pos(&app).y < funnel_y - 0.05,
            "expected the ball to fall from {funnel_y}, at {:?}",
            ball_pos(&app)
        );
    }

    #[test]
    fn full_round_paints_wins_and_parks() {
        let mut app = build_game_app();
        app.update();

        app.world_mut().send_event(BallDropped);
        app.update();
        assert!(app.world().resource::<GameState>().in_flight);
        let barriers = app.world().resource::<GameState>().barriers.clone();
        for &b in &barriers {
            assert!(!app.world().entity(b).get::<Draggable>().unwrap().0);
        }

        // Script the flight: the ball grazes every target...
        let targets = app.world().resource::<GameState>().targets.clone();
        for &t in &targets {
            app.world_mut().send_event(TargetHit(t));
        }
        app.update();
        for &t in &targets {
            assert_eq!(app.world().entity(t).get::<FillColor>().unwrap().0, GameColor::HIT);
        }

        // ...then leaves the scene; the exit watcher picks it up.
        {
            let ball = app.world().resource::<GameState>().ball.unwrap();
            app.world_mut().entity_mut(ball).get_mut::<Transform>().unwrap().translation.y = -400.0;
        }
        app.update();
        app.update();

        let state = app.world().resource::<GameState>();
        assert!(!state.in_flight);
        assert!(state.won);
        for &b in &barriers {
            assert!(app.world().entity(b).get::<Draggable>().unwrap().0, "barriers unlock on exit");
        }
        let park = fd_config::GameConfig::default().layout.ball.park;
        assert!(
            ball_pos(&app).distance(Vec2::new(park.x, park.y)) < 0.5,
            "ball should be parked, at {:?}",
            ball_pos(&app)
        );
        let ball = app.world().resource::<GameState>().ball.unwrap();
        assert_eq!(app.world().entity(ball).get::<GravityScale>().unwrap().0, 0.0);
        assert_eq!(app.world().entity(ball).get::<Velocity>().unwrap().linvel, Vec2::ZERO);
    }

    #[test]
    fn partial_round_does_not_win() {
        let mut app = build_game_app();
        app.update();

        app.world_mut().send_event(BallDropped);
        app.update();

        let targets = app.world().resource::<GameState>().targets.clone();
        for &t in targets.iter().take(5) {
            app.world_mut().send_event(TargetHit(t));
        }
        app.update();

        app.world_mut().send_event(BallExited);
        app.update();

        assert!(app.world().resource::<Events<GameWon>>().is_empty());
        assert!(!app.world().resource::<GameState>().won);
        // Barriers still unlock even on a losing exit.
        let barriers = app.world().resource::<GameState>().barriers.clone();
        for &b in &barriers {
            assert!(app.world().entity(b).get::<Draggable>().unwrap().0);
        }
    }
}
