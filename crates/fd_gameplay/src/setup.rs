use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use fd_core::{BallBundle, BarrierBundle, FunnelBundle, GameConfigRes, GameState, ResetRequested, TargetBundle};
use fd_physics::collider_for;

/// Spawn the scene from the layout literals and register every shape in
/// creation order. Ends by requesting a reset so the round starts parked.
pub fn setup_scene(
    mut commands: Commands,
    cfg: Res<GameConfigRes>,
    mut state: ResMut<GameState>,
    mut resets: EventWriter<ResetRequested>,
) {
    let layout = &cfg.0.layout;
    let bounce = cfg.0.bounce;

    let ball = commands
        .spawn((
            BallBundle::new(Vec2::new(layout.ball.park.x, layout.ball.park.y), layout.ball.radius),
            RigidBody::Dynamic,
            Collider::ball(layout.ball.radius),
            Velocity::zero(),
            Restitution {
                coefficient: bounce.ball_restitution,
                combine_rule: CoefficientCombineRule::Average,
            },
            Friction {
                coefficient: bounce.ball_friction,
                combine_rule: CoefficientCombineRule::Average,
            },
            // Parked until the first drop.
            GravityScale(0.0),
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS,
            Name::new("Ball"),
        ))
        .id();
    state.ball = Some(ball);

    let funnel = commands
        .spawn((
            FunnelBundle::new(
                Vec2::new(layout.funnel.x, layout.funnel.y),
                layout.funnel.top_width,
                layout.funnel.bottom_width,
                layout.funnel.height,
            ),
            Name::new("Funnel"),
        ))
        .id();
    state.funnel = Some(funnel);

    for barrier in &layout.barriers {
        let entity = commands
            .spawn((
                BarrierBundle::new(
                    Vec2::new(barrier.x, barrier.y),
                    barrier.width,
                    barrier.height,
                    barrier.rotation,
                ),
                // Kinematic so drags move a proper physics body.
                RigidBody::KinematicPositionBased,
                Collider::cuboid(barrier.width * 0.5, barrier.height * 0.5),
                Name::new("Barrier"),
            ))
            .id();
        state.barriers.push(entity);
    }

    for target in &layout.targets {
        let bundle = TargetBundle::new(Vec2::new(target.x, target.y), layout.target_half_extent);
        let Some(collider) = collider_for(&bundle.geometry) else {
            warn!("target at ({}, {}) has no convex outline; skipped", target.x, target.y);
            continue;
        };
        let entity = commands
            .spawn((
                bundle,
                RigidBody::Fixed,
                collider,
                // The ball passes through targets; collision events still fire.
                Sensor,
                ActiveEvents::COLLISION_EVENTS,
                Name::new("Target"),
            ))
            .id();
        state.targets.push(entity);
    }

    info!(
        "Scene ready: {} barriers, {} targets",
        state.barriers.len(),
        state.targets.len()
    );
    resets.write(ResetRequested);
}
