use bevy::prelude::*;
use bevy_rapier2d::prelude::{GravityScale, Velocity};

use fd_core::{
    AlertDismissed, Ball, BallDropped, BallExited, Barrier, Draggable, FillColor, Funnel, GameColor,
    GameState, GameWon, ResetRequested, Target, TargetHit,
};

/// Funnel tapped: move the ball to the funnel mouth, halt it, lock the
/// barriers for the duration of the flight.
pub fn handle_ball_drop(
    mut drops: EventReader<BallDropped>,
    mut state: ResMut<GameState>,
    mut ball_q: Query<(&mut Transform, &mut Velocity, &mut GravityScale), With<Ball>>,
    funnel_q: Query<&Transform, (With<Funnel>, Without<Ball>)>,
    mut barriers: Query<&mut Draggable, With<Barrier>>,
) {
    if drops.is_empty() {
        return;
    }
    drops.clear();
    let (Some(ball), Some(funnel)) = (state.ball, state.funnel) else {
        return;
    };
    let Ok((mut transform, mut velocity, mut gravity)) = ball_q.get_mut(ball) else {
        return;
    };
    let Ok(funnel_tf) = funnel_q.get(funnel) else {
        return;
    };
    let mouth = funnel_tf.translation.truncate();
    transform.translation = mouth.extend(transform.translation.z);
    *velocity = Velocity::zero();
    gravity.0 = 1.0;
    for mut draggable in &mut barriers {
        draggable.0 = false;
    }
    state.in_flight = true;
    info!("Ball dropped from funnel at ({:.0}, {:.0})", mouth.x, mouth.y);
}

/// Paint a struck target with the hit color. The collision translation layer
/// only ever names targets here, so nothing else can be painted.
pub fn paint_hit_targets(
    mut hits: EventReader<TargetHit>,
    mut targets: Query<&mut FillColor, With<Target>>,
) {
    for TargetHit(entity) in hits.read() {
        if let Ok(mut fill) = targets.get_mut(*entity) {
            if fill.0 != GameColor::HIT {
                fill.0 = GameColor::HIT;
                info!("Target {entity} painted");
            }
        }
    }
}

/// The ball left the scene: unlock every barrier, run the win check over the
/// target registry, then park the ball for the next round.
pub fn handle_ball_exit(
    mut exits: EventReader<BallExited>,
    mut state: ResMut<GameState>,
    mut barriers: Query<&mut Draggable, With<Barrier>>,
    fills: Query<&FillColor, With<Target>>,
    mut won: EventWriter<GameWon>,
    mut resets: EventWriter<ResetRequested>,
) {
    if exits.is_empty() {
        return;
    }
    exits.clear();
    for mut draggable in &mut barriers {
        draggable.0 = true;
    }
    let hit = state
        .targets
        .iter()
        .filter(|e| fills.get(**e).map(|f| f.0 == GameColor::HIT).unwrap_or(false))
        .count();
    info!("Ball exited the scene: {hit}/{} targets hit", state.targets.len());
    if !state.targets.is_empty() && hit == state.targets.len() {
        state.won = true;
        won.write(GameWon);
    }
    resets.write(ResetRequested);
}

/// Teleport the ball to its fixed off-screen parking spot, inert until the
/// next drop. Independent of where the ball currently is.
pub fn handle_reset(
    mut resets: EventReader<ResetRequested>,
    cfg: Res<fd_core::GameConfigRes>,
    mut state: ResMut<GameState>,
    mut ball_q: Query<(&mut Transform, &mut Velocity, &mut GravityScale), With<Ball>>,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();
    state.in_flight = false;
    let Some(ball) = state.ball else {
        return;
    };
    if let Ok((mut transform, mut velocity, mut gravity)) = ball_q.get_mut(ball) {
        let park = cfg.0.layout.ball.park;
        transform.translation = Vec3::new(park.x, park.y, transform.translation.z);
        *velocity = Velocity::zero();
        gravity.0 = 0.0;
    }
}

/// Placeholder: nothing happens yet when the win alert is dismissed.
pub fn note_alert_dismissed(mut dismissed: EventReader<AlertDismissed>) {
    for _ in dismissed.read() {
        trace!("win alert dismissed");
    }
}
