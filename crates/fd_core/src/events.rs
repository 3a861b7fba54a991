use bevy::prelude::*;

/// Funnel tapped (or Space pressed): release the ball from the funnel mouth.
#[derive(Event, Default)]
pub struct BallDropped;

/// The ball touched a target; carries the target entity to paint.
#[derive(Event)]
pub struct TargetHit(pub Entity);

/// A tracked shape left the arena bounds. Emitted at most once per drop.
#[derive(Event, Default)]
pub struct BallExited;

/// Every registered target carries the hit color.
#[derive(Event, Default)]
pub struct GameWon;

/// The win alert overlay was closed by the player.
#[derive(Event, Default)]
pub struct AlertDismissed;

/// Park the ball at its off-screen position for the next round.
#[derive(Event, Default)]
pub struct ResetRequested;
