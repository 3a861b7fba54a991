use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct PhysicsConfig {
    pub gravity: Vec2,
    pub ball_restitution: f32,
    pub ball_friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -600.0),
            ball_restitution: 0.85,
            ball_friction: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn from_config(cfg: &fd_config::GameConfig) -> Self {
        Self {
            gravity: Vec2::new(0.0, cfg.gravity.y),
            ball_restitution: cfg.bounce.ball_restitution,
            ball_friction: cfg.bounce.ball_friction,
        }
    }
}
