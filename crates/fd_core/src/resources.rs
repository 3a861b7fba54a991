use bevy::prelude::*;

/// Registry of every shape in the scene plus round-level flags. Setup owns
/// insertion; handlers only read the lists or flip flags.
#[derive(Resource, Debug, Default)]
pub struct GameState {
    pub ball: Option<Entity>,
    pub funnel: Option<Entity>,
    /// Barriers in creation order.
    pub barriers: Vec<Entity>,
    /// Targets in creation order; the win check runs over this list.
    pub targets: Vec<Entity>,
    /// True between a drop and the ball leaving the scene.
    pub in_flight: bool,
    /// Set once a round has been won (sticky until restart).
    pub won: bool,
    /// True while the win alert overlay is up; gameplay input is suppressed.
    pub alert_open: bool,
}

// Wrapper Bevy resource for the pure-data GameConfig (keeps fd_config free of
// a bevy dependency).
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfigRes(pub fd_config::GameConfig);

/// Scene rectangle used by the exit detector, centered on the origin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub half_extents: Vec2,
    pub exit_margin: f32,
}

impl ArenaBounds {
    pub fn from_config(cfg: &fd_config::ArenaConfig) -> Self {
        Self {
            half_extents: Vec2::new(cfg.half_width(), cfg.half_height()),
            exit_margin: cfg.exit_margin,
        }
    }

    /// Whether a point is still "in the scene" (bounds expanded by the margin).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_extents.x + self.exit_margin
            && p.y.abs() <= self.half_extents.y + self.exit_margin
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::from_config(&fd_config::ArenaConfig::default())
    }
}
