//! fd_core: foundational ECS types (components, resources, events) used across game crates.

use bevy::prelude::*;

pub mod bundles;
pub mod components;
pub mod events;
pub mod resources;

pub use bundles::*;
pub use components::*;
pub use events::*;
pub use resources::*;

pub struct CorePlugin;
impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BallDropped>()
            .add_event::<TargetHit>()
            .add_event::<BallExited>()
            .add_event::<GameWon>()
            .add_event::<AlertDismissed>()
            .add_event::<ResetRequested>()
            .init_resource::<GameState>()
            .init_resource::<GameConfigRes>()
            .init_resource::<ArenaBounds>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_registers_events_and_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        assert!(app.world().get_resource::<GameState>().is_some());
        assert!(app.world().get_resource::<ArenaBounds>().is_some());
        assert!(app.world().get_resource::<Events<GameWon>>().is_some());
        assert!(app.world().get_resource::<Events<ResetRequested>>().is_some());
    }
}
