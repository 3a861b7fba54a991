use bevy::prelude::*;

use fd_core::GameConfigRes;

/// Exits the app after `window.autoClose` seconds (0 = disabled). Lets smoke
/// runs drive the full stack without a hand on the window.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_timer).add_systems(Update, tick);
    }
}

#[derive(Resource)]
struct AutoCloseTimer(Timer);

fn arm_timer(mut commands: Commands, cfg: Res<GameConfigRes>) {
    let secs = cfg.0.window.auto_close;
    if secs > 0.0 {
        info!("auto-close armed: {secs}s");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick(
    timer: Option<ResMut<AutoCloseTimer>>,
    time: Res<Time>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else { return };
    if timer.0.tick(time.delta()).just_finished() {
        info!("auto-close timer elapsed; exiting");
        exit.write(AppExit::Success);
    }
}
