use bevy::prelude::*;
use clap::Parser;

use fd_config::GameConfig;
use fd_core::{ArenaBounds, CorePlugin, GameConfigRes};
use fd_gameplay::GameplayPlugin;
use fd_physics::{PhysicsConfig, PhysicsPlugin};
use fd_rendering::RenderingPlugin;

mod auto_close;

/// Drop the ball through the barriers and paint every target.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// RON config file; defaults are used when it is missing.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

/// Messages produced while loading config, replayed once logging is up.
#[derive(Resource, Default)]
struct ConfigNotes(Vec<String>);

fn main() {
    let cli = Cli::parse();
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);

    let mut notes = Vec::new();
    if let Some(err) = load_err {
        notes.push(format!("{}: {err}; using defaults", cli.config));
    }
    notes.extend(cfg.validate());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.06, 0.07, 0.1)))
        .insert_resource(ArenaBounds::from_config(&cfg.arena))
        .insert_resource(PhysicsConfig::from_config(&cfg))
        .insert_resource(ConfigNotes(notes))
        .insert_resource(GameConfigRes(cfg))
        .add_plugins(CorePlugin)
        .add_plugins(PhysicsPlugin)
        .add_plugins(GameplayPlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(auto_close::AutoClosePlugin)
        .add_systems(Startup, report_config_notes)
        .run();
}

fn report_config_notes(notes: Res<ConfigNotes>) {
    for note in &notes.0 {
        warn!("config: {note}");
    }
}
