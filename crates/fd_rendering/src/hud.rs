use bevy::prelude::*;

use fd_core::{FillColor, GameColor, GameState, Target};

use crate::HudText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Targets: 0/0"),
        TextFont { font_size: 18.0, ..default() },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
        Name::new("HudText"),
    ));
}

pub(crate) fn update_hud(
    state: Res<GameState>,
    fills: Query<&FillColor, With<Target>>,
    mut text_q: Query<&mut Text, With<HudText>>,
    mut last: Local<String>,
) {
    let Some(mut text) = text_q.iter_mut().next() else { return };
    let hit = state
        .targets
        .iter()
        .filter(|e| fills.get(**e).map(|f| f.0 == GameColor::HIT).unwrap_or(false))
        .count();
    let new_text = if state.won {
        format!("Targets: {hit}/{}  You won!", state.targets.len())
    } else {
        format!(
            "Targets: {hit}/{}  Drag barriers, tap the funnel (Space) to drop",
            state.targets.len()
        )
    };
    if new_text != *last {
        text.0 = new_text.clone();
        *last = new_text;
    }
}
