use bevy::prelude::*;

use fd_core::{AlertDismissed, GameState, GameWon};

use crate::WinAlert;

/// Present the win alert once per `GameWon`; input is suppressed while it is up.
pub(crate) fn open_win_alert(
    mut won: EventReader<GameWon>,
    mut commands: Commands,
    mut state: ResMut<GameState>,
    existing: Query<(), With<WinAlert>>,
) {
    if won.is_empty() {
        return;
    }
    won.clear();
    if !existing.is_empty() {
        return;
    }
    state.alert_open = true;
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
            WinAlert,
            Name::new("WinAlert"),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("You won!"),
                TextFont { font_size: 48.0, ..default() },
                TextColor(Color::WHITE),
            ));
            overlay.spawn((
                Text::new("Click anywhere to continue"),
                TextFont { font_size: 20.0, ..default() },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

/// Close the overlay on click/Enter/Escape and report the dismissal.
pub(crate) fn dismiss_win_alert(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    alert: Query<Entity, With<WinAlert>>,
    mut commands: Commands,
    mut state: ResMut<GameState>,
    mut dismissed: EventWriter<AlertDismissed>,
) {
    let Ok(entity) = alert.single() else { return };
    if buttons.just_pressed(MouseButton::Left)
        || keys.just_pressed(KeyCode::Enter)
        || keys.just_pressed(KeyCode::Escape)
    {
        commands.entity(entity).despawn();
        state.alert_open = false;
        info!("Win alert dismissed");
        dismissed.write(AlertDismissed);
    }
}
