use bevy::prelude::*;

use crate::player::{Grounded, MotionMode, Player};

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("X: 0.0 Y: 0.0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    player_query: Query<(&Transform, &MotionMode, &Grounded), With<Player>>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
) {
    let Ok((player_tf, mode, grounded)) = player_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let px = player_tf.translation.x;
    let py = player_tf.translation.y;
    let mode_label = match mode {
        MotionMode::AutoRun => "auto-run",
        MotionMode::PlayerControlled => "player",
    };
    let ground_label = if grounded.0 { "grounded" } else { "airborne" };

    **text = format!("X: {px:.0} Y: {py:.0} [{mode_label}, {ground_label}]");
}
