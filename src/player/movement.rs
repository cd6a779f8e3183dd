use bevy::prelude::*;

use crate::player::{
    AnimationFlags, Grounded, MotionMode, MoveInput, Player, Velocity, MAX_DELTA_SECS,
};
use crate::registry::player::PlayerConfig;

/// Per-frame input phase: mode logic, jump, and animation flags.
///
/// `AutoRun` drives the player right until `target_x`, then hands control to
/// the keyboard permanently. Jump overwrites vertical velocity directly and
/// only fires while grounded.
#[allow(clippy::type_complexity)]
pub fn player_input(
    keys: Res<ButtonInput<KeyCode>>,
    player_config: Res<PlayerConfig>,
    mut query: Query<
        (
            &Transform,
            &mut MotionMode,
            &mut MoveInput,
            &mut Velocity,
            &Grounded,
            &mut AnimationFlags,
        ),
        With<Player>,
    >,
) {
    for (transform, mut mode, mut input, mut vel, grounded, mut flags) in &mut query {
        match *mode {
            MotionMode::AutoRun => {
                if transform.translation.x < player_config.target_x {
                    input.0 = 1.0;
                } else {
                    input.0 = 0.0;
                    *mode = MotionMode::PlayerControlled;
                    info!("auto-run complete, player control enabled");
                }
            }
            MotionMode::PlayerControlled => {
                input.0 = 0.0;
                if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
                    input.0 -= 1.0;
                }
                if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
                    input.0 += 1.0;
                }
                if keys.pressed(KeyCode::Space) && grounded.0 {
                    vel.y = player_config.jump_velocity;
                    flags.jumping = true;
                }
            }
        }

        flags.running = input.0 != 0.0 && grounded.0;
    }
}

/// Physics phase: overwrite horizontal velocity from the sampled input,
/// preserving vertical velocity. Direct overwrite rather than accumulated
/// force is the arcade-control model this game uses.
pub fn apply_horizontal(
    player_config: Res<PlayerConfig>,
    mut query: Query<(&mut Velocity, &MoveInput), With<Player>>,
) {
    for (mut vel, input) in &mut query {
        vel.x = input.0 * player_config.speed;
    }
}

pub fn apply_gravity(
    time: Res<Time>,
    player_config: Res<PlayerConfig>,
    mut query: Query<&mut Velocity, With<Player>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    for mut vel in &mut query {
        vel.y -= player_config.gravity * dt;
    }
}
