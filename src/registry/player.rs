use bevy::prelude::*;
use serde::Deserialize;

/// Player parameters loaded from RON.
///
/// `start_x`/`target_x` drive the auto-run intro: the player spawns at
/// `start_x` and runs right under script control until reaching `target_x`.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub target_x: f32,
}
