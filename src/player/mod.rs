pub mod animation;
pub mod collision;
pub mod grounded;
pub mod movement;

use bevy::prelude::*;

use crate::registry::level::LevelConfig;
use crate::registry::player::PlayerConfig;
use crate::registry::AppState;
use crate::sets::GameSet;

use animation::{AnimationKind, AnimationState, CharacterAnimations};

pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

#[derive(Component)]
pub struct Player;

#[derive(Component, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Horizontal move input in [-1, 1], sampled each frame and consumed by the
/// physics step.
#[derive(Component, Default)]
pub struct MoveInput(pub f32);

#[derive(Component)]
pub struct Grounded(pub bool);

/// Player motion mode. The transition out of `AutoRun` is one-way.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    AutoRun,
    PlayerControlled,
}

/// Animation-facing state flags, written by the controller and read by the
/// animation system.
#[derive(Component, Default)]
pub struct AnimationFlags {
    pub running: bool,
    pub jumping: bool,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::InGame),
            (animation::load_character_animations, spawn_player).chain(),
        )
        .add_systems(
            Update,
            (
                grounded::ground_check,
                movement::player_input,
                animation::animate_player,
            )
                .chain()
                .in_set(GameSet::Input)
                .run_if(in_state(AppState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (
                movement::apply_horizontal,
                movement::apply_gravity,
                collision::move_and_collide,
            )
                .chain()
                .in_set(GameSet::Physics)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

fn spawn_player(
    mut commands: Commands,
    player_config: Res<PlayerConfig>,
    level_config: Res<LevelConfig>,
    animations: Res<CharacterAnimations>,
) {
    let sprite = match animations.idle.first() {
        Some(frame) => Sprite::from_image(frame.clone()),
        None => Sprite {
            color: Color::srgb(0.9, 0.5, 0.2),
            custom_size: Some(Vec2::new(player_config.width, player_config.height)),
            ..default()
        },
    };

    commands.spawn((
        Player,
        Velocity::default(),
        MoveInput::default(),
        Grounded(false),
        MotionMode::AutoRun,
        AnimationFlags::default(),
        AnimationState {
            kind: AnimationKind::Idle,
            frame: 0,
            timer: Timer::from_seconds(0.15, TimerMode::Repeating),
            facing_right: true,
        },
        sprite,
        Transform::from_xyz(player_config.start_x, level_config.spawn_y, 1.0),
    ));
}
