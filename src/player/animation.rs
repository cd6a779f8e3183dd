use bevy::prelude::*;

use crate::player::{AnimationFlags, MoveInput, Player};

/// Loaded animation frame handles.
#[derive(Resource)]
pub struct CharacterAnimations {
    pub idle: Vec<Handle<Image>>,
    pub running: Vec<Handle<Image>>,
    pub jumping: Vec<Handle<Image>>,
}

/// Current animation state on the player entity.
#[derive(Component)]
pub struct AnimationState {
    pub kind: AnimationKind,
    pub frame: usize,
    pub timer: Timer,
    pub facing_right: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AnimationKind {
    Idle,
    Running,
    Jumping,
}

/// Load character animation frames (runs once on InGame enter, before
/// spawn_player). Missing frame files degrade to no visual feedback; they
/// never block the rest of setup.
pub fn load_character_animations(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(CharacterAnimations {
        idle: vec![asset_server.load("characters/scout/idle/frame_000.png")],
        running: vec![
            asset_server.load("characters/scout/running/frame_000.png"),
            asset_server.load("characters/scout/running/frame_001.png"),
            asset_server.load("characters/scout/running/frame_002.png"),
            asset_server.load("characters/scout/running/frame_003.png"),
        ],
        jumping: vec![asset_server.load("characters/scout/jumping/frame_000.png")],
    });
}

fn frames_for<'a>(animations: &'a CharacterAnimations, kind: AnimationKind) -> &'a [Handle<Image>] {
    match kind {
        AnimationKind::Idle => &animations.idle,
        AnimationKind::Running => &animations.running,
        AnimationKind::Jumping => &animations.jumping,
    }
}

/// Map controller flags to an animation kind, advance the frame timer, and
/// apply sprite facing from the input sign. Zero input keeps the last facing.
pub fn animate_player(
    time: Res<Time>,
    animations: Res<CharacterAnimations>,
    mut query: Query<(&mut AnimationState, &mut Sprite, &AnimationFlags, &MoveInput), With<Player>>,
) {
    for (mut anim, mut sprite, flags, input) in &mut query {
        let new_kind = if flags.jumping {
            AnimationKind::Jumping
        } else if flags.running {
            AnimationKind::Running
        } else {
            AnimationKind::Idle
        };

        // Reset frame on state change and immediately show first frame
        if new_kind != anim.kind {
            anim.kind = new_kind;
            anim.frame = 0;
            anim.timer.reset();
            let frames = frames_for(&animations, anim.kind);
            if !frames.is_empty() {
                sprite.image = frames[0].clone();
            }
        }

        // Update facing direction from input sign
        if input.0 > 0.0 {
            anim.facing_right = true;
        }
        if input.0 < 0.0 {
            anim.facing_right = false;
        }
        sprite.flip_x = !anim.facing_right;

        // Advance frame timer
        anim.timer.tick(time.delta());
        if anim.timer.just_finished() {
            let frames = frames_for(&animations, anim.kind);
            if !frames.is_empty() {
                anim.frame = (anim.frame + 1) % frames.len();
                sprite.image = frames[anim.frame].clone();
            }
        }
    }
}
