use bevy::prelude::*;

use crate::level::Level;
use crate::player::{AnimationFlags, Grounded, Player};
use crate::registry::player::PlayerConfig;

/// Extra probe length beyond the player's half-height.
pub const GROUND_PROBE_EPSILON: f32 = 0.1;

/// Recompute the grounded flag from a downward probe each frame, before any
/// input handling. Landing clears the jumping flag immediately.
pub fn ground_check(
    player_config: Res<PlayerConfig>,
    level: Res<Level>,
    mut query: Query<(&Transform, &mut Grounded, &mut AnimationFlags), With<Player>>,
) {
    let max_dist = player_config.height / 2.0 + GROUND_PROBE_EPSILON;
    for (transform, mut grounded, mut flags) in &mut query {
        let origin = transform.translation.truncate();
        grounded.0 = level.raycast_down(origin, max_dist).is_some();
        if grounded.0 {
            flags.jumping = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    fn spawn_probe_player(app: &mut App, y: f32, jumping: bool) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                Transform::from_xyz(0.0, y, 1.0),
                Grounded(false),
                AnimationFlags {
                    running: false,
                    jumping,
                },
            ))
            .id()
    }

    #[test]
    fn grounded_within_probe_length_clears_jumping() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, ground_check);

        // Fixture ground surface is at y=0; player height 40 → probe 20.1
        let player = spawn_probe_player(&mut app, 20.0, true);
        app.update();

        assert!(app.world().get::<Grounded>(player).unwrap().0);
        assert!(!app.world().get::<AnimationFlags>(player).unwrap().jumping);
    }

    #[test]
    fn airborne_beyond_probe_length() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, ground_check);

        let player = spawn_probe_player(&mut app, 21.0, true);
        app.update();

        assert!(!app.world().get::<Grounded>(player).unwrap().0);
        // Jumping flag only clears on landing
        assert!(app.world().get::<AnimationFlags>(player).unwrap().jumping);
    }

    #[test]
    fn non_ground_solid_does_not_ground() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, ground_check);

        for solid in &mut app.world_mut().resource_mut::<Level>().solids {
            solid.ground = false;
        }
        let player = spawn_probe_player(&mut app, 20.0, false);
        app.update();

        assert!(!app.world().get::<Grounded>(player).unwrap().0);
    }
}
