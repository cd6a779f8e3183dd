use bevy::prelude::*;

use crate::level::Level;
use crate::math::Aabb;
use crate::player::{Player, Velocity, MAX_DELTA_SECS};
use crate::registry::player::PlayerConfig;

/// Integrate velocity and resolve penetration against level solids, one axis
/// at a time. The blocked velocity component is zeroed on contact. Grounded
/// state is not derived here; the downward probe owns it.
pub fn move_and_collide(
    time: Res<Time>,
    player_config: Res<PlayerConfig>,
    level: Res<Level>,
    mut query: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    let pw = player_config.width;
    let ph = player_config.height;

    for (mut transform, mut vel) in &mut query {
        let pos = &mut transform.translation;

        // --- Resolve X axis ---
        pos.x += vel.x * dt;
        for solid in &level.solids {
            let player = Aabb::from_center(pos.x, pos.y, pw, ph);
            if player.overlaps(&solid.aabb) {
                if vel.x > 0.0 {
                    pos.x = solid.aabb.min_x - pw / 2.0;
                } else if vel.x < 0.0 {
                    pos.x = solid.aabb.max_x + pw / 2.0;
                }
                vel.x = 0.0;
            }
        }

        // --- Resolve Y axis ---
        pos.y += vel.y * dt;
        for solid in &level.solids {
            let player = Aabb::from_center(pos.x, pos.y, pw, ph);
            if player.overlaps(&solid.aabb) {
                if vel.y < 0.0 {
                    pos.y = solid.aabb.max_y + ph / 2.0;
                } else if vel.y > 0.0 {
                    pos.y = solid.aabb.min_y - ph / 2.0;
                }
                vel.y = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn no_crash_on_empty_level() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, move_and_collide);

        app.world_mut().resource_mut::<Level>().solids.clear();
        let player = app
            .world_mut()
            .spawn((
                Player,
                Transform::from_xyz(500.0, 3000.0, 1.0),
                Velocity { x: 0.0, y: -100.0 },
            ))
            .id();

        app.update();

        let tf = app.world().get::<Transform>(player).unwrap();
        assert_eq!(tf.translation.x, 500.0);
    }

    #[test]
    fn falling_player_lands_on_ground_surface() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, move_and_collide);

        // Bottom edge 2px inside the ground slab (surface at y=0, height 40).
        // Even with dt=0 the overlap resolves because vel.y < 0.
        let player = app
            .world_mut()
            .spawn((
                Player,
                Transform::from_xyz(0.0, 18.0, 1.0),
                Velocity { x: 0.0, y: -200.0 },
            ))
            .id();

        app.update();

        let tf = app.world().get::<Transform>(player).unwrap();
        let vel = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(tf.translation.y, 20.0, "player snaps to surface");
        assert_eq!(vel.y, 0.0, "vertical velocity zeroed on landing");
    }

    #[test]
    fn horizontal_push_into_wall_stops() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, move_and_collide);

        // Wall solid left of the origin, above the ground
        app.world_mut().resource_mut::<Level>().solids.push(
            crate::level::Solid {
                aabb: crate::math::Aabb::from_center(-50.0, 50.0, 20.0, 100.0),
                ground: false,
            },
        );
        // Player overlapping the wall's right face while moving left
        let player = app
            .world_mut()
            .spawn((
                Player,
                Transform::from_xyz(-30.0, 50.0, 1.0),
                Velocity { x: -100.0, y: 0.0 },
            ))
            .id();

        app.update();

        let tf = app.world().get::<Transform>(player).unwrap();
        let vel = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(tf.translation.x, -28.0, "player pushed out to wall face");
        assert_eq!(vel.x, 0.0);
    }
}
