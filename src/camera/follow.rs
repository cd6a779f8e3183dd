use bevy::prelude::*;

use crate::player::Player;
use crate::registry::camera::CameraConfig;

/// Damped follow toward `target + offset`, clamped to the configured bounds
/// on x and y. The z component follows the lerp unclamped.
pub fn follow_position(current: Vec3, target: Vec3, config: &CameraConfig, dt: f32) -> Vec3 {
    let desired = target + config.offset;
    let t = (config.smooth_speed * dt).clamp(0.0, 1.0);
    let mut smoothed = current.lerp(desired, t);
    smoothed.x = smoothed.x.clamp(config.min_pos.x, config.max_pos.x);
    smoothed.y = smoothed.y.clamp(config.min_pos.y, config.max_pos.y);
    smoothed
}

/// Logs once at gameplay start if there is no player to track. The follow
/// system itself stays inert in that case.
pub fn warn_missing_target(
    mut checked: Local<bool>,
    players: Query<(), With<Player>>,
) {
    if *checked {
        return;
    }
    *checked = true;
    if players.is_empty() {
        warn!("camera has no follow target; camera tracking is disabled");
    }
}

#[allow(clippy::type_complexity)]
pub fn camera_follow(
    time: Res<Time>,
    config: Res<CameraConfig>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    camera_transform.translation = follow_position(
        camera_transform.translation,
        player_transform.translation,
        &config,
        time.delta_secs(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    fn config() -> CameraConfig {
        CameraConfig {
            offset: Vec3::new(0.0, 2.0, -10.0),
            smooth_speed: 5.0,
            min_pos: Vec2::new(-10.0, -5.0),
            max_pos: Vec2::new(10.0, 5.0),
        }
    }

    #[test]
    fn zero_dt_stays_at_current() {
        let cfg = config();
        let current = Vec3::new(1.0, 2.0, -10.0);
        let result = follow_position(current, Vec3::new(4.0, 3.0, 0.0), &cfg, 0.0);
        assert_eq!(result, current);
    }

    #[test]
    fn result_lies_between_current_and_desired() {
        let cfg = config();
        let current = Vec3::new(0.0, 0.0, -10.0);
        let target = Vec3::new(4.0, 2.0, 0.0);
        let desired = target + cfg.offset;
        let result = follow_position(current, target, &cfg, 0.05);

        // With t = 0.25 the result is the exact lerp point
        let expected = current.lerp(desired, 0.25);
        assert!((result - expected).length() < 1e-5);
    }

    #[test]
    fn larger_dt_moves_strictly_closer_to_desired() {
        let cfg = config();
        let current = Vec3::new(0.0, 0.0, -10.0);
        let target = Vec3::new(4.0, 2.0, 0.0);
        let desired = target + cfg.offset;

        let near = follow_position(current, target, &cfg, 0.02);
        let far = follow_position(current, target, &cfg, 0.1);
        assert!((far - desired).length() < (near - desired).length());
    }

    #[test]
    fn saturated_rate_snaps_to_desired() {
        let cfg = config();
        let target = Vec3::new(4.0, 2.0, 0.0);
        // smooth_speed * dt >= 1 clamps the lerp factor to 1
        let result = follow_position(Vec3::ZERO, target, &cfg, 10.0);
        assert_eq!(result, target + cfg.offset);
    }

    #[test]
    fn x_and_y_clamped_to_bounds_z_unclamped() {
        let cfg = config();
        let target = Vec3::new(1000.0, -1000.0, 50.0);
        let result = follow_position(Vec3::ZERO, target, &cfg, 10.0);
        assert_eq!(result.x, cfg.max_pos.x);
        assert_eq!(result.y, cfg.min_pos.y);
        assert_eq!(result.z, 50.0 + cfg.offset.z);
    }

    #[test]
    fn inert_without_player() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, camera_follow);

        let cam = app
            .world_mut()
            .spawn((Camera2d, Transform::from_xyz(3.0, 4.0, 0.0)))
            .id();

        app.update();

        let tf = app.world().get::<Transform>(cam).unwrap();
        assert_eq!(tf.translation, Vec3::new(3.0, 4.0, 0.0));
    }
}
