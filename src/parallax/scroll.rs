use bevy::prelude::*;

use super::spawn::ParallaxLayer;

/// Position a layer relative to the camera.
///
/// `offset = (origin - cam) * factor`, applied on top of the camera
/// position, preserving the layer's z-order:
/// - factor=0.0 → layer follows the camera (static on screen, e.g. sky)
/// - factor=0.5 → layer drifts at half the camera's rate (mid-depth)
/// - factor=1.0 → layer stays at its world origin (moves with the level)
pub fn layer_position(origin: Vec2, cam: Vec2, factor: Vec2, z: f32) -> Vec3 {
    let offset = (origin - cam) * factor;
    Vec3::new(cam.x + offset.x, cam.y + offset.y, z)
}

pub fn parallax_scroll(
    camera_query: Query<&Transform, With<Camera2d>>,
    mut layer_query: Query<(&ParallaxLayer, &mut Transform), Without<Camera2d>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let cam = camera_tf.translation.truncate();

    for (layer, mut transform) in &mut layer_query {
        if !layer.initialized {
            continue; // origin not captured yet
        }
        transform.translation =
            layer_position(layer.origin, cam, layer.factor, transform.translation.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_factor_locks_layer_to_camera() {
        let origin = Vec2::new(7.0, 3.0);
        for cam_x in [-100.0, 0.0, 250.0] {
            let cam = Vec2::new(cam_x, 40.0);
            let pos = layer_position(origin, cam, Vec2::ZERO, -10.0);
            assert_eq!(pos.x, cam.x);
            assert_eq!(pos.y, cam.y);
        }
    }

    #[test]
    fn unit_factor_pins_layer_to_origin() {
        let origin = Vec2::new(7.0, 3.0);
        for cam_x in [-100.0, 0.0, 250.0] {
            let cam = Vec2::new(cam_x, 40.0);
            let pos = layer_position(origin, cam, Vec2::ONE, -10.0);
            assert_eq!(pos.x, origin.x);
            assert_eq!(pos.y, origin.y);
        }
    }

    #[test]
    fn half_factor_moves_at_half_camera_rate() {
        let origin = Vec2::ZERO;
        let factor = Vec2::new(0.5, 0.5);
        let a = layer_position(origin, Vec2::new(100.0, 0.0), factor, 0.0);
        let b = layer_position(origin, Vec2::new(200.0, 0.0), factor, 0.0);
        // Camera moved 100, layer moved 50
        assert_eq!(b.x - a.x, 50.0);
    }

    #[test]
    fn z_order_preserved() {
        let pos = layer_position(Vec2::ZERO, Vec2::new(50.0, 50.0), Vec2::splat(0.3), -25.0);
        assert_eq!(pos.z, -25.0);
    }

    #[test]
    fn mixed_axes_are_independent() {
        let origin = Vec2::new(10.0, 20.0);
        let cam = Vec2::new(110.0, 120.0);
        let pos = layer_position(origin, cam, Vec2::new(0.0, 1.0), 0.0);
        assert_eq!(pos.x, cam.x);
        assert_eq!(pos.y, origin.y);
    }
}
