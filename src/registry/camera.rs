use bevy::prelude::*;
use serde::Deserialize;

const DEFAULT_SMOOTH_SPEED: f32 = 5.0;

/// Camera follow parameters loaded from RON.
///
/// `min_pos`/`max_pos` bound the camera on x and y only; z follows the
/// target offset unclamped.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct CameraConfig {
    pub offset: Vec3,
    pub smooth_speed: f32,
    pub min_pos: Vec2,
    pub max_pos: Vec2,
}

impl CameraConfig {
    /// Enforce config invariants: smooth_speed > 0 and min ≤ max per axis.
    /// Violations are repaired and logged, never fatal.
    pub fn sanitized(mut self) -> Self {
        if self.smooth_speed <= 0.0 {
            warn!(
                "camera smooth_speed must be positive, got {}; using {}",
                self.smooth_speed, DEFAULT_SMOOTH_SPEED
            );
            self.smooth_speed = DEFAULT_SMOOTH_SPEED;
        }
        if self.min_pos.x > self.max_pos.x {
            warn!(
                "camera x bounds inverted ({} > {}); swapping",
                self.min_pos.x, self.max_pos.x
            );
            std::mem::swap(&mut self.min_pos.x, &mut self.max_pos.x);
        }
        if self.min_pos.y > self.max_pos.y {
            warn!(
                "camera y bounds inverted ({} > {}); swapping",
                self.min_pos.y, self.max_pos.y
            );
            std::mem::swap(&mut self.min_pos.y, &mut self.max_pos.y);
        }
        self
    }
}
