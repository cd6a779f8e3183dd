pub mod follow;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

const CAMERA_SCALE: f32 = 0.7;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            (follow::warn_missing_target, follow::camera_follow)
                .in_set(GameSet::Camera)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
