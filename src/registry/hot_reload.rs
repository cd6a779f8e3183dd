//! Hot-reload systems for config assets.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::assets::{CameraDefAsset, PlayerDefAsset};
use super::camera::CameraConfig;
use super::player::PlayerConfig;
use super::RegistryHandles;

pub(crate) fn hot_reload_player(
    mut events: MessageReader<AssetEvent<PlayerDefAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<PlayerDefAsset>>,
    mut config: ResMut<PlayerConfig>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.player.id()
            && let Some(asset) = assets.get(&handles.player)
        {
            config.speed = asset.speed;
            config.jump_velocity = asset.jump_velocity;
            config.gravity = asset.gravity;
            config.width = asset.width;
            config.height = asset.height;
            config.start_x = asset.start_x;
            config.target_x = asset.target_x;
            info!(
                "Hot-reloaded PlayerConfig: speed={}, jump={}, gravity={}",
                asset.speed, asset.jump_velocity, asset.gravity
            );
        }
    }
}

pub(crate) fn hot_reload_camera(
    mut events: MessageReader<AssetEvent<CameraDefAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<CameraDefAsset>>,
    mut config: ResMut<CameraConfig>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.camera.id()
            && let Some(asset) = assets.get(&handles.camera)
        {
            *config = CameraConfig {
                offset: asset.offset,
                smooth_speed: asset.smooth_speed,
                min_pos: asset.min_pos,
                max_pos: asset.max_pos,
            }
            .sanitized();
            info!("Hot-reloaded CameraConfig: smooth_speed={}", config.smooth_speed);
        }
    }
}
