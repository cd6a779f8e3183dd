use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::level::SolidDef;
use crate::parallax::config::ParallaxLayerDef;

/// Asset loaded from player.def.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct PlayerDefAsset {
    pub speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub target_x: f32,
}

/// Asset loaded from main.camera.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct CameraDefAsset {
    pub offset: Vec3,
    pub smooth_speed: f32,
    pub min_pos: Vec2,
    pub max_pos: Vec2,
}

/// Asset loaded from background.parallax.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct ParallaxDefAsset {
    #[serde(default)]
    pub debug_gizmos: bool,
    pub layers: Vec<ParallaxLayerDef>,
}

/// Asset loaded from demo.level.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct LevelDefAsset {
    pub spawn_y: f32,
    pub solids: Vec<SolidDef>,
}
