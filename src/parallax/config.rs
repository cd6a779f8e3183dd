use bevy::prelude::*;
use serde::Deserialize;

/// One background layer definition. Factors are scroll ratios in [0, 1]:
/// 0 locks the layer to the camera (infinitely far), 1 pins it to its world
/// origin (as close as the playfield).
#[derive(Debug, Clone, Deserialize)]
pub struct ParallaxLayerDef {
    pub name: String,
    pub image: String,
    pub factor_x: f32,
    pub factor_y: f32,
    pub z_order: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct ParallaxConfig {
    pub debug_gizmos: bool,
    pub layers: Vec<ParallaxLayerDef>,
}
