use bevy::prelude::*;
use serde::Deserialize;

/// A solid rectangle in the level definition. `ground` marks it as part of
/// the ground layer: only ground solids are visible to the downward probe,
/// though every solid blocks movement.
#[derive(Debug, Clone, Deserialize)]
pub struct SolidDef {
    pub center: Vec2,
    pub size: Vec2,
    pub ground: bool,
}

/// Level layout loaded from RON.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub spawn_y: f32,
    pub solids: Vec<SolidDef>,
}
