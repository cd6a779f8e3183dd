use bevy::prelude::*;

use crate::math::Aabb;
use crate::registry::level::LevelConfig;
use crate::registry::AppState;

/// A solid rectangle in the built level. `ground` marks membership in the
/// ground layer checked by the downward probe.
#[derive(Debug, Clone, Copy)]
pub struct Solid {
    pub aabb: Aabb,
    pub ground: bool,
}

/// Collision geometry for the loaded level.
#[derive(Resource, Debug, Default)]
pub struct Level {
    pub solids: Vec<Solid>,
}

impl Level {
    pub fn from_config(config: &LevelConfig) -> Self {
        let solids = config
            .solids
            .iter()
            .map(|def| Solid {
                aabb: Aabb::from_center(def.center.x, def.center.y, def.size.x, def.size.y),
                ground: def.ground,
            })
            .collect();
        Self { solids }
    }

    /// Cast a ray straight down from `origin` and return the distance to the
    /// nearest ground-layer surface within `max_dist`, if any.
    ///
    /// An origin already inside a ground solid reports distance zero. Solids
    /// not on the ground layer are transparent to the probe.
    pub fn raycast_down(&self, origin: Vec2, max_dist: f32) -> Option<f32> {
        let mut nearest: Option<f32> = None;
        for solid in self.solids.iter().filter(|s| s.ground) {
            let aabb = &solid.aabb;
            if origin.x < aabb.min_x || origin.x > aabb.max_x {
                continue;
            }
            let dist = if origin.y >= aabb.max_y {
                origin.y - aabb.max_y
            } else if origin.y >= aabb.min_y {
                0.0 // origin inside the solid
            } else {
                continue; // solid entirely above the origin
            };
            if dist <= max_dist && nearest.is_none_or(|d| dist < d) {
                nearest = Some(dist);
            }
        }
        nearest
    }
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), build_level);
    }
}

/// Build the `Level` resource from config and spawn flat-color sprites so
/// the colliders are visible.
fn build_level(mut commands: Commands, config: Res<LevelConfig>) {
    let level = Level::from_config(&config);
    info!("Level built with {} solids", level.solids.len());

    let ground_color = Color::srgb(0.28, 0.22, 0.18);
    let solid_color = Color::srgb(0.38, 0.36, 0.34);
    for def in &config.solids {
        let color = if def.ground { ground_color } else { solid_color };
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(def.size),
                ..default()
            },
            Transform::from_xyz(def.center.x, def.center.y, 0.0),
        ));
    }

    commands.insert_resource(level);
}
