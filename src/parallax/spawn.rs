use bevy::asset::LoadState;
use bevy::prelude::*;

use super::config::ParallaxConfig;

/// A spawned background layer. `origin` and `texture_size` are captured once
/// the layer's image is available; until then the layer does not scroll.
#[derive(Component)]
pub struct ParallaxLayer {
    pub name: String,
    pub factor: Vec2,
    pub origin: Vec2,
    pub texture_size: Vec2,
    pub initialized: bool,
}

/// Spawn one entity per configured layer. Factors outside [0, 1] are
/// clamped with a warning.
pub fn spawn_layers(
    mut commands: Commands,
    config: Res<ParallaxConfig>,
    asset_server: Res<AssetServer>,
) {
    for def in &config.layers {
        let mut factor = Vec2::new(def.factor_x, def.factor_y);
        let clamped = factor.clamp(Vec2::ZERO, Vec2::ONE);
        if clamped != factor {
            warn!(
                "parallax layer '{}' factors {:?} outside [0,1]; clamping",
                def.name, factor
            );
            factor = clamped;
        }

        commands.spawn((
            ParallaxLayer {
                name: def.name.clone(),
                factor,
                origin: Vec2::ZERO,
                texture_size: Vec2::ZERO,
                initialized: false,
            },
            Sprite::from_image(asset_server.load(&def.image)),
            Transform::from_xyz(0.0, 0.0, def.z_order),
        ));
    }

    info!("Spawned {} parallax layers", config.layers.len());
}

/// Capture each layer's origin and texture size on the first frame its image
/// is available. A layer whose image fails to load is a configuration error
/// for that layer: it is logged and the layer despawned, nothing else stops.
pub fn init_layers(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut query: Query<(Entity, &mut ParallaxLayer, &Transform, &Sprite)>,
) {
    for (entity, mut layer, transform, sprite) in &mut query {
        if layer.initialized {
            continue;
        }

        if let LoadState::Failed(_) = asset_server.load_state(&sprite.image) {
            error!(
                "parallax layer '{}' image failed to load; disabling layer",
                layer.name
            );
            commands.entity(entity).despawn();
            continue;
        }

        let Some(image) = images.get(&sprite.image) else {
            continue; // image not loaded yet
        };

        layer.texture_size = image.size_f32();
        layer.origin = transform.translation.truncate();
        layer.initialized = true;
    }
}

/// Outline each layer's texture bounds, mirroring the scene-view debug aids.
pub fn draw_layer_gizmos(
    config: Res<ParallaxConfig>,
    mut gizmos: Gizmos,
    query: Query<(&ParallaxLayer, &Transform)>,
) {
    if !config.debug_gizmos {
        return;
    }
    for (layer, transform) in &query {
        if !layer.initialized {
            continue;
        }
        gizmos.rect_2d(
            Isometry2d::from_translation(transform.translation.truncate()),
            layer.texture_size,
            bevy::color::palettes::css::YELLOW,
        );
    }
}
