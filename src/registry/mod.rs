pub mod assets;
pub mod camera;
pub mod hot_reload;
pub mod level;
pub mod loader;
pub mod player;

use bevy::prelude::*;

use assets::{CameraDefAsset, LevelDefAsset, ParallaxDefAsset, PlayerDefAsset};
use camera::CameraConfig;
use level::LevelConfig;
use loader::RonLoader;
use player::PlayerConfig;

use crate::parallax::config::ParallaxConfig;

/// Application state: Loading waits for config assets, InGame runs gameplay.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Handles for assets being loaded.
#[derive(Resource)]
struct LoadingAssets {
    player: Handle<PlayerDefAsset>,
    camera: Handle<CameraDefAsset>,
    parallax: Handle<ParallaxDefAsset>,
    level: Handle<LevelDefAsset>,
}

/// Keeps config asset handles alive for hot-reload detection.
#[derive(Resource)]
pub struct RegistryHandles {
    pub player: Handle<PlayerDefAsset>,
    pub camera: Handle<CameraDefAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<PlayerDefAsset>()
            .init_asset::<CameraDefAsset>()
            .init_asset::<ParallaxDefAsset>()
            .init_asset::<LevelDefAsset>()
            .register_asset_loader(RonLoader::<PlayerDefAsset>::new(&["def.ron"]))
            .register_asset_loader(RonLoader::<CameraDefAsset>::new(&["camera.ron"]))
            .register_asset_loader(RonLoader::<ParallaxDefAsset>::new(&["parallax.ron"]))
            .register_asset_loader(RonLoader::<LevelDefAsset>::new(&["level.ron"]))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                (hot_reload::hot_reload_player, hot_reload::hot_reload_camera)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let player = asset_server.load::<PlayerDefAsset>("data/player.def.ron");
    let camera = asset_server.load::<CameraDefAsset>("data/main.camera.ron");
    let parallax = asset_server.load::<ParallaxDefAsset>("data/background.parallax.ron");
    let level = asset_server.load::<LevelDefAsset>("data/demo.level.ron");
    commands.insert_resource(LoadingAssets {
        player,
        camera,
        parallax,
        level,
    });
}

fn check_loading(
    mut commands: Commands,
    loading: Res<LoadingAssets>,
    player_assets: Res<Assets<PlayerDefAsset>>,
    camera_assets: Res<Assets<CameraDefAsset>>,
    parallax_assets: Res<Assets<ParallaxDefAsset>>,
    level_assets: Res<Assets<LevelDefAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let (Some(player), Some(camera), Some(parallax), Some(level)) = (
        player_assets.get(&loading.player),
        camera_assets.get(&loading.camera),
        parallax_assets.get(&loading.parallax),
        level_assets.get(&loading.level),
    ) else {
        return; // not loaded yet
    };

    // Build resources from loaded assets
    commands.insert_resource(PlayerConfig {
        speed: player.speed,
        jump_velocity: player.jump_velocity,
        gravity: player.gravity,
        width: player.width,
        height: player.height,
        start_x: player.start_x,
        target_x: player.target_x,
    });
    commands.insert_resource(
        CameraConfig {
            offset: camera.offset,
            smooth_speed: camera.smooth_speed,
            min_pos: camera.min_pos,
            max_pos: camera.max_pos,
        }
        .sanitized(),
    );
    commands.insert_resource(ParallaxConfig {
        debug_gizmos: parallax.debug_gizmos,
        layers: parallax.layers.clone(),
    });
    commands.insert_resource(LevelConfig {
        spawn_y: level.spawn_y,
        solids: level.solids.clone(),
    });

    // Keep handles alive for hot-reload
    commands.insert_resource(RegistryHandles {
        player: loading.player.clone(),
        camera: loading.camera.clone(),
    });

    commands.remove_resource::<LoadingAssets>();
    next_state.set(AppState::InGame);
    info!("All config assets loaded, entering InGame state");
}
