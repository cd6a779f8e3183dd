mod camera;
mod level;
mod math;
mod parallax;
mod player;
mod registry;
mod sets;
#[cfg(test)]
mod test_helpers;
mod ui;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Skylark".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Camera,
                GameSet::Parallax,
                GameSet::Ui,
            )
                .chain(),
        )
        .configure_sets(FixedUpdate, GameSet::Physics)
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(level::LevelPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(parallax::ParallaxPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
