pub mod config;
pub mod scroll;
pub mod spawn;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn::spawn_layers)
            .add_systems(
                Update,
                (
                    spawn::init_layers,
                    scroll::parallax_scroll,
                    spawn::draw_layer_gizmos,
                )
                    .chain()
                    .in_set(GameSet::Parallax)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
