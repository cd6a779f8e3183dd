pub mod debug_hud;
pub mod debug_panel;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug_panel::DebugUiState>()
            .add_systems(OnEnter(AppState::InGame), debug_hud::spawn_debug_hud)
            .add_systems(
                Update,
                (
                    debug_hud::update_debug_hud,
                    debug_panel::toggle_debug_panel,
                    debug_panel::draw_debug_panel,
                )
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
