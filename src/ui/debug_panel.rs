use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::parallax::spawn::ParallaxLayer;
use crate::player::{Grounded, MotionMode, MoveInput, Player, Velocity};

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the debug inspector panel using egui.
#[allow(clippy::type_complexity)]
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    player_query: Query<(&Transform, &Velocity, &MoveInput, &Grounded, &MotionMode), With<Player>>,
    camera_query: Query<&Transform, (With<Camera2d>, Without<Player>)>,
    layers: Query<&ParallaxLayer>,
    diagnostics: Res<DiagnosticsStore>,
    entities: Query<Entity>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(260.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            // --- Performance ---
            if let Some(fps) = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|d| d.smoothed())
            {
                ui.label(format!("FPS: {fps:.0}"));
            }
            ui.label(format!("Entities: {}", entities.iter().count()));
            ui.separator();

            // --- Player ---
            ui.label("Player");
            if let Ok((tf, vel, input, grounded, mode)) = player_query.single() {
                ui.label(format!(
                    "  pos: ({:.1}, {:.1})",
                    tf.translation.x, tf.translation.y
                ));
                ui.label(format!("  vel: ({:.1}, {:.1})", vel.x, vel.y));
                ui.label(format!("  input: {:.0}", input.0));
                ui.label(format!("  mode: {mode:?}"));
                ui.label(format!("  grounded: {}", grounded.0));
            } else {
                ui.label("  (no player)");
            }
            ui.separator();

            // --- Camera ---
            ui.label("Camera");
            if let Ok(tf) = camera_query.single() {
                ui.label(format!(
                    "  pos: ({:.1}, {:.1})",
                    tf.translation.x, tf.translation.y
                ));
            }
            ui.separator();

            // --- Parallax ---
            let initialized = layers.iter().filter(|l| l.initialized).count();
            ui.label(format!(
                "Parallax layers: {} ({} initialized)",
                layers.iter().count(),
                initialized
            ));
        });

    Ok(())
}
