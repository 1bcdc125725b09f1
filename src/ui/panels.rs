//! In-game panels: status bar across the top, move history and controls on
//! the right.
//!
//! Runs in `EguiPrimaryContextPass` so panel layout happens before the 3D
//! viewport is sized for the frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::game::events::{NewGameRequest, UndoRequest};
use crate::game::resources::{GameStatus, MoveHistory};
use crate::game::rules::Rules;
use crate::ui::styles::UiColors;

/// Draws the status bar and the move history side panel.
pub fn game_panels_ui(
    mut contexts: EguiContexts,
    rules: Res<Rules>,
    history: Res<MoveHistory>,
    status: Res<GameStatus>,
    mut new_game: MessageWriter<NewGameRequest>,
    mut undo: MessageWriter<UndoRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if let Some(message) = status.message() {
                ui.colored_label(
                    UiColors::ACCENT_GOLD,
                    egui::RichText::new(message).size(20.0).strong(),
                );
            } else {
                let (label, color) = match rules.turn() {
                    shakmaty::Color::White => ("White to move", UiColors::TEXT_PRIMARY),
                    shakmaty::Color::Black => ("Black to move", UiColors::TEXT_SECONDARY),
                };
                ui.colored_label(color, egui::RichText::new(label).size(16.0));
                if rules.is_check() {
                    ui.colored_label(
                        UiColors::DANGER,
                        egui::RichText::new("Check!").size(14.0).strong(),
                    );
                }
            }
        });
        ui.add_space(6.0);
    });

    egui::SidePanel::right("move_history")
        .default_width(190.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("Moves").color(UiColors::TEXT_PRIMARY));
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(ui.available_height() - 60.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for row in history.numbered_rows() {
                        ui.colored_label(UiColors::TEXT_SECONDARY, row);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    new_game.write(NewGameRequest);
                }
                if ui.button("Undo").clicked() {
                    undo.write(UndoRequest);
                }
            });
        });
}
