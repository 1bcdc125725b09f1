//! Game plugin - registers the controller's resources, messages and systems
//!
//! Systems are ordered Input -> Execution -> Visual via [`GameSystems`] so
//! the board re-sync and confetti always see the engine state produced this
//! frame. Drag input itself arrives through entity observers attached when
//! pieces spawn, so no polled input systems are registered here.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use super::events::{CelebrationRequest, MoveApplied, NewGameRequest, UndoRequest};
use super::resources::{GameStatus, MoveHistory};
use super::rules::Rules;
use super::system_sets::GameSystems;
use super::systems::{evaluate_status, handle_new_game, handle_undo, DragState};
use crate::ui::panels::game_panels_ui;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Controller state
        app.init_resource::<Rules>()
            .init_resource::<MoveHistory>()
            .init_resource::<GameStatus>()
            .init_resource::<DragState>();

        // Reflection (inspector support)
        app.register_type::<MoveHistory>().register_type::<GameStatus>();

        // Messages between board, controller and UI
        app.add_message::<MoveApplied>()
            .add_message::<NewGameRequest>()
            .add_message::<UndoRequest>()
            .add_message::<CelebrationRequest>();

        // Execution order: Input -> Execution -> Visual
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (handle_new_game, handle_undo, evaluate_status).in_set(GameSystems::Execution),
        );

        // UI runs in the egui pass, outside the Update sets
        app.add_systems(EguiPrimaryContextPass, game_panels_ui);
    }
}
