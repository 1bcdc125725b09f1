//! Messages exchanged between the board widget, the controller and the UI

use bevy::prelude::*;

/// A legal move was applied to the rules engine.
#[derive(Message, Debug, Clone)]
pub struct MoveApplied {
    /// Standard algebraic notation of the move, as recorded in the history.
    pub san: String,
}

/// Request to start a fresh game (the "New Game" button).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct NewGameRequest;

/// Request to take back the last half-move (the "Undo" button).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct UndoRequest;

/// Request to fire the win celebration.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct CelebrationRequest;
