//! System organization using SystemSets
//!
//! Defines execution order for the controller systems. Drag input arrives via
//! entity observers outside these sets; everything that runs per frame is
//! ordered Input -> Execution -> Visual so the board re-sync always sees the
//! engine state the execution systems produced.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Polled input handling (drag gestures themselves come in as observers)
    Input,

    /// Game state execution: reset, undo, status evaluation
    Execution,

    /// Visual updates: board re-sync from the engine, confetti
    Visual,
}
