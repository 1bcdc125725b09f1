//! Controller-owned state
//!
//! The rules engine owns the game; these resources hold only what the
//! controller itself is responsible for: the move history panel's contents
//! and the status banner. Both mutate in lockstep with the engine.

pub mod history;
pub mod status;

pub use history::MoveHistory;
pub use status::GameStatus;
