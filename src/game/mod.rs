//! Game controller - glue between the rules engine and the board widget
//!
//! The controller owns no chess knowledge of its own. The `shakmaty` crate
//! decides legality and terminal states; the board plugin renders and feeds
//! drag gestures back here; egui panels display what the controller derives.
//!
//! # Module Organization
//!
//! - `rules` - Thin resource wrapping the shakmaty position (move, fen, undo,
//!   terminal predicates)
//! - `resources` - Controller-owned state (move history, status banner)
//! - `systems` - Drag observers and the reset/undo/status systems
//! - `events` - Messages flowing between the pieces above
//! - `plugin` - GamePlugin that registers everything
//!
//! # Control Flow
//!
//! A drag gesture ends on a square -> the controller asks the rules engine to
//! apply the move -> on success it records the SAN, re-syncs the board from
//! the engine position, and re-evaluates the status banner. An illegal drop
//! simply snaps the piece back; nothing else surfaces to the player.

pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
