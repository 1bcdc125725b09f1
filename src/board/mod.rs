//! Board widget - rendering and drag-and-drop surface
//!
//! Owns everything visual about the board: the 8x8 grid of squares, the
//! piece meshes, and the mapping between world space and board squares.
//! It holds no game state; whenever [`BoardSyncPending`] is set, the piece
//! entities are rebuilt wholesale from the rules engine's position, which is
//! what keeps the visuals eventually-consistent with the game no matter how
//! a gesture ended.

pub mod pieces;
pub mod squares;
pub mod sync;

use bevy::prelude::*;

use crate::game::system_sets::GameSystems;

/// Set when the visual position may differ from the engine position; the
/// sync system clears it after respawning the pieces. Starts set so the
/// first frame populates the board.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct BoardSyncPending(pub bool);

impl Default for BoardSyncPending {
    fn default() -> Self {
        Self(true)
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardSyncPending>();
        app.register_type::<BoardSyncPending>()
            .register_type::<squares::BoardSquare>()
            .register_type::<pieces::Piece>()
            .register_type::<pieces::PieceColor>()
            .register_type::<pieces::PieceType>();

        app.add_systems(Startup, (squares::create_board, pieces::load_piece_assets));
        app.add_systems(
            Update,
            sync::sync_board_pieces.in_set(GameSystems::Visual),
        );
    }
}
