//! Full board re-sync from the rules engine
//!
//! The visual position is never edited in place. Whenever a gesture or a
//! control action may have changed the game, the whole set of piece entities
//! is rebuilt from the engine position. This is what makes snapback free: a
//! rejected drop changes nothing in the engine, so the rebuilt board puts
//! the piece right back where it came from.

use bevy::prelude::*;
use shakmaty::Square;

use crate::board::pieces::{spawn_piece, Piece, PieceAssets};
use crate::board::BoardSyncPending;
use crate::game::rules::Rules;

/// Despawn every piece entity and respawn the set from the engine position.
pub fn sync_board_pieces(
    mut commands: Commands,
    mut pending: ResMut<BoardSyncPending>,
    rules: Res<Rules>,
    assets: Res<PieceAssets>,
    existing: Query<Entity, With<Piece>>,
) {
    if !pending.0 {
        return;
    }
    pending.0 = false;

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for square in Square::ALL {
        if let Some(piece) = rules.piece_at(square) {
            spawn_piece(&mut commands, &assets, piece, square);
            spawned += 1;
        }
    }

    debug!("[BOARD] Re-synced board from engine: {} pieces", spawned);
}
