//! Reset, undo, and status evaluation
//!
//! The host surface of the game: the UI buttons write request messages and
//! these systems carry them out. Every handler is total - it checks its
//! guard and no-ops rather than fail.

use bevy::prelude::*;

use crate::board::BoardSyncPending;
use crate::confetti::{ConfettiParticle, ConfettiSchedule};
use crate::game::events::{CelebrationRequest, MoveApplied, NewGameRequest, UndoRequest};
use crate::game::resources::{GameStatus, MoveHistory};
use crate::game::rules::Rules;
use crate::game::systems::drag::DragState;

/// Re-evaluate the status banner after each accepted move.
///
/// Runs the terminal predicates in their fixed priority order (inside
/// [`GameStatus::evaluate`]) and requests the celebration when a mate
/// appears. Undo deliberately does not reach this system.
pub fn evaluate_status(
    mut applied: MessageReader<MoveApplied>,
    rules: Res<Rules>,
    mut status: ResMut<GameStatus>,
    mut celebrations: MessageWriter<CelebrationRequest>,
) {
    if applied.is_empty() {
        return;
    }
    applied.clear();

    let next = GameStatus::evaluate(&rules);
    match next {
        GameStatus::Checkmate { winner } => {
            info!("[GAME] Checkmate! {} wins", winner.label());
            celebrations.write(CelebrationRequest);
        }
        _ if next.is_game_over() => {
            if let Some(message) = next.message() {
                info!("[GAME] {}", message);
            }
        }
        _ => {
            if rules.is_check() {
                info!("[GAME] {:?} is in check", rules.turn());
            }
        }
    }
    *status = next;
}

/// Start over: fresh engine state, empty history, cleared banner, and any
/// celebration still in flight is cancelled along with its particles.
pub fn handle_new_game(
    mut requests: MessageReader<NewGameRequest>,
    mut commands: Commands,
    mut rules: ResMut<Rules>,
    mut history: ResMut<MoveHistory>,
    mut status: ResMut<GameStatus>,
    mut drag_state: ResMut<DragState>,
    mut pending: ResMut<BoardSyncPending>,
    mut confetti: ResMut<ConfettiSchedule>,
    particles: Query<Entity, With<ConfettiParticle>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    *rules = Rules::new();
    history.clear();
    *status = GameStatus::default();
    drag_state.active = None;
    pending.0 = true;

    confetti.cancel();
    for entity in particles.iter() {
        commands.entity(entity).despawn();
    }

    info!("[GAME] New game started");
}

/// Take back one half-move. Silently ignored when nothing has been played.
///
/// The status banner is not re-rendered here; only the next accepted move
/// or a new game touches it.
pub fn handle_undo(
    mut requests: MessageReader<UndoRequest>,
    mut rules: ResMut<Rules>,
    mut history: ResMut<MoveHistory>,
    mut pending: ResMut<BoardSyncPending>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    if history.is_empty() {
        debug!("[GAME] Undo requested with empty history; ignoring");
        return;
    }

    rules.undo();
    let taken_back = history.pop();
    pending.0 = true;

    if let Some(san) = taken_back {
        info!("[GAME] Took back {}", san);
    }
}
