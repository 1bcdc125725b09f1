//! Game status banner resource
//!
//! The first matching terminal condition, evaluated in a fixed priority
//! order: checkmate, then the generic draw, then stalemate, then threefold
//! repetition. Because the generic draw predicate already covers stalemate,
//! the stalemate message can never actually render; the ordering is fixed
//! regardless.

use bevy::prelude::*;

use crate::board::pieces::PieceColor;
use crate::game::rules::Rules;

/// Resource tracking what the status banner should show.
///
/// `Ongoing` means an empty banner. Set after every accepted move and on
/// reset; undo deliberately leaves it alone, so a stale banner persists
/// until the next move or a new game.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub enum GameStatus {
    /// No terminal condition; banner is empty.
    #[default]
    Ongoing,

    /// A king is checkmated; `winner` delivered the mate.
    Checkmate { winner: PieceColor },

    /// Generic draw: fifty-move rule, insufficient material, or stalemate.
    Draw,

    /// Stalemate. Unreachable in practice (masked by `Draw`), kept for the
    /// fixed priority order.
    Stalemate,

    /// The same position occurred three times.
    Repetition,
}

impl GameStatus {
    /// Evaluate the terminal predicates in priority order.
    pub fn evaluate(rules: &Rules) -> Self {
        if rules.is_checkmate() {
            // The side to move is mated, so the other color won.
            GameStatus::Checkmate {
                winner: PieceColor::from(rules.turn().other()),
            }
        } else if rules.is_draw() {
            GameStatus::Draw
        } else if rules.is_stalemate() {
            GameStatus::Stalemate
        } else if rules.is_threefold_repetition() {
            GameStatus::Repetition
        } else {
            GameStatus::Ongoing
        }
    }

    /// Whether the game has reached a terminal state.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// The winning color, if there is one.
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Banner text, or `None` for an empty banner.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(format!("{} Wins!", winner.label())),
            GameStatus::Draw => Some("Draw! Game ended in a stalemate.".to_string()),
            GameStatus::Stalemate => Some("Stalemate! No legal moves possible.".to_string()),
            GameStatus::Repetition => Some("Threefold Repetition - Draw!".to_string()),
        }
    }
}
