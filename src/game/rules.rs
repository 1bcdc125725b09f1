//! Thin wrapper around the shakmaty rules engine
//!
//! All chess knowledge lives in `shakmaty`; this resource only adapts its API
//! to the contract the controller consumes: apply a move given two squares
//! (promoting to a queen automatically), export FEN, report whose turn it is,
//! undo one half-move, and answer the four terminal-state questions.
//!
//! Undo is implemented with a position stack, and threefold repetition by
//! counting how often the current position identity (the first four FEN
//! fields: placement, side to move, castling rights, en passant square) has
//! occurred on that stack. Keys are computed once per applied move and kept
//! in lockstep with the stack. Neither adds any legality logic of our own.

use bevy::prelude::*;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Role, Square};

use super::error::{GameError, GameResult};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A move the engine accepted, as reported back to the controller.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    /// Standard algebraic notation, including check/mate suffix (e.g. "Qxf7#").
    pub san: String,
    /// Whether the move captured a piece.
    pub capture: bool,
}

/// Resource holding the authoritative game state.
///
/// The controller never inspects the position directly beyond the accessors
/// here; everything it displays is re-derived from this resource after each
/// mutation.
#[derive(Resource, Debug, Clone)]
pub struct Rules {
    /// Positions after each applied half-move; `stack[0]` is the initial one.
    stack: Vec<Chess>,
    /// Repetition key of each stack entry, maintained in lockstep.
    keys: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules {
    /// Start a game from the standard starting position.
    pub fn new() -> Self {
        let position = Chess::default();
        Self {
            keys: vec![position_key(&position)],
            stack: vec![position],
        }
    }

    /// Start a game from an arbitrary FEN.
    ///
    /// Used by tests and custom-position setup; the UI itself always starts
    /// from the standard position.
    pub fn from_fen(text: &str) -> GameResult<Self> {
        let fen: Fen = text.parse().map_err(|_| GameError::InvalidFen {
            text: text.to_string(),
        })?;
        let position = fen
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| GameError::IllegalPosition {
                reason: e.to_string(),
            })?;
        Ok(Self {
            keys: vec![position_key(&position)],
            stack: vec![position],
        })
    }

    fn current(&self) -> &Chess {
        self.stack.last().expect("position stack never empties")
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.current().turn()
    }

    /// Number of half-moves applied since the game started.
    pub fn ply_count(&self) -> usize {
        self.stack.len() - 1
    }

    /// Full FEN of the current position.
    pub fn fen(&self) -> String {
        Fen::from_position(self.current().clone(), EnPassantMode::Legal).to_string()
    }

    /// Occupant of a square in the current position.
    pub fn piece_at(&self, square: Square) -> Option<shakmaty::Piece> {
        self.current().board().piece_at(square)
    }

    /// Try to apply a move between two squares.
    ///
    /// Promotion is always resolved to a queen, and dropping the king two
    /// files toward a rook is understood as castling, matching what a drag
    /// gesture on the board can express. Returns `None` when no legal move
    /// connects the squares; the board then snaps the piece back.
    pub fn try_move(&mut self, from: Square, to: Square) -> Option<AppliedMove> {
        let position = self.current();
        let candidate = position
            .legal_moves()
            .iter()
            .find(|mv| match mv {
                Move::Castle { king, rook } => {
                    let kingside = rook.file() > king.file();
                    let dest = if kingside { File::G } else { File::C };
                    *king == from && to == Square::from_coords(dest, king.rank())
                }
                _ => {
                    mv.from() == Some(from)
                        && mv.to() == to
                        && matches!(mv.promotion(), None | Some(Role::Queen))
                }
            })
            .cloned()?;

        let san = SanPlus::from_move(position.clone(), &candidate).to_string();
        let capture = candidate.is_capture();
        let next = position.clone().play(&candidate).ok()?;
        self.keys.push(position_key(&next));
        self.stack.push(next);
        Some(AppliedMove { san, capture })
    }

    /// Take back the last half-move. No-op at the initial position.
    pub fn undo(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
            self.keys.pop();
        }
    }

    /// The side to move is in check (not necessarily mate).
    pub fn is_check(&self) -> bool {
        self.current().is_check()
    }

    /// The side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.current().is_checkmate()
    }

    /// The side to move has no legal moves and is not in check.
    pub fn is_stalemate(&self) -> bool {
        self.current().is_stalemate()
    }

    /// Generic draw predicate: fifty-move rule, insufficient material, or
    /// stalemate. Deliberately does not include threefold repetition, which
    /// keeps its own message reachable in the status priority chain.
    pub fn is_draw(&self) -> bool {
        self.current().halfmoves() >= 100
            || self.current().is_insufficient_material()
            || self.current().is_stalemate()
    }

    /// The current position has now occurred at least three times.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.keys.last().expect("position stack never empties");
        self.keys.iter().filter(|k| *k == key).count() >= 3
    }
}

/// Position identity for repetition counting: the first four FEN fields.
fn position_key(position: &Chess) -> String {
    let fen = Fen::from_position(position.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str) -> Square {
        name.parse().expect("valid square name")
    }

    fn play(rules: &mut Rules, from: &str, to: &str) -> AppliedMove {
        rules
            .try_move(square(from), square(to))
            .unwrap_or_else(|| panic!("{}-{} should be legal", from, to))
    }

    #[test]
    fn starts_from_standard_position() {
        let rules = Rules::new();
        assert_eq!(rules.fen(), STARTING_FEN);
        assert_eq!(rules.turn(), Color::White);
        assert_eq!(rules.ply_count(), 0);
    }

    #[test]
    fn accepted_move_advances_turn_and_ply() {
        let mut rules = Rules::new();
        let applied = play(&mut rules, "e2", "e4");

        assert_eq!(applied.san, "e4");
        assert!(!applied.capture);
        assert_eq!(rules.turn(), Color::Black);
        assert_eq!(rules.ply_count(), 1);
    }

    #[test]
    fn illegal_move_is_rejected_without_side_effects() {
        let mut rules = Rules::new();
        let before = rules.fen();

        assert!(rules.try_move(square("e2"), square("e5")).is_none());
        assert!(rules.try_move(square("e2"), square("e2")).is_none());

        assert_eq!(rules.fen(), before);
        assert_eq!(rules.ply_count(), 0);
    }

    #[test]
    fn undo_restores_previous_position() {
        let mut rules = Rules::new();
        let before = rules.fen();

        play(&mut rules, "g1", "f3");
        rules.undo();

        assert_eq!(rules.fen(), before);
        assert_eq!(rules.ply_count(), 0);
    }

    #[test]
    fn undo_at_start_is_a_noop() {
        let mut rules = Rules::new();
        rules.undo();
        assert_eq!(rules.fen(), STARTING_FEN);
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut rules = Rules::from_fen("8/P6k/8/8/8/8/8/7K w - - 0 1").expect("playable FEN");
        let applied = play(&mut rules, "a7", "a8");
        assert!(applied.san.contains("=Q"), "got {}", applied.san);
    }

    #[test]
    fn king_two_file_drop_castles() {
        let mut rules = Rules::new();
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ] {
            play(&mut rules, from, to);
        }

        let applied = play(&mut rules, "e1", "g1");
        assert_eq!(applied.san, "O-O");
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut rules = Rules::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            play(&mut rules, from, to);
        }
        let mate = play(&mut rules, "d8", "h4");

        assert_eq!(mate.san, "Qh4#");
        assert!(rules.is_checkmate());
        assert_eq!(rules.turn(), Color::White, "white is the side checkmated");
    }

    #[test]
    fn stalemate_satisfies_both_stalemate_and_draw() {
        let rules = Rules::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("playable FEN");
        assert!(rules.is_stalemate());
        assert!(rules.is_draw());
        assert!(!rules.is_checkmate());
    }

    #[test]
    fn bare_kings_are_a_draw_but_not_stalemate() {
        let rules = Rules::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").expect("playable FEN");
        assert!(rules.is_draw());
        assert!(!rules.is_stalemate());
    }

    #[test]
    fn knight_shuffle_reaches_threefold_repetition() {
        let mut rules = Rules::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];

        for _ in 0..2 {
            assert!(!rules.is_threefold_repetition());
            for (from, to) in shuffle {
                play(&mut rules, from, to);
            }
        }

        assert!(rules.is_threefold_repetition());
        assert!(!rules.is_draw(), "repetition is not part of the generic draw");
    }

    #[test]
    fn undo_rewinds_the_repetition_count() {
        let mut rules = Rules::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for _ in 0..2 {
            for (from, to) in shuffle {
                play(&mut rules, from, to);
            }
        }
        assert!(rules.is_threefold_repetition());

        // Taking back the third occurrence drops below the threshold.
        rules.undo();
        assert!(!rules.is_threefold_repetition());

        // Replaying the same half-move reaches it again.
        play(&mut rules, "f6", "g8");
        assert!(rules.is_threefold_repetition());
    }

    #[test]
    fn from_fen_rejects_garbage() {
        assert!(Rules::from_fen("not a fen").is_err());
    }
}
