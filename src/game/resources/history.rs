//! Move history tracking resource
//!
//! An ordered list of SAN strings, one per accepted half-move. Its length
//! always equals the number of half-moves applied since the last reset:
//! pushed on every accepted move, popped on undo, cleared on reset. The
//! history panel renders it as numbered rows, one row per half-move, both
//! halves of a full move sharing the same number ("1. e4" then "1. e5").

use bevy::prelude::*;

/// Resource storing the SAN history for the current game.
#[derive(Resource, Debug, Default, Clone, Reflect)]
#[reflect(Resource)]
pub struct MoveHistory {
    moves: Vec<String>,
}

impl MoveHistory {
    /// Record an accepted half-move.
    pub fn push(&mut self, san: String) {
        self.moves.push(san);
    }

    /// Drop the most recent half-move (on undo).
    pub fn pop(&mut self) -> Option<String> {
        self.moves.pop()
    }

    /// Forget everything (on reset).
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate the raw SAN strings in game order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.moves.iter()
    }

    /// Rows for the history panel: `"{move number}. {san}"` per half-move,
    /// numbered by full move.
    pub fn numbered_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.moves
            .iter()
            .enumerate()
            .map(|(index, san)| format!("{}. {}", index / 2 + 1, san))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.numbered_rows().count(), 0);
    }

    #[test]
    fn push_pop_clear_track_length() {
        let mut history = MoveHistory::default();

        history.push("e4".to_string());
        history.push("e5".to_string());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop(), Some("e5".to_string()));
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn rows_pair_half_moves_under_one_number() {
        let mut history = MoveHistory::default();
        for san in ["e4", "e5", "Nf3", "Nc6", "Bb5"] {
            history.push(san.to_string());
        }

        let rows: Vec<String> = history.numbered_rows().collect();
        assert_eq!(rows, ["1. e4", "1. e5", "2. Nf3", "2. Nc6", "3. Bb5"]);
    }
}
