//! Error types for game setup
//!
//! The running game has no fallible paths: illegal moves snap back, undo on
//! an empty history is a no-op, and the status render cannot fail. The only
//! fallible path is constructing a position from user-supplied FEN, which the
//! test suite and custom-position setup use.

/// Errors that can occur while setting up a game
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The FEN string could not be parsed
    #[error("invalid FEN: {text}")]
    InvalidFen { text: String },

    /// The FEN parsed but does not describe a playable position
    #[error("illegal position: {reason}")]
    IllegalPosition { reason: String },
}

/// Result type alias for game setup operations
pub type GameResult<T> = Result<T, GameError>;
