pub mod board;
pub mod confetti;
pub mod game;
pub mod ui;

pub use game::GamePlugin;
