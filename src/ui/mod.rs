//! egui panels: move history, status banner, game controls

pub mod panels;
pub mod styles;
