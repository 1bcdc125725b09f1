//! Controller systems: drag gestures in, game mutations out

pub mod control;
pub mod drag;

pub use control::{evaluate_status, handle_new_game, handle_undo};
pub use drag::{on_piece_drag, on_piece_drag_end, on_piece_drag_start, DragState};
