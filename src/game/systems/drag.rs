//! Drag-and-drop observers for piece input
//!
//! Three observers are attached to every spawned piece:
//!
//! 1. `DragStart` decides whether the piece may be picked up at all - a pure
//!    color-vs-turn predicate, expressed as an explicit [`PickupVerdict`].
//! 2. `Drag` slides the lifted piece along the board plane under the cursor.
//! 3. `DragEnd` resolves the drop: ask the rules engine for the move, record
//!    it on success, and in every case schedule a board re-sync, which is
//!    also what snaps a rejected piece back to its origin square.
//!
//! Nothing here consults a DOM or widget state; the rules engine is the
//! only authority the handlers read or write.

use bevy::picking::events::{Drag, DragEnd, DragStart, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use shakmaty::Square;

use crate::board::pieces::{Piece, PieceColor};
use crate::board::squares::world_to_square;
use crate::board::BoardSyncPending;
use crate::game::events::MoveApplied;
use crate::game::resources::MoveHistory;
use crate::game::rules::Rules;

/// Height a piece hovers at while dragged.
const DRAG_LIFT: f32 = 0.9;

/// Whether a drag gesture may lift a piece.
///
/// The explicit two-variant verdict replaces the usual "return false to
/// cancel" convention at the widget boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupVerdict {
    Allow,
    Deny,
}

/// Pure pickup predicate: only the side to move may lift its pieces.
pub fn pickup_verdict(piece: PieceColor, side_to_move: shakmaty::Color) -> PickupVerdict {
    if shakmaty::Color::from(piece) == side_to_move {
        PickupVerdict::Allow
    } else {
        PickupVerdict::Deny
    }
}

/// Resource tracking the drag gesture in flight, if any.
#[derive(Resource, Debug, Default)]
pub struct DragState {
    pub active: Option<ActiveDrag>,
}

/// The piece currently being dragged and the square it came from.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDrag {
    pub entity: Entity,
    pub from: Square,
}

fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Handle the start of a drag on a piece.
pub fn on_piece_drag_start(
    drag_start: On<Pointer<DragStart>>,
    mut pieces: Query<(&Piece, &mut Transform)>,
    rules: Res<Rules>,
    mut drag_state: ResMut<DragState>,
) {
    if !is_primary(drag_start.event.button) {
        return;
    }

    let entity = drag_start.entity;
    let Ok((piece, mut transform)) = pieces.get_mut(entity) else {
        return;
    };

    match pickup_verdict(piece.color, rules.turn()) {
        PickupVerdict::Deny => {
            debug!(
                "[INPUT] Pickup denied: {} piece on {} but it is {:?}'s move",
                piece.color.label(),
                piece.square(),
                rules.turn()
            );
        }
        PickupVerdict::Allow => {
            drag_state.active = Some(ActiveDrag {
                entity,
                from: piece.square(),
            });
            transform.translation.y = DRAG_LIFT;
            debug!("[INPUT] Picked up {:?} from {}", piece.kind, piece.square());
        }
    }
}

/// Slide the lifted piece along the board plane under the cursor.
pub fn on_piece_drag(
    drag: On<Pointer<Drag>>,
    mut transforms: Query<&mut Transform, With<Piece>>,
    drag_state: Res<DragState>,
    camera: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    let Some(active) = drag_state.active else {
        return;
    };
    if active.entity != drag.entity {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Some(point) =
        cursor_on_board_plane(camera, camera_transform, drag.pointer_location.position)
    else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(active.entity) {
        transform.translation = Vec3::new(point.x, DRAG_LIFT, point.z);
    }
}

/// Resolve the drop at the end of a drag gesture.
///
/// A re-sync is scheduled no matter how the drop resolves, so the visual
/// position always returns to whatever the engine says - the accepted move
/// for a legal drop, the origin square for anything else.
pub fn on_piece_drag_end(
    drag_end: On<Pointer<DragEnd>>,
    transforms: Query<&Transform, With<Piece>>,
    mut drag_state: ResMut<DragState>,
    mut rules: ResMut<Rules>,
    mut history: ResMut<MoveHistory>,
    mut pending: ResMut<BoardSyncPending>,
    mut applied_moves: MessageWriter<MoveApplied>,
) {
    let Some(active) = drag_state.active else {
        return;
    };
    if active.entity != drag_end.entity {
        return;
    }
    drag_state.active = None;
    pending.0 = true;

    let target = transforms
        .get(active.entity)
        .ok()
        .and_then(|transform| world_to_square(transform.translation));
    let Some(target) = target else {
        debug!("[INPUT] Dropped outside the board; snapping back");
        return;
    };

    let mover = rules.turn();
    match rules.try_move(active.from, target) {
        Some(applied) => {
            info!(
                "[GAME] {:?} plays {} ({} -> {}){}",
                mover,
                applied.san,
                active.from,
                target,
                if applied.capture { " capturing" } else { "" }
            );
            history.push(applied.san.clone());
            applied_moves.write(MoveApplied { san: applied.san });
        }
        None => {
            debug!(
                "[INPUT] Illegal move {} -> {}; snapping back",
                active.from, target
            );
        }
    }
}

fn cursor_on_board_plane(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    Some(ray.get_point(distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    #[test]
    fn own_color_may_be_lifted() {
        assert_eq!(
            pickup_verdict(PieceColor::White, Color::White),
            PickupVerdict::Allow
        );
        assert_eq!(
            pickup_verdict(PieceColor::Black, Color::Black),
            PickupVerdict::Allow
        );
    }

    #[test]
    fn opposite_color_is_denied() {
        assert_eq!(
            pickup_verdict(PieceColor::Black, Color::White),
            PickupVerdict::Deny
        );
        assert_eq!(
            pickup_verdict(PieceColor::White, Color::Black),
            PickupVerdict::Deny
        );
    }
}
