//! Controller System Tests
//!
//! Runs the reset / undo / status systems inside a real Bevy app and
//! verifies the message traffic they produce:
//! - Checkmate emits exactly one celebration request
//! - Drawn endings emit none
//! - A new-game request cancels the celebration and clears everything
//! - Undo pops one ply and ignores an empty history

use bevy::prelude::*;

use chessdesk::board::pieces::PieceColor;
use chessdesk::board::BoardSyncPending;
use chessdesk::confetti::{ConfettiParticle, ConfettiSchedule};
use chessdesk::game::events::{CelebrationRequest, MoveApplied, NewGameRequest, UndoRequest};
use chessdesk::game::resources::{GameStatus, MoveHistory};
use chessdesk::game::rules::{Rules, STARTING_FEN};
use chessdesk::game::systems::{evaluate_status, handle_new_game, handle_undo, DragState};

/// Minimal app running just the controller systems, without any of the
/// rendering or egui machinery.
fn controller_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    app.init_resource::<Rules>();
    app.init_resource::<MoveHistory>();
    app.init_resource::<GameStatus>();
    app.init_resource::<DragState>();
    app.init_resource::<BoardSyncPending>();
    app.init_resource::<ConfettiSchedule>();

    app.add_message::<MoveApplied>();
    app.add_message::<NewGameRequest>();
    app.add_message::<UndoRequest>();
    app.add_message::<CelebrationRequest>();

    app.add_systems(Update, (handle_new_game, handle_undo, evaluate_status));
    app
}

/// Helper: apply a coordinate move to the engine and record it the way the
/// drag handler does, returning the SAN.
fn play(app: &mut App, from: &str, to: &str) -> String {
    let applied = {
        let mut rules = app.world_mut().resource_mut::<Rules>();
        rules
            .try_move(
                from.parse().expect("valid from square"),
                to.parse().expect("valid to square"),
            )
            .unwrap_or_else(|| panic!("move {from}{to} should be legal"))
    };
    app.world_mut()
        .resource_mut::<MoveHistory>()
        .push(applied.san.clone());
    applied.san
}

fn confetti_particle_count(app: &mut App) -> usize {
    let mut particles = app
        .world_mut()
        .query_filtered::<Entity, With<ConfettiParticle>>();
    particles.iter(app.world()).count()
}

// ============================================================================
// Status Evaluation and Celebration
// ============================================================================

#[test]
fn test_checkmate_emits_one_celebration_request() {
    let mut app = controller_app();

    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        play(&mut app, from, to);
    }
    let mate = play(&mut app, "d8", "h4");
    app.world_mut().write_message(MoveApplied { san: mate });
    app.update();

    let status = app.world().resource::<GameStatus>();
    assert_eq!(
        *status,
        GameStatus::Checkmate {
            winner: PieceColor::Black
        }
    );

    let celebrations = app.world().resource::<Messages<CelebrationRequest>>();
    assert_eq!(celebrations.len(), 1, "mate fires exactly one celebration");
}

#[test]
fn test_repetition_draw_emits_no_celebration() {
    let mut app = controller_app();

    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    let mut last = String::new();
    for _ in 0..2 {
        for (from, to) in shuffle {
            last = play(&mut app, from, to);
        }
    }
    app.world_mut().write_message(MoveApplied { san: last });
    app.update();

    assert_eq!(*app.world().resource::<GameStatus>(), GameStatus::Repetition);

    let celebrations = app.world().resource::<Messages<CelebrationRequest>>();
    assert!(
        celebrations.is_empty(),
        "drawn endings do not fire the celebration"
    );
}

#[test]
fn test_non_terminal_move_leaves_status_ongoing() {
    let mut app = controller_app();

    let san = play(&mut app, "e2", "e4");
    app.world_mut().write_message(MoveApplied { san });
    app.update();

    assert_eq!(*app.world().resource::<GameStatus>(), GameStatus::Ongoing);
    assert!(app
        .world()
        .resource::<Messages<CelebrationRequest>>()
        .is_empty());
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_new_game_cancels_celebration_and_clears_state() {
    let mut app = controller_app();

    // A finished game with a celebration in flight.
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        play(&mut app, from, to);
    }
    *app.world_mut().resource_mut::<GameStatus>() = GameStatus::Checkmate {
        winner: PieceColor::Black,
    };
    *app.world_mut().resource_mut::<ConfettiSchedule>() = ConfettiSchedule::celebration();
    for _ in 0..3 {
        app.world_mut()
            .spawn(ConfettiParticle::new(Vec3::Y, Vec3::Y, 1.0, 2.5));
    }
    assert_eq!(confetti_particle_count(&mut app), 3);

    app.world_mut().write_message(NewGameRequest);
    app.update();

    assert_eq!(app.world().resource::<Rules>().fen(), STARTING_FEN);
    assert!(app.world().resource::<MoveHistory>().is_empty());
    assert_eq!(*app.world().resource::<GameStatus>(), GameStatus::Ongoing);
    assert!(
        app.world().resource::<ConfettiSchedule>().is_idle(),
        "pending bursts are cancelled by a new game"
    );
    assert_eq!(
        confetti_particle_count(&mut app),
        0,
        "live particles are despawned by a new game"
    );
    assert!(
        app.world().resource::<BoardSyncPending>().0,
        "the board re-syncs after a reset"
    );
}

// ============================================================================
// Undo
// ============================================================================

#[test]
fn test_undo_request_pops_one_ply() {
    let mut app = controller_app();

    play(&mut app, "e2", "e4");
    play(&mut app, "c7", "c5");

    app.world_mut().write_message(UndoRequest);
    app.update();

    assert_eq!(app.world().resource::<MoveHistory>().len(), 1);
    assert_eq!(app.world().resource::<Rules>().ply_count(), 1);
    assert!(app.world().resource::<BoardSyncPending>().0);
}

#[test]
fn test_undo_request_on_empty_history_is_ignored() {
    let mut app = controller_app();
    app.world_mut().resource_mut::<BoardSyncPending>().0 = false;

    app.world_mut().write_message(UndoRequest);
    app.update();

    assert_eq!(app.world().resource::<Rules>().fen(), STARTING_FEN);
    assert!(app.world().resource::<MoveHistory>().is_empty());
    assert!(
        !app.world().resource::<BoardSyncPending>().0,
        "an ignored undo schedules no board re-sync"
    );
}

#[test]
fn test_undo_leaves_the_status_banner_alone() {
    let mut app = controller_app();

    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        play(&mut app, from, to);
    }
    *app.world_mut().resource_mut::<GameStatus>() = GameStatus::Checkmate {
        winner: PieceColor::Black,
    };

    app.world_mut().write_message(UndoRequest);
    app.update();

    // The engine rewinds but the banner stays until the next move or reset.
    assert_eq!(app.world().resource::<Rules>().ply_count(), 3);
    assert_eq!(
        *app.world().resource::<GameStatus>(),
        GameStatus::Checkmate {
            winner: PieceColor::Black
        }
    );
}
