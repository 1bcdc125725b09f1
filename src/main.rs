use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use chessdesk::board::BoardPlugin;
use chessdesk::confetti::ConfettiPlugin;
use chessdesk::game::GamePlugin;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 800;

fn main() {
    let window = Window {
        title: "chessdesk".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .add_plugins(MeshPickingPlugin)
        // Game systems
        .add_plugins(BoardPlugin)
        .add_plugins(GamePlugin)
        .add_plugins(ConfettiPlugin)
        // Startup systems
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn the camera and lighting for the board view.
///
/// The camera sits behind the white side, tilted down at the board center,
/// roughly the angle a player at a table would see.
fn setup_scene(mut commands: Commands) {
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100000.0,
            ..default()
        },
        Transform::from_xyz(3.5, 10.0, 3.5),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(3.5, 9.0, 10.5).looking_at(Vec3::new(3.5, 0.0, 3.5), Vec3::Y),
    ));
}
