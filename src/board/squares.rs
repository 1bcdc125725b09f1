//! Board squares and the world-space <-> square mapping

use bevy::prelude::*;
use shakmaty::{File, Rank, Square};

/// A square of the visible board.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BoardSquare {
    pub file: u8,
    pub rank: u8,
}

/// Marker for board entities (squares, as opposed to pieces).
#[derive(Component)]
pub struct Board;

const LIGHT_SQUARE: Color = Color::srgb(0.94, 0.85, 0.71);
const DARK_SQUARE: Color = Color::srgb(0.71, 0.53, 0.39);

/// World position of a square's center, on the board plane.
///
/// Files run along +x; ranks run toward the camera, so white's back rank
/// sits at the highest z.
pub fn square_to_world(square: Square) -> Vec3 {
    let file = u32::from(square.file()) as f32;
    let rank = u32::from(square.rank()) as f32;
    Vec3::new(file, 0.0, 7.0 - rank)
}

/// The square under a world-space point, if it lies on the board.
pub fn world_to_square(point: Vec3) -> Option<Square> {
    let file = point.x.round();
    let rank = 7.0 - point.z.round();
    if !(0.0..=7.0).contains(&file) || !(0.0..=7.0).contains(&rank) {
        return None;
    }
    Some(Square::from_coords(
        File::new(file as u32),
        Rank::new(rank as u32),
    ))
}

/// Spawn the 8x8 checkered grid of square meshes.
pub fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let square_mesh = meshes.add(Plane3d::default().mesh().size(1.0, 1.0));
    let light = materials.add(StandardMaterial {
        base_color: LIGHT_SQUARE,
        ..default()
    });
    let dark = materials.add(StandardMaterial {
        base_color: DARK_SQUARE,
        ..default()
    });

    for file in 0u8..8 {
        for rank in 0u8..8 {
            let material = if (file + rank) % 2 == 1 {
                light.clone()
            } else {
                dark.clone()
            };
            let center = square_to_world(Square::from_coords(
                File::new(file as u32),
                Rank::new(rank as u32),
            ));
            commands.spawn((
                Mesh3d(square_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(center),
                BoardSquare { file, rank },
                Board,
                Name::new(format!("Square {}{}", (b'a' + file) as char, rank + 1)),
            ));
        }
    }

    info!("[BOARD] Spawned 64 board squares");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_world_mapping_round_trips() {
        for square in Square::ALL {
            assert_eq!(world_to_square(square_to_world(square)), Some(square));
        }
    }

    #[test]
    fn white_back_rank_is_nearest_the_camera() {
        let e1: Square = "e1".parse().expect("square");
        let e8: Square = "e8".parse().expect("square");
        assert!(square_to_world(e1).z > square_to_world(e8).z);
    }

    #[test]
    fn points_off_the_board_map_to_no_square() {
        assert_eq!(world_to_square(Vec3::new(-1.0, 0.0, 3.0)), None);
        assert_eq!(world_to_square(Vec3::new(3.0, 0.0, 9.2)), None);
        assert_eq!(world_to_square(Vec3::new(42.0, 0.0, 42.0)), None);
    }

    #[test]
    fn nearby_points_snap_to_the_square_center() {
        let d4: Square = "d4".parse().expect("square");
        let center = square_to_world(d4);
        let nudged = center + Vec3::new(0.4, 0.0, -0.4);
        assert_eq!(world_to_square(nudged), Some(d4));
    }
}
