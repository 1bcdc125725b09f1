//! Piece components and spawning
//!
//! Pieces are primitive meshes (no model assets): each type gets its own
//! silhouette and each color its own material. Spawning attaches the drag
//! observers, which is the whole input surface of the board widget.

use bevy::prelude::*;
use shakmaty::{Role, Square};

use crate::board::squares::square_to_world;
use crate::game::systems::drag::{on_piece_drag, on_piece_drag_end, on_piece_drag_start};

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect, Default)]
#[reflect(Component)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn label(&self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl From<shakmaty::Color> for PieceColor {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => PieceColor::White,
            shakmaty::Color::Black => PieceColor::Black,
        }
    }
}

impl From<PieceColor> for shakmaty::Color {
    fn from(color: PieceColor) -> Self {
        match color {
            PieceColor::White => shakmaty::Color::White,
            PieceColor::Black => shakmaty::Color::Black,
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect, Default)]
#[reflect(Component)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    #[default]
    Pawn,
}

impl From<Role> for PieceType {
    fn from(role: Role) -> Self {
        match role {
            Role::King => PieceType::King,
            Role::Queen => PieceType::Queen,
            Role::Rook => PieceType::Rook,
            Role::Bishop => PieceType::Bishop,
            Role::Knight => PieceType::Knight,
            Role::Pawn => PieceType::Pawn,
        }
    }
}

/// A piece on the visible board.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceType,
    pub file: u8,
    pub rank: u8,
}

impl Piece {
    /// The square this piece was last synced to.
    pub fn square(&self) -> Square {
        Square::from_coords(
            shakmaty::File::new(self.file as u32),
            shakmaty::Rank::new(self.rank as u32),
        )
    }
}

/// Mesh and material handles for piece spawning, built once at startup.
#[derive(Resource)]
pub struct PieceAssets {
    king: (Handle<Mesh>, f32),
    queen: (Handle<Mesh>, f32),
    rook: (Handle<Mesh>, f32),
    bishop: (Handle<Mesh>, f32),
    knight: (Handle<Mesh>, f32),
    pawn: (Handle<Mesh>, f32),
    white_material: Handle<StandardMaterial>,
    black_material: Handle<StandardMaterial>,
}

impl PieceAssets {
    /// Mesh handle and resting height above the board for a piece type.
    pub fn mesh_for(&self, kind: PieceType) -> (Handle<Mesh>, f32) {
        let (handle, lift) = match kind {
            PieceType::King => &self.king,
            PieceType::Queen => &self.queen,
            PieceType::Rook => &self.rook,
            PieceType::Bishop => &self.bishop,
            PieceType::Knight => &self.knight,
            PieceType::Pawn => &self.pawn,
        };
        (handle.clone(), *lift)
    }

    pub fn material_for(&self, color: PieceColor) -> Handle<StandardMaterial> {
        match color {
            PieceColor::White => self.white_material.clone(),
            PieceColor::Black => self.black_material.clone(),
        }
    }
}

/// Build the shared piece meshes and materials.
///
/// Silhouettes are primitive shapes scaled so the pieces read at a glance:
/// tall cylinder king, cone queen, squat cylinder rook, slim cone bishop,
/// offset block knight, capsule pawn.
pub fn load_piece_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let white_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.93, 0.91, 0.86),
        ..default()
    });
    let black_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.16, 0.15, 0.14),
        ..default()
    });

    commands.insert_resource(PieceAssets {
        king: (meshes.add(Cylinder::new(0.20, 0.95)), 0.475),
        queen: (
            meshes.add(Cone {
                radius: 0.26,
                height: 0.85,
            }),
            0.425,
        ),
        rook: (meshes.add(Cylinder::new(0.22, 0.50)), 0.25),
        bishop: (
            meshes.add(Cone {
                radius: 0.20,
                height: 0.65,
            }),
            0.325,
        ),
        knight: (meshes.add(Cuboid::new(0.28, 0.55, 0.28)), 0.275),
        pawn: (meshes.add(Capsule3d::new(0.16, 0.18)), 0.25),
        white_material,
        black_material,
    });
}

/// Spawn one piece at a square and wire up its drag observers.
pub fn spawn_piece(
    commands: &mut Commands,
    assets: &PieceAssets,
    piece: shakmaty::Piece,
    square: Square,
) {
    let color = PieceColor::from(piece.color);
    let kind = PieceType::from(piece.role);
    let (mesh, lift) = assets.mesh_for(kind);

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(assets.material_for(color)),
            Transform::from_translation(square_to_world(square) + Vec3::Y * lift),
            Piece {
                color,
                kind,
                file: u32::from(square.file()) as u8,
                rank: u32::from(square.rank()) as u8,
            },
            Name::new(format!("{} {:?} {}", color.label(), kind, square)),
        ))
        .observe(on_piece_drag_start)
        .observe(on_piece_drag)
        .observe(on_piece_drag_end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_round_trip_with_shakmaty() {
        for color in [shakmaty::Color::White, shakmaty::Color::Black] {
            assert_eq!(shakmaty::Color::from(PieceColor::from(color)), color);
        }
    }

    #[test]
    fn piece_component_recovers_its_square() {
        let d5: Square = "d5".parse().expect("square");
        let piece = Piece {
            color: PieceColor::Black,
            kind: PieceType::Knight,
            file: u32::from(d5.file()) as u8,
            rank: u32::from(d5.rank()) as u8,
        };
        assert_eq!(piece.square(), d5);
    }
}
