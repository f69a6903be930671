//! Pieces module - tetromino orientation tables
//!
//! Every kind owns a fixed list of orientations. Each orientation is a tight
//! set of four mino offsets whose bounding box starts at (0, 0), and each entry
//! is the clockwise rotation of the previous one. Kinds whose half-turn looks
//! identical (I, S, Z) keep two entries and the square keeps one, so a rotation
//! is just a step through the list at the same anchor.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

const I_SHAPES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const O_SHAPES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// All orientations defined for a kind, spawn orientation first.
pub fn orientations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

pub fn orientation_count(kind: PieceKind) -> u8 {
    orientations(kind).len() as u8
}

/// Get the shape (mino offsets) for a kind and orientation index.
///
/// The index wraps, so any counter can be passed in.
pub fn get_shape(kind: PieceKind, orientation: u8) -> PieceShape {
    let table = orientations(kind);
    table[orientation as usize % table.len()]
}

/// Orientation reached by one clockwise step.
pub fn next_orientation(kind: PieceKind, orientation: u8) -> u8 {
    (orientation + 1) % orientation_count(kind)
}

/// Width of a shape's bounding box in cells.
pub fn shape_width(shape: &PieceShape) -> u8 {
    shape.iter().map(|&(x, _)| x).max().unwrap_or(0) as u8 + 1
}

/// Height of a shape's bounding box in cells.
pub fn shape_height(shape: &PieceShape) -> u8 {
    shape.iter().map(|&(_, y)| y).max().unwrap_or(0) as u8 + 1
}

/// Spawn column that centres the spawn orientation's bounding box.
pub fn spawn_x(kind: PieceKind, board_width: u8) -> i8 {
    let w = shape_width(&get_shape(kind, 0));
    (board_width / 2) as i8 - (w / 2) as i8
}
