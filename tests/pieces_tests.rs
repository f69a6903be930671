//! Orientation tables and spawn placement

use tetris_playfield::core::{get_shape, orientation_count, orientations, Playfield, SequenceSource};
use tetris_playfield::core::pieces::{shape_width, spawn_x};
use tetris_playfield::types::{EngineConfig, PieceKind};

#[test]
fn test_orientation_counts() {
    assert_eq!(orientation_count(PieceKind::O), 1);
    for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
        assert_eq!(orientation_count(kind), 2, "{kind:?}");
    }
    for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
        assert_eq!(orientation_count(kind), 4, "{kind:?}");
    }
}

#[test]
fn test_every_shape_has_four_distinct_cells_anchored_at_origin() {
    for kind in PieceKind::ALL {
        for shape in orientations(kind) {
            let mut cells = shape.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), 4, "{kind:?}");
            assert_eq!(shape.iter().map(|c| c.0).min(), Some(0), "{kind:?}");
            assert_eq!(shape.iter().map(|c| c.1).min(), Some(0), "{kind:?}");
        }
    }
}

#[test]
fn test_get_shape_wraps_orientation_index() {
    for kind in PieceKind::ALL {
        let n = orientation_count(kind);
        assert_eq!(get_shape(kind, n), get_shape(kind, 0));
    }
}

#[test]
fn test_spawn_columns_on_default_board() {
    assert_eq!(spawn_x(PieceKind::I, 10), 3);
    assert_eq!(spawn_x(PieceKind::O, 10), 4);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(shape_width(&get_shape(kind, 0)), 3);
        assert_eq!(spawn_x(kind, 10), 4, "{kind:?}");
    }
}

#[test]
fn test_full_rotation_cycle_returns_to_spawn_shape() {
    for kind in PieceKind::ALL {
        let mut pf = Playfield::new(EngineConfig::default(), SequenceSource::repeat(kind));
        pf.try_move(0, 4);
        let start = pf.active().unwrap();

        for _ in 0..orientation_count(kind) {
            pf.try_rotate();
        }

        let end = pf.active().unwrap();
        assert_eq!(end.cells(), start.cells(), "{kind:?}");
        assert_eq!((end.x, end.y), (start.x, start.y), "rotation keeps the anchor");
    }
}
