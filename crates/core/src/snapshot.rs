//! Snapshot module - owned render state
//!
//! A [`PlayfieldSnapshot`] copies everything a frontend draws in one frame.
//! `Playfield::snapshot_into` refills an existing snapshot so the frame loop
//! reuses one allocation.

use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Absolute board coordinates; rows may be negative above the top.
    pub cells: [(i8, i8); 4],
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlayfieldSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells, `width * height` long.
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub ghost_cells: Option<[(i8, i8); 4]>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub game_over: bool,
}

impl PlayfieldSnapshot {
    /// Locked cell at (x, y), `None` when empty or out of range.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.active = None;
        self.ghost_y = None;
        self.ghost_cells = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let mut snap = PlayfieldSnapshot {
            width: 2,
            height: 2,
            cells: vec![None; 4],
            ..Default::default()
        };
        snap.cells[3] = Some(PieceKind::L);

        assert_eq!(snap.cell(1, 1), Some(PieceKind::L));
        assert_eq!(snap.cell(0, 0), None);
        assert_eq!(snap.cell(2, 0), None);

        snap.clear();
        assert_eq!(snap.cell(1, 1), None);
        assert_eq!(snap.level, 1);
    }
}
