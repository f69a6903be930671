//! GameView: maps a `PlayfieldSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PlayfieldSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Banner drawn over the board by the frame loop's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Paused,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const CONTROLS: [&str; 7] = [
    "\u{2190} \u{2192}  Move",
    "\u{2191}    Rotate",
    "\u{2193}    Soft drop",
    "Spc  Drop",
    "P    Pause",
    "R    Restart",
    "Q    Quit",
];

/// A lightweight terminal renderer for the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &PlayfieldSnapshot) -> (u16, u16) {
        (
            snap.width as u16 * self.cell_w + 2,
            snap.height as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(
        &self,
        snap: &PlayfieldSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells and empty grid.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as i8, y as i8, kind),
                    None => {
                        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
                        self.fill_cell(fb, start_x, start_y, x as i8, y as i8, '·', style);
                    }
                }
            }
        }

        if let Some(ghost) = snap.ghost_cells {
            let style = CellStyle::fg(Rgb::new(140, 140, 140)).on(WELL_BG).dim();
            for (x, y) in ghost {
                self.fill_cell(fb, start_x, start_y, x, y, '░', style);
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                self.draw_block(fb, start_x, start_y, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if overlay == Overlay::Paused {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PlayfieldSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::fg(Rgb::from(kind)).on(WELL_BG).bold();
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    /// Fill one board cell; cells above the visible top are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PlayfieldSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "CONTROLS", label);
        for line in CONTROLS {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value.dim());
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16, text: &str) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActiveSnapshot;

    fn empty_snapshot(width: u8, height: u8) -> PlayfieldSnapshot {
        PlayfieldSnapshot {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            level: 1,
            ..Default::default()
        }
    }

    #[test]
    fn frame_size_includes_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(&empty_snapshot(10, 20)), (22, 22));
    }

    #[test]
    fn cells_above_top_are_not_drawn() {
        let mut snap = empty_snapshot(4, 4);
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::I,
            cells: [(0, -2), (0, -1), (0, 0), (0, 1)],
        });
        let fb = GameView::default().render(&snap, Overlay::None, Viewport::new(10, 6));

        // Border row stays intact; only rows 0 and 1 get blocks.
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
        assert_eq!(fb.get(1, 1).unwrap().ch, '█');
        assert_eq!(fb.get(1, 2).unwrap().ch, '█');
        assert_eq!(fb.get(1, 3).unwrap().ch, '·');
    }
}
