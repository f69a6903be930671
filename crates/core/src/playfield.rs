//! Playfield module - the complete engine state
//!
//! Ties together the board, the orientation tables, the piece source and the
//! scoring rules. The engine only advances when the caller invokes one of its
//! operations: `tick` for gravity and `try_move`/`try_rotate`/`hard_drop` for
//! player input. Rejected moves are silent and report `false`; the only
//! terminal condition is a spawn collision, which flips [`PlayState::GameOver`].

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{get_shape, next_orientation, spawn_x, PieceShape};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, PlayfieldSnapshot};
use crate::types::{EngineConfig, GameAction, PieceKind, PlayState};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Index into the kind's orientation table
    pub orientation: u8,
    /// Column of the bounding box's left edge
    pub x: i8,
    /// Row of the bounding box's top edge
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position of a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            orientation: 0,
            x: spawn_x(kind, board_width),
            y: 0,
        }
    }

    /// Get the shape (mino offsets) for current orientation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.orientation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape(), self.x, self.y)
    }
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct Playfield<R = SimpleRng> {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    source: R,
    state: PlayState,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    pieces_spawned: u32,
}

impl Playfield<SimpleRng> {
    /// Default-sized playfield driven by a seeded uniform RNG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(EngineConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: PieceSource> Playfield<R> {
    /// Create an empty playfield and spawn the first piece.
    ///
    /// `config` must pass [`EngineConfig::validate`]; debug builds assert it.
    pub fn new(config: EngineConfig, source: R) -> Self {
        let board = Board::new(config.width, config.height);
        Self::with_board(config, board, source)
    }

    /// Create a playfield over a prepared board and spawn the first piece.
    ///
    /// If the spawn area is already blocked the playfield starts in
    /// [`PlayState::GameOver`].
    pub fn with_board(config: EngineConfig, board: Board, source: R) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid engine config: {:?}",
            config.validate()
        );
        let level = level_for_lines(0, config.lines_per_level);
        let mut playfield = Self {
            config,
            board,
            active: None,
            source,
            state: PlayState::Active,
            score: 0,
            level,
            lines: 0,
            fall_interval_ms: fall_interval_ms(level, &config),
            fall_timer_ms: 0,
            pieces_spawned: 0,
        };
        playfield.spawn_piece();
        playfield
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Absolute cells of the active piece (for rendering)
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == PlayState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Time accumulated toward the next gravity step
    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Spawn a new piece from the source at the top centre.
    ///
    /// On collision the game ends: the board is left untouched and no piece
    /// is active afterwards.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let kind = self.source.next_kind();
        let piece = Tetromino::spawn(kind, self.board.width());

        if !piece.fits(&self.board) {
            self.active = None;
            self.state = PlayState::GameOver;
            info!(
                "game over: {:?} blocked at spawn (score {}, lines {}, level {})",
                kind, self.score, self.lines, self.level
            );
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.fall_timer_ms = 0;
        debug!("spawned {:?} at ({}, {})", kind, piece.x, piece.y);
        true
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let (Some(x), Some(y)) = (active.x.checked_add(dx), active.y.checked_add(dy)) else {
            return false;
        };
        let candidate = Tetromino { x, y, ..active };

        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        false
    }

    /// Try to step the active piece to its next orientation in place
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = Tetromino {
            orientation: next_orientation(active.kind, active.orientation),
            ..active
        };

        if candidate == active {
            // Single-orientation kinds have nothing to rotate into.
            return false;
        }

        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        false
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }

        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }

        self.lock_piece();
        rows
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// At most one gravity step happens per call. Returns true if the piece
    /// moved down or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.active.is_none() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Write the active piece into the board, clear rows and spawn the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let locked = self
            .board
            .lock_piece(&active.shape(), active.x, active.y, active.kind);
        debug_assert!(locked, "active piece always fits the board");
        debug!(
            "locked {:?} orientation {} at ({}, {})",
            active.kind, active.orientation, active.x, active.y
        );

        self.clear_full_rows();
        self.spawn_piece();
    }

    /// Remove full rows and apply their score, level and speed effects.
    ///
    /// Points use the level in effect before the clear. Returns the number of
    /// rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let rows = self.board.clear_full_rows();
        if rows == 0 {
            return 0;
        }

        let gained = line_clear_score(rows, self.level, self.config.points_per_line);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(rows);

        let level = level_for_lines(self.lines, self.config.lines_per_level);
        if level != self.level {
            info!("level {} -> {}", self.level, level);
        }
        self.level = level;
        self.fall_interval_ms = fall_interval_ms(level, &self.config);

        debug!(
            "cleared {} rows (+{}), score {}, lines {}",
            rows, gained, self.score, self.lines
        );
        rows
    }

    /// Row the active piece would lock on if hard-dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let shape = active.shape();

        let mut y = active.y;
        while self.board.fits(&shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
        }
    }

    /// Copy the renderable state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut PlayfieldSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.map(|p| ActiveSnapshot {
            kind: p.kind,
            cells: p.cells(),
        });
        out.ghost_y = self.ghost_y();
        out.ghost_cells = match (self.active, out.ghost_y) {
            (Some(p), Some(gy)) => Some(Tetromino { y: gy, ..p }.cells()),
            _ => None,
        };
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> PlayfieldSnapshot {
        let mut s = PlayfieldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    fn field(kinds: &[PieceKind]) -> Playfield<SequenceSource> {
        Playfield::new(EngineConfig::default(), SequenceSource::new(kinds.to_vec()))
    }

    #[test]
    fn test_new_playfield() {
        let pf = field(&[PieceKind::T]);

        assert_eq!(pf.state(), PlayState::Active);
        assert_eq!(pf.score(), 0);
        assert_eq!(pf.level(), 1);
        assert_eq!(pf.lines(), 0);
        assert_eq!(pf.fall_interval_ms(), 500);
        assert_eq!(pf.pieces_spawned(), 1);
        assert_eq!(
            pf.active(),
            Some(Tetromino {
                kind: PieceKind::T,
                orientation: 0,
                x: 4,
                y: 0
            })
        );
    }

    #[test]
    fn test_try_move() {
        let mut pf = field(&[PieceKind::T]);
        let initial_x = pf.active().unwrap().x;

        assert!(pf.try_move(1, 0));
        assert_eq!(pf.active().unwrap().x, initial_x + 1);

        assert!(pf.try_move(-1, 0));
        assert_eq!(pf.active().unwrap().x, initial_x);

        assert!(pf.try_move(0, 1));
        assert_eq!(pf.active().unwrap().y, 1);
    }

    #[test]
    fn test_try_move_stops_at_walls() {
        let mut pf = field(&[PieceKind::O]);

        let mut moved = 0;
        for _ in 0..10 {
            if pf.try_move(-1, 0) {
                moved += 1;
            }
        }
        // O spawns at x=4
        assert_eq!(moved, 4);
        assert_eq!(pf.active().unwrap().x, 0);
    }

    #[test]
    fn test_rotation_cycles_through_orientations() {
        let mut pf = field(&[PieceKind::T]);
        pf.try_move(0, 1);

        for expected in [1, 2, 3, 0] {
            assert!(pf.try_rotate());
            assert_eq!(pf.active().unwrap().orientation, expected);
        }
    }

    #[test]
    fn test_o_piece_does_not_rotate() {
        let mut pf = field(&[PieceKind::O]);
        let before = pf.active();
        assert!(!pf.try_rotate());
        assert_eq!(pf.active(), before);
    }

    #[test]
    fn test_rotation_rejected_at_floor() {
        let mut pf = field(&[PieceKind::I]);
        // Horizontal I resting on the floor cannot stand up in place.
        while pf.try_move(0, 1) {}
        let before = pf.active();
        assert!(!pf.try_rotate());
        assert_eq!(pf.active(), before);
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut pf = field(&[PieceKind::T]);

        assert!(!pf.tick(200));
        assert!(!pf.tick(200));
        assert_eq!(pf.active().unwrap().y, 0);
        assert_eq!(pf.fall_timer_ms(), 400);

        assert!(pf.tick(100));
        assert_eq!(pf.active().unwrap().y, 1);
        assert_eq!(pf.fall_timer_ms(), 0);
    }

    #[test]
    fn test_tick_single_step_per_call() {
        let mut pf = field(&[PieceKind::T]);
        assert!(pf.tick(10_000));
        assert_eq!(pf.active().unwrap().y, 1);
    }

    #[test]
    fn test_tick_locks_grounded_piece() {
        let mut pf = field(&[PieceKind::O, PieceKind::T]);
        while pf.try_move(0, 1) {}

        assert!(pf.tick(500));
        assert!(pf.board().is_occupied(4, 18));
        assert!(pf.board().is_occupied(5, 19));
        assert_eq!(pf.active().unwrap().kind, PieceKind::T);
        assert_eq!(pf.pieces_spawned(), 2);
    }

    #[test]
    fn test_ghost_y_is_landing_row() {
        let pf = field(&[PieceKind::I]);
        assert_eq!(pf.ghost_y(), Some(19));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut pf = field(&[PieceKind::T]);
        assert!(pf.apply_action(GameAction::MoveLeft));
        assert_eq!(pf.active().unwrap().x, 3);
        assert!(pf.apply_action(GameAction::MoveRight));
        assert!(pf.apply_action(GameAction::SoftDrop));
        assert_eq!(pf.active().unwrap().y, 1);
        assert!(pf.apply_action(GameAction::Rotate));
        assert!(pf.apply_action(GameAction::HardDrop));
        assert_eq!(pf.pieces_spawned(), 2);
    }

    #[test]
    fn test_game_over_makes_operations_no_ops() {
        let mut board = Board::new(10, 20);
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::Z));
        }
        let mut pf = Playfield::with_board(
            EngineConfig::default(),
            board.clone(),
            SequenceSource::repeat(PieceKind::O),
        );

        assert!(pf.is_game_over());
        assert!(pf.active().is_none());
        assert_eq!(pf.board(), &board);
        assert!(!pf.try_move(1, 0));
        assert!(!pf.try_rotate());
        assert_eq!(pf.hard_drop(), 0);
        assert!(!pf.tick(1_000));
        assert!(!pf.spawn_piece());
        assert!(!pf.apply_action(GameAction::HardDrop));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let pf = field(&[PieceKind::I]);
        let snap = pf.snapshot();

        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.cells.len(), 200);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::I);
        assert_eq!(active.cells, [(3, 0), (4, 0), (5, 0), (6, 0)]);
        assert_eq!(snap.ghost_cells, Some([(3, 19), (4, 19), (5, 19), (6, 19)]));
        assert!(!snap.game_over);
    }
}
