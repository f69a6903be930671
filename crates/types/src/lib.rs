//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used by the engine,
//! the terminal renderer and the input mapper alike.
//!
//! # Playfield Dimensions
//!
//! The default playfield is the classic one:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Both are configurable through [`EngineConfig`].
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `BASE_FALL_MS` | 500 | Gravity interval at level 1 |
//! | `FALL_DECREMENT_MS` | 50 | Interval reduction per level |
//! | `FALL_FLOOR_MS` | 50 | Fastest gravity interval |
//!
//! # Examples
//!
//! ```
//! use playfield_types::{EngineConfig, PieceKind, GameAction};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! let config = EngineConfig::default();
//! assert_eq!((config.width, config.height), (10, 20));
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: u8 = 20;

/// Smallest accepted board dimension
pub const MIN_DIMENSION: u8 = 4;

/// Largest accepted board dimension
pub const MAX_DIMENSION: u8 = 64;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_FALL_MS: u32 = 500;

/// Gravity interval reduction per level gained
pub const FALL_DECREMENT_MS: u32 = 50;

/// Gravity interval never drops below this
pub const FALL_FLOOR_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared row, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 100;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop DAS in milliseconds.
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop ARR in milliseconds.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use playfield_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter, used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color of cells occupied by this kind.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
        }
    }
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell, colored by the kind that filled it
pub type Cell = Option<PieceKind>;

/// Engine-level player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}

impl GameAction {
    /// Parse from a camelCase or lowercase name (case-insensitive)
    ///
    /// ```
    /// use playfield_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Observable engine state.
///
/// Locking happens synchronously inside a single call and is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    #[default]
    Active,
    GameOver,
}

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is outside {}..={}", MIN_DIMENSION, MAX_DIMENSION)]
    Width(u8),
    #[error("board height {0} is outside {}..={}", MIN_DIMENSION, MAX_DIMENSION)]
    Height(u8),
    #[error("lines_per_level must be greater than zero")]
    LinesPerLevel,
    #[error("fall floor {floor}ms must be non-zero and at most the base interval {base}ms")]
    FallFloor { floor: u32, base: u32 },
}

/// Tunable rules of a playfield.
///
/// Board coordinates are `i8`, so dimensions are capped at
/// [`MAX_DIMENSION`]; run [`EngineConfig::validate`] before building a
/// playfield from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub base_fall_ms: u32,
    pub fall_decrement_ms: u32,
    pub fall_floor_ms: u32,
    pub lines_per_level: u32,
    pub points_per_line: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_fall_ms: BASE_FALL_MS,
            fall_decrement_ms: FALL_DECREMENT_MS,
            fall_floor_ms: FALL_FLOOR_MS,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !range.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::LinesPerLevel);
        }
        if self.fall_floor_ms == 0 || self.fall_floor_ms > self.base_fall_ms {
            return Err(ConfigError::FallFloor {
                floor: self.fall_floor_ms,
                base: self.base_fall_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let c = EngineConfig::default();
        assert_eq!(c.width, 10);
        assert_eq!(c.height, 20);
        assert_eq!(c.base_fall_ms, 500);
        assert_eq!(c.fall_decrement_ms, 50);
        assert_eq!(c.fall_floor_ms, 50);
        assert_eq!(c.lines_per_level, 10);
        assert_eq!(c.points_per_line, 100);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let c = EngineConfig::default().with_size(3, 20);
        assert_eq!(c.validate(), Err(ConfigError::Width(3)));

        let c = EngineConfig::default().with_size(10, 65);
        assert_eq!(c.validate(), Err(ConfigError::Height(65)));
    }

    #[test]
    fn validate_rejects_bad_timing() {
        let c = EngineConfig {
            fall_floor_ms: 600,
            ..EngineConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::FallFloor {
                floor: 600,
                base: 500
            })
        );

        let c = EngineConfig {
            lines_per_level: 0,
            ..EngineConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::LinesPerLevel));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c: EngineConfig = serde_json::from_str(r#"{ "width": 12 }"#).unwrap();
        assert_eq!(c.width, 12);
        assert_eq!(c.height, DEFAULT_HEIGHT);
        assert_eq!(c.base_fall_ms, BASE_FALL_MS);
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
