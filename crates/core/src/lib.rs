//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the playfield rules and state. It has **no dependency**
//! on UI, timers or I/O, which makes it:
//!
//! - **Deterministic**: the same piece source produces the same game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: any frame loop (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks and line clearing
//! - [`pieces`]: per-kind orientation tables and spawn placement
//! - [`rng`]: the injectable [`PieceSource`] and its implementations
//! - [`scoring`]: line clear points, levels and gravity speed
//! - [`playfield`]: the engine tying it all together
//! - [`snapshot`]: owned copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Uniform random pieces**: each new piece kind is drawn independently
//! - **In-place rotation**: no wall kicks; a blocked rotation is rejected
//! - **Immediate lock**: a piece locks as soon as gravity cannot move it
//! - **Scoring**: `rows * 100 * level`, level = `lines / 10 + 1`
//! - **Gravity**: `max(50, 500 - (level - 1) * 50)` ms per row
//!
//! # Example
//!
//! ```
//! use playfield_core::{Playfield, SequenceSource};
//! use playfield_types::{EngineConfig, PieceKind};
//!
//! let mut pf = Playfield::new(EngineConfig::default(), SequenceSource::repeat(PieceKind::I));
//!
//! pf.try_move(-1, 0);
//! pf.try_rotate();
//! pf.hard_drop();
//!
//! assert!(!pf.is_game_over());
//! assert_eq!(pf.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`Playfield::tick`] once per frame with the elapsed milliseconds.
//! Gravity fires once the accumulated time reaches the current fall interval.

pub mod board;
pub mod pieces;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use playfield_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use pieces::{get_shape, orientation_count, orientations};
pub use playfield::{Playfield, Tetromino};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, PlayfieldSnapshot};
