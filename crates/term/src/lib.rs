//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`playfield_core::PlayfieldSnapshot`] into a simple framebuffer that is then
//! flushed to a terminal backend.
//!
//! - `core` stays deterministic and never sees the terminal
//! - cells are drawn 2 chars wide to compensate for glyph aspect ratio
//! - only changed runs are written after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use playfield_core as core;
pub use playfield_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
