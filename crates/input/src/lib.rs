//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework beyond `crossterm` key events. It maps keys
//! into [`Command`]s and provides a DAS/ARR input handler suitable for terminal
//! environments (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use playfield_types as types;

pub use handler::InputHandler;
pub use map::{is_repeatable, map_key, Command};
