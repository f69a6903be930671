//! Tetris playfield (workspace facade crate).
//!
//! The engine, input, and terminal layers live in dedicated crates under
//! `crates/`; this package re-exports them as `tetris_playfield::{core,input,term,types}`
//! and hosts the command-line surface of the binary.

pub mod cli;

pub use playfield_core as core;
pub use playfield_input as input;
pub use playfield_term as term;
pub use playfield_types as types;
