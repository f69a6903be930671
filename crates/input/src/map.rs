//! Key mapping from terminal events to commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the frame loop to do.
///
/// Only [`Command::Game`] reaches the playfield; pausing, restarting and
/// quitting belong to the loop that drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(GameAction),
    Pause,
    Restart,
    Quit,
}

/// Map keyboard input to a command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let cmd = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Command::Game(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Command::Game(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Command::Game(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => {
            Command::Game(GameAction::Rotate)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Command::Game(GameAction::HardDrop),
        KeyCode::Char('p' | 'P') => Command::Pause,
        KeyCode::Char('r' | 'R') => Command::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,

        _ => return None,
    };
    Some(cmd)
}

/// Whether the key is one the [`crate::InputHandler`] auto-repeats.
pub fn is_repeatable(cmd: Command) -> bool {
    matches!(
        cmd,
        Command::Game(GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop)
    )
}
