//! DAS/ARR input handler for terminal environments.
//!
//! Holds the left/right and soft-drop keys and turns them into repeated
//! [`GameAction`]s. Supports terminals that do not emit key release events by
//! using a timeout.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// Tracks input state for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    last_key_time: Instant,
    horizontal_das_timer: u32,
    down_das_timer: u32,
    horizontal_arr_accumulator: u32,
    down_arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            last_key_time: Instant::now(),
            horizontal_das_timer: 0,
            down_das_timer: 0,
            horizontal_arr_accumulator: 0,
            down_arr_accumulator: 0,
            das_delay,
            arr_rate: arr_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Register a press of a repeatable action.
    ///
    /// Returns the action to apply immediately, or None when the key is
    /// already held (terminal auto-repeat) or the action does not repeat.
    pub fn press(&mut self, action: GameAction) -> Option<GameAction> {
        match action {
            GameAction::MoveLeft => self.press_horizontal(HorizontalDirection::Left, action),
            GameAction::MoveRight => self.press_horizontal(HorizontalDirection::Right, action),
            GameAction::SoftDrop => {
                self.last_key_time = Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_das_timer = 0;
                    self.down_arr_accumulator = 0;
                    Some(action)
                }
            }
            GameAction::HardDrop | GameAction::Rotate => None,
        }
    }

    fn press_horizontal(
        &mut self,
        direction: HorizontalDirection,
        action: GameAction,
    ) -> Option<GameAction> {
        self.last_key_time = Instant::now();
        if self.horizontal == direction {
            None
        } else {
            self.horizontal = direction;
            self.horizontal_das_timer = 0;
            self.horizontal_arr_accumulator = 0;
            Some(action)
        }
    }

    pub fn release(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft if self.horizontal == HorizontalDirection::Left => {
                self.release_horizontal();
            }
            GameAction::MoveRight if self.horizontal == HorizontalDirection::Right => {
                self.release_horizontal();
            }
            GameAction::SoftDrop => self.release_down(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_das_timer = 0;
        self.down_arr_accumulator = 0;
    }

    /// Advance the repeat timers and collect the repeated actions.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            if self.horizontal != HorizontalDirection::None {
                self.release_horizontal();
            }
            if self.down_held {
                self.release_down();
            }
        }

        let horizontal_action = match self.horizontal {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        };

        if let Some(action) = horizontal_action {
            let prev_das = self.horizontal_das_timer;
            self.horizontal_das_timer += elapsed_ms;

            if self.horizontal_das_timer >= self.das_delay {
                let excess = if prev_das < self.das_delay {
                    self.horizontal_das_timer - self.das_delay
                } else {
                    elapsed_ms
                };
                self.horizontal_arr_accumulator += excess;

                while self.horizontal_arr_accumulator >= self.arr_rate {
                    let _ = actions.try_push(action);
                    self.horizontal_arr_accumulator -= self.arr_rate;
                }
            }
        }

        if self.down_held {
            let prev_das = self.down_das_timer;
            self.down_das_timer += elapsed_ms;

            if self.down_das_timer >= SOFT_DROP_DAS_MS {
                let excess = if prev_das < SOFT_DROP_DAS_MS {
                    self.down_das_timer - SOFT_DROP_DAS_MS
                } else {
                    elapsed_ms
                };
                self.down_arr_accumulator += excess;
                while self.down_arr_accumulator >= SOFT_DROP_ARR_MS {
                    let _ = actions.try_push(GameAction::SoftDrop);
                    self.down_arr_accumulator -= SOFT_DROP_ARR_MS;
                }
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release_horizontal();
        self.release_down();
        self.last_key_time = Instant::now();
    }

    /// Pretend the last key event happened `ago` in the past.
    #[cfg(test)]
    fn backdate_last_key(&mut self, ago: std::time::Duration) {
        self.last_key_time = Instant::now() - ago;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
