//! Terminal Tetris runner (default binary).
//!
//! Drives a `Playfield` at a fixed frame rate: crossterm supplies key events,
//! the DAS/ARR handler turns held keys into repeats, and the framebuffer
//! renderer flushes only what changed.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, info};

use tetris_playfield::cli::{init_logging, Cli};
use tetris_playfield::core::{Playfield, PlayfieldSnapshot, SimpleRng};
use tetris_playfield::input::{is_repeatable, map_key, Command, InputHandler};
use tetris_playfield::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use tetris_playfield::types::{EngineConfig, FRAME_MS};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let config = cli.engine_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, cli.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn elapsed_ms(dt: Duration) -> u32 {
    dt.as_millis().min(u32::MAX as u128) as u32
}

/// A fixed `--seed` replays the same game on every restart.
fn new_game(config: EngineConfig, seed: Option<u32>) -> Playfield {
    let seed = seed.unwrap_or_else(clock_seed);
    info!("new game: seed {seed}, board {}x{}", config.width, config.height);
    Playfield::new(config, SimpleRng::new(seed))
}

/// Game state owned by the frame loop.
struct Session {
    config: EngineConfig,
    seed: Option<u32>,
    playfield: Playfield,
    input: InputHandler,
    paused: bool,
}

impl Session {
    fn new(config: EngineConfig, seed: Option<u32>) -> Self {
        Self {
            config,
            seed,
            playfield: new_game(config, seed),
            input: InputHandler::new(),
            paused: false,
        }
    }

    /// Handle one key event. Returns `false` when the player quits.
    fn on_key(&mut self, key: KeyEvent) -> bool {
        let Some(cmd) = map_key(key) else {
            return true;
        };

        match key.kind {
            KeyEventKind::Press => match cmd {
                Command::Quit => return false,
                Command::Pause => {
                    if !self.playfield.is_game_over() {
                        self.paused = !self.paused;
                        self.input.reset();
                        debug!("paused: {}", self.paused);
                    }
                }
                Command::Restart => {
                    self.playfield = new_game(self.config, self.seed);
                    self.paused = false;
                    self.input.reset();
                }
                Command::Game(_) if self.paused => {}
                Command::Game(action) => {
                    if !is_repeatable(cmd) {
                        self.playfield.apply_action(action);
                    } else if let Some(action) = self.input.press(action) {
                        self.playfield.apply_action(action);
                    }
                }
            },
            KeyEventKind::Repeat => {
                // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
            }
            KeyEventKind::Release => {
                if let Command::Game(action) = cmd {
                    self.input.release(action);
                }
            }
        }
        true
    }

    /// Advance held-key repeats and gravity by the real time since the last step.
    fn step(&mut self, elapsed_ms: u32) {
        if self.paused {
            return;
        }
        for action in self.input.update(elapsed_ms) {
            self.playfield.apply_action(action);
        }
        self.playfield.tick(elapsed_ms);
    }

    fn overlay(&self) -> Overlay {
        if self.paused {
            Overlay::Paused
        } else {
            Overlay::None
        }
    }
}

fn run(term: &mut TerminalRenderer, config: EngineConfig, seed: Option<u32>) -> Result<()> {
    let mut session = Session::new(config, seed);

    let view = GameView::default();
    let mut snapshot = PlayfieldSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.playfield.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, session.overlay(), Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if !session.on_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let dt = last_frame.elapsed();
        if dt >= frame {
            last_frame = Instant::now();
            session.step(elapsed_ms(dt));
        }
    }
}
