//! Command-line arguments, configuration loading, and logging setup.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::types::EngineConfig;

/// Play Tetris in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "tetris-playfield", version, about)]
pub struct Cli {
    /// Seed for the piece generator; defaults to the current time
    #[arg(long)]
    pub seed: Option<u32>,

    /// JSON file with engine settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board width in cells (overrides the config file)
    #[arg(long)]
    pub width: Option<u8>,

    /// Board height in cells (overrides the config file)
    #[arg(long)]
    pub height: Option<u8>,

    /// Write logs to this file; logging is off without it
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective engine configuration.
    ///
    /// File values are applied first, then `--width`/`--height`, and the
    /// result is validated.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate().context("invalid engine configuration")?;
        Ok(config)
    }
}

/// Read an [`EngineConfig`] from a JSON file. Missing fields keep defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Route `log` output to `path`.
///
/// The terminal UI owns stdout and stderr, so logs only go to a file. The
/// default filter is `info`; `RUST_LOG` overrides it.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialise logger")?;
    Ok(())
}
