//! Entry point for the docent player.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Open the narration track and build the built-in transcript.
//! - Launch the GUI application.

mod app;
mod audio;
mod config;
mod timecode;
mod transcript;

use crate::app::run_app;
use crate::audio::NarrationPlayer;
use crate::config::load_config;
use crate::transcript::sample_transcript;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let mut config = load_config(Path::new("conf/config.toml"));
    if let Some(path) = parse_args() {
        config.audio_path = path.to_string_lossy().into_owned();
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        audio = %config.audio_path,
        level = %config.log_level,
        "Starting docent player"
    );

    let transcript = sample_transcript();
    info!(segments = transcript.len(), "Built docent transcript");

    // A missing or unreadable track is not fatal: the UI still comes up,
    // position updates just never fire.
    let player = match NarrationPlayer::load(Path::new(&config.audio_path)) {
        Ok(player) => Some(player),
        Err(err) => {
            warn!(
                audio = %config.audio_path,
                "Continuing without audio: {err:#}"
            );
            None
        }
    };

    run_app(config, transcript, player).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Option<PathBuf> {
    let path = env::args().nth(1).map(PathBuf::from)?;
    if !path.exists() {
        warn!(path = %path.display(), "Audio path argument does not exist");
    }
    Some(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
