//! Configuration loading for the docent player.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_audio_path")]
    pub audio_path: String,
    #[serde(default)]
    pub artwork_path: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_day_highlight")]
    pub day_highlight: HighlightColor,
    #[serde(default = "default_night_highlight")]
    pub night_highlight: HighlightColor,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            title: default_title(),
            audio_path: default_audio_path(),
            artwork_path: None,
            font_size: default_font_size(),
            volume: default_volume(),
            tick_interval_ms: default_tick_interval_ms(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            day_highlight: default_day_highlight(),
            night_highlight: default_night_highlight(),
            log_level: default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HighlightColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

fn default_title() -> String {
    "Audio Docent: The Starry Night".to_string()
}

fn default_audio_path() -> String {
    "assets/docent-audio.wav".to_string()
}

fn default_font_size() -> u32 {
    18
}

fn default_volume() -> f32 {
    1.0
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_window_width() -> f32 {
    720.0
}

fn default_window_height() -> f32 {
    900.0
}

fn default_day_highlight() -> HighlightColor {
    HighlightColor {
        r: 0.85,
        g: 0.68,
        b: 0.21,
        a: 0.35,
    }
}

fn default_night_highlight() -> HighlightColor {
    HighlightColor {
        r: 0.85,
        g: 0.68,
        b: 0.21,
        a: 0.25,
    }
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}
