//! CLI argument definitions for the minutes extractor.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Minutes: extract action items (action, assignee, deadline) from meeting notes.
#[derive(Parser, Debug)]
#[command(name = "minutes", version, about)]
pub struct CliArgs {
    /// Meeting notes to read; stdin when omitted.
    pub file: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Reference date (YYYY-MM-DD) for relative deadlines; defaults to today.
    #[arg(long = "today")]
    pub today: Option<String>,

    /// Treat the input as a JSON request: {"notes": "..."}.
    #[arg(long = "json")]
    pub json: bool,

    /// Run the annotator without POS tags or entities.
    #[arg(long = "degraded")]
    pub degraded: bool,

    /// Print annotator status and exit.
    #[arg(long = "status")]
    pub status: bool,

    /// Pretty-print the JSON result.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MINUTES_CONFIG env var > platform default (~/.minutes/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MINUTES_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log filter.
    ///
    /// Priority: --log-level flag > MINUTES_LOG_LEVEL env var > RUST_LOG > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        ["MINUTES_LOG_LEVEL", "RUST_LOG"]
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".minutes").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".minutes").join("config.toml");
    }
    PathBuf::from("config.toml")
}
