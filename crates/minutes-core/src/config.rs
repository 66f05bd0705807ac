use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Top-level configuration for the minutes extractor.
///
/// Loaded from `~/.minutes/config.toml` by default. Every field has a
/// default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinutesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub annotator: AnnotatorConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl MinutesConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MinutesConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Which annotator capabilities are negotiated at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotatorMode {
    /// Sentence segmentation, POS tagging and entity recognition.
    #[default]
    Full,
    /// Sentence and token boundaries only.
    Degraded,
}

impl AnnotatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Degraded => "degraded",
        }
    }
}

/// Linguistic annotator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    pub mode: AnnotatorMode,
}

/// Extraction engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many tokens before the first verb the positional assignee
    /// heuristic may look at.
    pub assignee_window: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { assignee_window: 6 }
    }
}
