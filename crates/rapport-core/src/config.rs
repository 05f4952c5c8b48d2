//! Configuration for rapport
//!
//! Read from `--config <file>` when given, otherwise from
//! `$RAPPORT_CONFIG_DIR/config.toml` or the platform config directory
//! (`~/.config/rapport/config.toml` on Linux). A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{RapportError, Result};
use crate::metrics::AnalysisOptions;
use crate::text::Tokenizer;

pub use types::{RapportConfig, DEFAULT_DATABASE, DEFAULT_MESSAGE_MAX_CHARS};

const CONFIG_DIR: &str = "rapport";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "RAPPORT_CONFIG_DIR";

impl RapportConfig {
    /// Default location of the user config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RapportError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load an explicit file (which must exist), or the default file if present
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RapportError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: RapportConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RapportError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.feedback_max_chars == 0 {
            bail_invalid!("feedback_max_chars", self.feedback_max_chars);
        }
        if self.message_max_chars == 0 {
            bail_invalid!("message_max_chars", self.message_max_chars);
        }
        if self.database.trim().is_empty() {
            bail_invalid!("database", "empty path");
        }
        Ok(())
    }

    /// Metric options derived from this configuration
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            locale: self.locale,
            tokenizer: Tokenizer::new(self.tokenizer, self.stemming),
            lexicon_match: self.lexicon_match,
        }
    }
}
