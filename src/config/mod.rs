use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::settings::Settings;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration, loaded once at startup.
///
/// The API key ends up injected into the transcription client at
/// construction; nothing reads it from the environment after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini API key. The GEMINI_API_KEY environment variable takes
    /// precedence over the config file.
    pub api_key: Option<String>,

    /// Default transcription settings for new sessions
    pub settings: Settings,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            serde_yaml::from_str::<Config>(&content).context("Failed to parse config file")?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs_err::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn config_path() -> Result<PathBuf> {
        // Current directory first for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("gemini-transcriber").join("config.yaml"))
    }

    /// Whether a usable API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!(
            "  API Key: {}",
            if self.has_api_key() { "configured" } else { "not set" }
        );
        println!("  Language: {}", self.settings.language_label());
        println!("  Model: {}", self.settings.model_label());
        println!(
            "  Diarization: {}, Punctuation: {}, Summary: {}, Timestamps: {}, Profanity filter: {}",
            self.settings.enable_diarization,
            self.settings.enable_punctuation,
            self.settings.enable_summarization,
            self.settings.add_timestamps,
            self.settings.filter_profanity,
        );
    }
}
