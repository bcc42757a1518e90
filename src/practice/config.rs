use crate::error::{PracticeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RESIDENT_NAME: &str = "Alice";
const DEFAULT_GUEST_NAME: &str = "You";
const DEFAULT_EMPTY_NEWS: &str = "Sin noticias";

/// Keys accepted by [`PracticeConfig::get`] and [`PracticeConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["resident-name", "guest-name", "empty-news"];

/// Configuration for pattern-practice, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeConfig {
    /// Reader that is always subscribed to the newsletter
    #[serde(default = "default_resident_name")]
    pub resident_name: String,

    /// Reader whose subscription the user toggles
    #[serde(default = "default_guest_name")]
    pub guest_name: String,

    /// Shown for a reader that has not received any news yet
    #[serde(default = "default_empty_news")]
    pub empty_news: String,
}

fn default_resident_name() -> String {
    DEFAULT_RESIDENT_NAME.to_string()
}

fn default_guest_name() -> String {
    DEFAULT_GUEST_NAME.to_string()
}

fn default_empty_news() -> String {
    DEFAULT_EMPTY_NEWS.to_string()
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            resident_name: default_resident_name(),
            guest_name: default_guest_name(),
            empty_news: default_empty_news(),
        }
    }
}

impl PracticeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PracticeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        tracing::debug!(path = %config_path.display(), "config saved");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "resident-name" => Some(self.resident_name.clone()),
            "guest-name" => Some(self.guest_name.clone()),
            "empty-news" => Some(self.empty_news.clone()),
            _ => None,
        }
    }

    /// Set a key. Reader names must not be blank; the placeholder may be.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "resident-name" | "guest-name" if value.trim().is_empty() => Err(
                PracticeError::Config(format!("{} cannot be empty", key)),
            ),
            "resident-name" => {
                self.resident_name = value.trim().to_string();
                Ok(())
            }
            "guest-name" => {
                self.guest_name = value.trim().to_string();
                Ok(())
            }
            "empty-news" => {
                self.empty_news = value.to_string();
                Ok(())
            }
            _ => Err(PracticeError::Config(format!(
                "Unknown config key: {}",
                key
            ))),
        }
    }
}
