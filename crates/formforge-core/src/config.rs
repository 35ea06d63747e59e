//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Serialize, Deserialize)]` generates the TOML conversion, and
//! `#[serde(default)]` fills missing keys from `Default::default()`, so a
//! config file only needs the keys it wants to change.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::settings::FormSettings;
use crate::store::{DEFAULT_TITLE, FormState};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and panel layout
    pub ui: UiConfig,

    /// Defaults for new forms
    pub form: FormDefaults,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Using default config: {}", err);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("formforge").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns an empty form using the configured defaults.
    pub fn new_form(&self) -> FormState {
        FormState::new(self.form.title.clone(), self.form.settings())
    }
}

/// Window and panel layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,

    /// Width of the field type list
    pub sidebar_width: f32,

    /// Width of the properties panel
    pub properties_width: f32,

    /// Dark theme
    pub dark: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 800.0,
            sidebar_width: 256.0,
            properties_width: 320.0,
            dark: true,
        }
    }
}

/// Defaults applied to new forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub title: String,
    pub theme: String,
    pub show_progress_bar: bool,
    pub submit_button_text: String,
}

impl FormDefaults {
    /// Returns the settings a new form starts with.
    pub fn settings(&self) -> FormSettings {
        FormSettings {
            theme: self.theme.clone(),
            show_progress_bar: self.show_progress_bar,
            submit_button_text: self.submit_button_text.clone(),
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        let settings = FormSettings::default();
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: settings.theme,
            show_progress_bar: settings.show_progress_bar,
            submit_button_text: settings.submit_button_text,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
