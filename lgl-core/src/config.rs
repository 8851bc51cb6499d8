//! Runtime configuration.
//!
//! Every exercise works without a config file. If `lgl.json` exists in the
//! working directory its fields override the defaults; missing fields keep
//! their default value.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::sampling::{SamplingError, TextureOptions};

pub const CONFIG_FILE: &str = "lgl.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
    #[error("window size must be non-zero, got {0}x{1}")]
    WindowSize(u32, u32),
    #[error("invalid texture options: {0}")]
    Textures(#[from] SamplingError),
}

/// Window size used when neither the exercise nor the config picks one.
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Window settings as written in the config file.
///
/// `title`, `width` and `height` stay `None` unless the file sets them, so an
/// exercise's own title and size only apply where the user said nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub gl_major: u8,
    pub gl_minor: u8,
    /// Request a forward-compatible context (required on macOS).
    pub forward_compat: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            gl_major: 3,
            gl_minor: 3,
            forward_compat: true,
            vsync: true,
        }
    }
}

/// Fully resolved settings used to open the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub forward_compat: bool,
    pub vsync: bool,
}

impl WindowConfig {
    /// Fills the unset title and size with the exercise's own choices.
    pub fn resolve(&self, title: &str, size: Option<(u32, u32)>) -> WindowSettings {
        let (width, height) = size.unwrap_or(DEFAULT_SIZE);
        WindowSettings {
            title: self.title.clone().unwrap_or_else(|| title.to_string()),
            width: self.width.unwrap_or(width),
            height: self.height.unwrap_or(height),
            gl_major: self.gl_major,
            gl_minor: self.gl_minor,
            forward_compat: self.forward_compat,
            vsync: self.vsync,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub log_level: String,
    /// Directory checked for shaders and textures before the embedded copies.
    pub asset_dir: Option<PathBuf>,
    /// Mix factor change per second while Up/Down is held.
    pub mix_rate: f32,
    /// Overrides the sampling options of the textures exercise.
    pub textures: Option<TextureOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: "info".to_string(),
            asset_dir: None,
            mix_rate: 1.0,
            textures: None,
        }
    }
}

impl Config {
    /// Parses and validates a config from JSON text.
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(path, &text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        if self.window.width == Some(0) || self.window.height == Some(0) {
            return Err(ConfigError::WindowSize(
                self.window.width.unwrap_or(DEFAULT_SIZE.0),
                self.window.height.unwrap_or(DEFAULT_SIZE.1),
            ));
        }
        if let Some(textures) = &self.textures {
            textures.validate()?;
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
