//! Runtime configuration.

use std::{env, path::PathBuf};

/// Runtime knobs, read from the environment by [`Config::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Config {
    /// Where settings are loaded from and saved to.
    pub settings_path: PathBuf,
    /// Name of the scene object toggled by the blur setting.
    pub blur_object: String,
    /// Directory the rolling log files are written to.
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(Self::DEFAULT_SETTINGS_PATH),
            blur_object: Self::DEFAULT_BLUR_OBJECT.to_owned(),
            log_directory: PathBuf::from(Self::DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl Config {
    pub const SETTINGS_PATH_VAR: &'static str = "GRAPHIC_OPTIONS_SETTINGS";
    pub const BLUR_OBJECT_VAR: &'static str = "GRAPHIC_OPTIONS_BLUR_OBJECT";
    pub const LOG_DIRECTORY_VAR: &'static str = "GRAPHIC_OPTIONS_LOG_DIR";
    pub const DEFAULT_SETTINGS_PATH: &'static str = "GraphicOptions.GlobalSettings.json";
    pub const DEFAULT_BLUR_OBJECT: &'static str = "BlurPlane";
    pub const DEFAULT_LOG_DIRECTORY: &'static str = "logs";

    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the environment, keeping defaults for unset or empty variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(Self::SETTINGS_PATH_VAR).filter(|path| !path.is_empty()) {
            config.settings_path = path.into();
        }
        if let Some(name) = lookup(Self::BLUR_OBJECT_VAR).filter(|name| !name.is_empty()) {
            config.blur_object = name;
        }
        if let Some(directory) = lookup(Self::LOG_DIRECTORY_VAR).filter(|dir| !dir.is_empty()) {
            config.log_directory = directory.into();
        }
        tracing::debug!("{config:?}");
        config
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    pub fn with_blur_object(mut self, name: impl Into<String>) -> Self {
        self.blur_object = name.into();
        self
    }
}
