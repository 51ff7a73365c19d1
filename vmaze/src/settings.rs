use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cvmaze::MazeConfig;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Cannot serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("No directory to keep settings in")]
    NoConfigDir,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    show_visited: Option<bool>,
    #[serde(default)]
    show_stats: Option<bool>,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::preference_dir()
            .map(|dir| dir.join("vmaze").join("settings.ron"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn set_show_visited(mut self, value: bool) -> Self {
        self.show_visited = Some(value);
        self
    }

    pub fn get_show_visited(&self) -> bool {
        self.show_visited.unwrap_or(true)
    }

    pub fn set_show_stats(mut self, value: bool) -> Self {
        self.show_stats = Some(value);
        self
    }

    pub fn get_show_stats(&self) -> bool {
        self.show_stats.unwrap_or(true)
    }

    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_ron(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites `path` with the default settings.
    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_ron()?)?;
        Ok(())
    }
}
