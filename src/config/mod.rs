//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the colour theme and the hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, PageHotkeys};

use crate::error::AppError;
use crate::ui::Theme;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/portfolio-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub hotkeys: PageHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub hotkeys: PageHotkeys,
}

fn default_theme_name() -> String {
    "portfolio".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            hotkeys: PageHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default directory otherwise. A missing file leaves the defaults in
    /// place; nothing is written to disk.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(FILE_NAME);

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.hotkeys = data.hotkeys;
        }

        self.file_path = Some(file_path);
        Ok(())
    }

    /// Resolve the configured theme name.
    ///
    pub fn theme(&self) -> Result<Theme, AppError> {
        Ok(Theme::try_from_name(&self.theme_name)?)
    }

    /// Return the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Serialize the configuration and write it to the disk, creating the
    /// directory if needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-tui-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_new_config_has_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "portfolio");
        assert_eq!(config.hotkeys, hotkeys::default_hotkeys());
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_load_missing_file_keeps_defaults_and_writes_nothing() {
        let dir = scratch_dir("missing");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "portfolio");
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));
        assert!(!dir.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "dracula".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.hotkeys, config.hotkeys);
        assert_eq!(reloaded.theme().unwrap().name, "dracula");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: tokyo-night\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.hotkeys, hotkeys::default_hotkeys());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: [unclosed\n").unwrap();

        let mut config = Config::new();
        let error = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            error,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_without_load_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_unknown_theme_name() {
        let config = Config {
            theme_name: "neon".to_string(),
            ..Config::new()
        };
        assert!(config.theme().is_err());
    }
}
