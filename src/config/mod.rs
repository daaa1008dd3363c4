//! Configuration management module.
//!
//! This module handles loading and saving application configuration: the
//! display name used by the list-screen greeting and the theme selection.
//! Home records are deliberately never persisted; losing them on process
//! restart is part of the application contract.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/homescout";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub display_name: String,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_display_name() -> String {
    "there".to_string()
}

fn default_theme_name() -> String {
    "dawn".to_string()
}

impl Config {
    /// Return a new instance with defaults.
    ///
    pub fn new() -> Config {
        Config {
            display_name: default_display_name(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is not an error; defaults apply and
    /// the file is created on the next save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.display_name = data.display_name;
            self.theme_name = data.theme_name;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            display_name: self.display_name.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the default configuration directory path.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(home_dir.join(Path::new(DEFAULT_DIRECTORY_PATH)))
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_has_defaults() {
        let config = Config::new();
        assert_eq!(config.display_name, "there");
        assert_eq!(config.theme_name, "dawn");
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }

    #[test]
    fn test_file_spec_defaults_apply() {
        let data: FileSpec = serde_yaml::from_str("{}").unwrap();
        assert_eq!(data.display_name, "there");
        assert_eq!(data.theme_name, "dawn");
    }

    #[test]
    fn test_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("homescout-test-{}", std::process::id()));
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.display_name = "Shuri".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.display_name, "Shuri");

        let _ = fs::remove_dir_all(dir);
    }
}
