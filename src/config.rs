//! Tool configuration: user defaults and extra profiles.
//! Supports JSON and YAML formats (cpp-scaffold.json, cpp-scaffold.yml, cpp-scaffold.yaml),
//! looked up in the working directory and then in `$HOME/.config/cpp-scaffold/`.

use crate::constants::{APP_NAME, CONFIG_FILES};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::profiles::{Profile, ProfileStore};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Base options the command line is applied on top of
    pub defaults: Options,
    /// Profiles registered next to the built-in ones
    pub profiles: Vec<Profile>,
}

impl ToolConfig {
    /// Registers the configured profiles in `store`.
    ///
    /// # Errors
    /// * `Error::ProfileError` if a configured profile clashes with a registered one
    pub fn register_profiles(&self, store: &mut ProfileStore) -> Result<()> {
        for profile in &self.profiles {
            let mut profile = profile.clone();
            profile.metadata.builtin = false;
            store.register(profile)?;
        }
        Ok(())
    }
}

/// Directories searched for a configuration file, in lookup order.
pub fn config_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".config").join(APP_NAME));
    }
    dirs
}

/// Returns the first configuration file present in `dirs`.
pub fn find_config<P: AsRef<Path>>(dirs: &[P], config_files: &[&str]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| config_files.iter().map(move |file| dir.as_ref().join(file)))
        .find(|path| path.is_file())
}

/// Parses the configuration content.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<ToolConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_error) => {
            debug!("Configuration is not JSON ({json_error}), trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
        }
    }
}

/// Loads the configuration from the standard locations.
///
/// Returns the default configuration when no file exists.
pub fn get_config() -> Result<ToolConfig> {
    get_config_from(&config_dirs())
}

pub fn get_config_from<P: AsRef<Path>>(dirs: &[P]) -> Result<ToolConfig> {
    match find_config(dirs, &CONFIG_FILES) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            parse_config(&content)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(ToolConfig::default())
        }
    }
}
