//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.lorakeys.toml` in the working directory
//! 4. `~/.config/lorakeys/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;
use crate::render::FirmwareStyle;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub firmware: FirmwareConfig,
    pub output: OutputConfig,
}

/// Firmware declaration style.
///
/// Defaults match the Arduino LMIC stack (`u1_t`/`u4_t` typedefs, keys in
/// `PROGMEM`); other stacks override via config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FirmwareConfig {
    /// Tokens preceding a key array name in the firmware block.
    pub array_decl: String,
    /// Tokens preceding the packed device address name.
    pub devaddr_decl: String,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            array_decl: "static const PROGMEM u1_t".to_string(),
            devaddr_decl: "static const u4_t".to_string(),
        }
    }
}

impl FirmwareConfig {
    /// The renderer-facing style for this configuration.
    pub fn style(&self) -> FirmwareStyle {
        FirmwareStyle {
            array_decl: self.array_decl.clone(),
            devaddr_decl: self.devaddr_decl.clone(),
        }
    }
}

/// Output destination configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Plain-text keys file written by `generate --save` and `header`.
    pub keys_file: PathBuf,
    /// Directory the generated build header is written into.
    pub include_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            keys_file: PathBuf::from(crate::constants::KEYS_FILENAME),
            include_dir: PathBuf::from(crate::constants::INCLUDE_DIR),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, local config in `work_dir`, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let default_firmware = FirmwareConfig::default();
        if other.firmware.array_decl != default_firmware.array_decl {
            self.firmware.array_decl = other.firmware.array_decl;
        }
        if other.firmware.devaddr_decl != default_firmware.devaddr_decl {
            self.firmware.devaddr_decl = other.firmware.devaddr_decl;
        }

        let default_output = OutputConfig::default();
        if other.output.keys_file != default_output.keys_file {
            self.output.keys_file = other.output.keys_file;
        }
        if other.output.include_dir != default_output.include_dir {
            self.output.include_dir = other.output.include_dir;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_KEYS_FILE) {
            self.output.keys_file = PathBuf::from(val);
        }
        if let Ok(val) = env.var(crate::constants::ENV_INCLUDE_DIR) {
            self.output.include_dir = PathBuf::from(val);
        }
    }
}
