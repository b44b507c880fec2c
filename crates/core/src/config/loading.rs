//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::defaults::*;
use super::Config;

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

/// Make `path` absolute against the current directory without touching the filesystem
fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Error::config(format!(
            "Failed to make config path {} absolute: {e}",
            path.display()
        ))
    })
}

/// `CCFLAGS_*` override source; list keys are split on spaces
pub(super) fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("flags")
        .with_list_parse_key("extra_flags")
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `CCFLAGS_`. For example:
    /// - `CCFLAGS_COMPILATION_DATABASE_FOLDER=build`
    /// - `CCFLAGS_FLAGS="-x c++ -I./include"` (space separated, replaces `flags`)
    /// - `CCFLAGS_EXTRA_FLAGS="-DDEBUG -Wextra"` (space separated)
    ///
    /// A missing file is not an error; defaults apply. Either way the anchor
    /// directory is the parent directory of `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_env(path, environment())
    }

    pub(super) fn from_file_with_env(path: &Path, env: Environment) -> Result<Self> {
        let path = absolute_path(path)?;
        let anchor_dir = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::config(format!("{} has no parent directory", path.display())))?;

        let builder = ConfigLib::builder();
        let builder = set_config_default(builder, "flags", default_static_flags())?;
        let mut builder = set_config_default(builder, "extra_flags", Vec::<String>::new())?;

        // Add the config file if it exists
        if path.exists() {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()));
        } else {
            debug!(
                "No configuration at {}, using built-in flags",
                path.display()
            );
        }

        builder = builder.add_source(env);

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))?;

        Ok(config.with_anchor_dir(anchor_dir))
    }

    /// Creates a config from a TOML string (useful for testing)
    ///
    /// The anchor directory is left empty; set it with [`Config::with_anchor_dir`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults
    /// 2. Config file (`./ccflags.toml` or custom --config path)
    /// 3. Environment variables (CCFLAGS_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };
        Self::from_file(&path)
    }
}
