//! Configuration module for the ccflags resolver
//!
//! This module provides the configuration structure and loading mechanisms for
//! the resolver. Configuration can be loaded from a TOML file and/or environment
//! variables. The directory holding the configuration file is the resolver's
//! anchor: relative paths in the static flag table and a relative compilation
//! database folder are resolved against it.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use crate::flags::FlagSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use defaults::CONFIG_FILE_NAME;

use defaults::*;

/// Main configuration structure for the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder containing `compile_commands.json`
    ///
    /// Unset or empty means no compilation database; the static flags are used
    /// for every file. A relative folder is resolved against the anchor.
    #[serde(default)]
    pub compilation_database_folder: Option<String>,

    /// Static flag set used when no compilation database is configured
    #[serde(default = "default_static_flags")]
    pub flags: Vec<String>,

    /// Flags appended after `flags`
    #[serde(default)]
    pub extra_flags: Vec<String>,

    /// Directory containing the configuration file
    #[serde(skip)]
    anchor_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compilation_database_folder: None,
            flags: default_static_flags(),
            extra_flags: Vec::new(),
            anchor_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Directory the configuration was loaded from
    ///
    /// Empty when the configuration was not loaded from a file; the resolver
    /// then anchors at the current directory.
    pub fn anchor_dir(&self) -> &Path {
        &self.anchor_dir
    }

    /// Set the anchor directory
    pub fn with_anchor_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.anchor_dir = dir.into();
        self
    }

    /// Resolved compilation database folder, if one is configured
    ///
    /// This does not check whether the folder exists.
    pub fn database_folder(&self) -> Option<PathBuf> {
        let folder = self
            .compilation_database_folder
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())?;
        let folder = Path::new(folder);
        if folder.is_absolute() {
            Some(folder.to_path_buf())
        } else {
            Some(self.anchor_dir.join(folder))
        }
    }

    /// The full static flag set: `flags` followed by `extra_flags`
    pub fn static_flags(&self) -> FlagSet {
        self.flags
            .iter()
            .chain(self.extra_flags.iter())
            .cloned()
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.flags.is_empty() && self.extra_flags.is_empty() {
            return Err(Error::config(
                "Static flag set is empty; set `flags` or remove it to use the defaults"
                    .to_string(),
            ));
        }

        if let Some(empty) = self
            .flags
            .iter()
            .chain(self.extra_flags.iter())
            .position(|f| f.is_empty())
        {
            return Err(Error::config(format!(
                "Static flag at position {empty} is an empty string"
            )));
        }

        Ok(())
    }
}
