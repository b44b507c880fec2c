//! Per-file results and their printed forms

use ccflags_core::{Config, FlagSet};
use ccflags_resolver::{FileKind, FlagResolver, FlagSource, Unavailable};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How resolved flags are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per file
    #[default]
    Json,
    /// One flag per line (single file only)
    Lines,
}

/// Resolution outcome for one requested file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub kind: &'static str,
    /// `None` when no flags could be determined
    pub flags: Option<FlagSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FlagSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileReport {
    /// Resolve `file` and capture the outcome
    pub fn resolve(resolver: &FlagResolver, file: &Path) -> Self {
        let kind = FileKind::of(file).as_str();
        match resolver.resolve(file) {
            Ok(result) => Self {
                file: file.to_path_buf(),
                kind,
                flags: Some(result.flags),
                do_cache: Some(result.do_cache),
                source: Some(result.source),
                reason: None,
            },
            Err(reason) => Self::unavailable(file, kind, &reason),
        }
    }

    fn unavailable(file: &Path, kind: &'static str, reason: &Unavailable) -> Self {
        Self {
            file: file.to_path_buf(),
            kind,
            flags: None,
            do_cache: None,
            source: None,
            reason: Some(reason.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.flags.is_some()
    }

    /// Write the report in the requested format
    pub fn write_to(&self, out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Lines => {
                for flag in self.flags.iter().flatten() {
                    writeln!(out, "{flag}")?;
                }
            }
        }
        Ok(())
    }
}

/// Effective configuration as shown by `ccflags config`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub anchor_dir: PathBuf,
    pub compilation_database_folder: Option<PathBuf>,
    pub database: DatabaseStatus,
    pub static_flag_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DatabaseStatus {
    NotConfigured,
    Missing,
    Loaded { files: usize },
}

impl ConfigSummary {
    pub fn new(config: &Config, resolver: &FlagResolver) -> Self {
        let folder = config.database_folder();
        let database = match (&folder, resolver.database().file_count()) {
            (_, Some(files)) => DatabaseStatus::Loaded { files },
            (Some(_), None) => DatabaseStatus::Missing,
            (None, None) => DatabaseStatus::NotConfigured,
        };
        Self {
            anchor_dir: config.anchor_dir().to_path_buf(),
            compilation_database_folder: folder,
            database,
            static_flag_count: resolver.static_flags().len(),
        }
    }
}
