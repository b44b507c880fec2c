//! Library interface for the ccflags CLI
//!
//! This module exposes the report types for integration testing while keeping
//! the main binary logic in main.rs.

pub mod report;

pub use report::{ConfigSummary, DatabaseStatus, FileReport, OutputFormat};

use ccflags_resolver::{is_header, is_source, FlagResolver};
use std::path::PathBuf;
use tracing::warn;

/// Resolve every file independently
///
/// Relative paths are made absolute against the current directory first. A
/// file that cannot be resolved yields an unavailable report and does not
/// affect the others. Files with an unrecognized extension are resolved as
/// sources, with a warning.
pub fn resolve_files(resolver: &FlagResolver, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .iter()
        .map(|file| {
            let file = std::path::absolute(file).unwrap_or_else(|_| file.clone());
            if !is_header(&file) && !is_source(&file) {
                warn!(
                    "{} is not a recognized C-family source or header, treating it as a source",
                    file.display()
                );
            }
            FileReport::resolve(resolver, &file)
        })
        .collect()
}
