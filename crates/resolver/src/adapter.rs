//! Optional compilation database access
//!
//! Wraps a [`CompileCommandSource`] that may or may not exist. "No database"
//! is decided once, when the adapter is built, and is a normal configuration
//! rather than an error.

use crate::classify::is_header;
use crate::database::{clean_path, CompileCommandSource, JsonCompilationDatabase};
use crate::locator::find_source_for;
use ccflags_core::{CompilationRecord, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Existence check used when probing for a header's sibling source
pub type FileProbe = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Outcome of looking a file up in the compilation database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLookup {
    /// No database is configured; use the static flags
    NoDatabase,
    /// The record to use for the file
    Found {
        record: CompilationRecord,
        /// Sibling source the record was borrowed from, for headers
        via: Option<PathBuf>,
    },
    /// The header has no sibling source on disk
    NoSiblingSource { header: PathBuf },
    /// The database has no entry for `queried`
    NoRecord { queried: PathBuf },
}

/// Access to an optional compilation database
#[derive(Clone)]
pub struct DatabaseAdapter {
    database: Option<Arc<dyn CompileCommandSource>>,
    probe: FileProbe,
}

impl std::fmt::Debug for DatabaseAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseAdapter")
            .field(
                "database",
                &self.database.as_ref().map(|db| format!("{} files", db.len())),
            )
            .finish()
    }
}

impl Default for DatabaseAdapter {
    fn default() -> Self {
        Self::absent()
    }
}

impl DatabaseAdapter {
    /// An adapter with no database behind it
    pub fn absent() -> Self {
        Self {
            database: None,
            probe: Arc::new(Path::exists),
        }
    }

    /// Wrap an already built database
    pub fn with_database(database: Arc<dyn CompileCommandSource>) -> Self {
        Self {
            database: Some(database),
            ..Self::absent()
        }
    }

    /// Open the database in `folder` if that folder exists
    ///
    /// `None` or a missing folder yields an absent database. An existing
    /// folder without a readable `compile_commands.json` is an error.
    pub fn open(folder: Option<&Path>) -> Result<Self> {
        let Some(folder) = folder else {
            debug!("No compilation database configured");
            return Ok(Self::absent());
        };
        if !folder.exists() {
            info!(
                "Compilation database folder {} does not exist, using static flags",
                folder.display()
            );
            return Ok(Self::absent());
        }
        let database = JsonCompilationDatabase::load(folder)?;
        Ok(Self::with_database(Arc::new(database)))
    }

    /// Replace the filesystem existence check used for sibling probing
    pub fn with_file_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.probe = Arc::new(probe);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.database.is_some()
    }

    /// Number of files in the database, if one is configured
    pub fn file_count(&self) -> Option<usize> {
        self.database.as_ref().map(|db| db.len())
    }

    /// Direct lookup; `None` when absent or when the file has no entry
    pub fn lookup(&self, file: &Path) -> Option<CompilationRecord> {
        self.database
            .as_ref()
            .and_then(|db| db.compilation_info(&clean_path(file)))
    }

    /// Find the record to use for `file`
    ///
    /// Headers never use their own entry: the first sibling source on disk is
    /// looked up instead.
    pub fn resolve_for_file(&self, file: &Path) -> DatabaseLookup {
        let Some(database) = self.database.as_ref() else {
            return DatabaseLookup::NoDatabase;
        };

        if !is_header(file) {
            return match database.compilation_info(&clean_path(file)) {
                Some(record) => DatabaseLookup::Found { record, via: None },
                None => DatabaseLookup::NoRecord {
                    queried: file.to_path_buf(),
                },
            };
        }

        let probe = &self.probe;
        let Some(sibling) = find_source_for(file, |candidate| probe(candidate)) else {
            return DatabaseLookup::NoSiblingSource {
                header: file.to_path_buf(),
            };
        };
        debug!(
            "Using {} as translation unit for header {}",
            sibling.display(),
            file.display()
        );

        match database.compilation_info(&clean_path(&sibling)) {
            Some(record) => DatabaseLookup::Found {
                record,
                via: Some(sibling),
            },
            None => DatabaseLookup::NoRecord { queried: sibling },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter_with(records: Vec<CompilationRecord>) -> DatabaseAdapter {
        DatabaseAdapter::with_database(Arc::new(JsonCompilationDatabase::from_records(records)))
    }

    #[test]
    fn test_absent_database() {
        let adapter = DatabaseAdapter::absent();
        assert!(!adapter.is_configured());
        assert_eq!(adapter.file_count(), None);
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.cc")),
            DatabaseLookup::NoDatabase
        );
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.h")),
            DatabaseLookup::NoDatabase
        );
    }

    #[test]
    fn test_source_found_directly() {
        let record = CompilationRecord::new("/p/a.cc", ["-DA"], "/p");
        let adapter = adapter_with(vec![record.clone()]);
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.cc")),
            DatabaseLookup::Found { record, via: None }
        );
    }

    #[test]
    fn test_source_missing() {
        let adapter = adapter_with(vec![]);
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/foo.cpp")),
            DatabaseLookup::NoRecord {
                queried: PathBuf::from("/p/foo.cpp")
            }
        );
    }

    #[test]
    fn test_header_borrows_sibling_record() {
        let record = CompilationRecord::new("/p/a.cc", ["-DA"], "/p");
        let adapter =
            adapter_with(vec![record.clone()]).with_file_probe(|p| p == Path::new("/p/a.cc"));
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.h")),
            DatabaseLookup::Found {
                record,
                via: Some(PathBuf::from("/p/a.cc"))
            }
        );
    }

    #[test]
    fn test_header_ignores_own_entry() {
        let adapter = adapter_with(vec![CompilationRecord::new("/p/a.h", ["-DH"], "/p")])
            .with_file_probe(|_| false);
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.h")),
            DatabaseLookup::NoSiblingSource {
                header: PathBuf::from("/p/a.h")
            }
        );
    }

    #[test]
    fn test_header_sibling_without_record() {
        let adapter = adapter_with(vec![CompilationRecord::new("/p/a.c", ["-DC"], "/p")])
            .with_file_probe(|p| p == Path::new("/p/a.cpp") || p == Path::new("/p/a.c"));
        // `.cpp` is probed first and wins even though only `.c` has a record
        assert_eq!(
            adapter.resolve_for_file(Path::new("/p/a.h")),
            DatabaseLookup::NoRecord {
                queried: PathBuf::from("/p/a.cpp")
            }
        );
    }

    #[test]
    fn test_open_without_folder() {
        let adapter = DatabaseAdapter::open(None).expect("open");
        assert!(!adapter.is_configured());
    }

    #[test]
    fn test_open_missing_folder() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let adapter = DatabaseAdapter::open(Some(&dir.path().join("build"))).expect("open");
        assert!(!adapter.is_configured());
    }

    #[test]
    fn test_open_folder_without_database_fails() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        assert!(DatabaseAdapter::open(Some(dir.path())).is_err());
    }

    #[test]
    fn test_lookup() {
        let adapter = adapter_with(vec![CompilationRecord::new("/p/a.cc", ["-DA"], "/p")]);
        assert!(adapter.lookup(Path::new("/p/./a.cc")).is_some());
        assert!(adapter.lookup(Path::new("/p/b.cc")).is_none());
        assert!(DatabaseAdapter::absent().lookup(Path::new("/p/a.cc")).is_none());
    }
}
