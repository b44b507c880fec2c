//! Flag resolution for a single file
//!
//! [`FlagResolver`] decides between the compilation database and the static
//! flag table, rebases relative paths, and hands back the final flag list.
//! It keeps no state between calls and can be shared across threads.

use crate::adapter::{DatabaseAdapter, DatabaseLookup};
use crate::normalize::make_absolute;
use ccflags_core::{Config, Error, FlagSet, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Where the flags of a resolution came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagSource {
    /// A compilation database entry for `file`
    Database { file: PathBuf },
    /// The static flag table
    Static,
}

/// Flags for one file plus the caching directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub flags: FlagSet,
    /// The caller may memoize `flags` for this exact path for the session
    pub do_cache: bool,
    #[serde(skip)]
    pub source: FlagSource,
}

impl ResolutionResult {
    fn new(flags: FlagSet, source: FlagSource) -> Self {
        Self {
            flags,
            do_cache: true,
            source,
        }
    }
}

/// Why no flags could be produced for a file
///
/// Only happens with a compilation database configured; without one every
/// file gets the static flags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("no compilation database entry for {}", .file.display())]
    NoRecordForFile { file: PathBuf },

    #[error("no source file next to header {} to borrow flags from", .header.display())]
    NoSiblingSource { header: PathBuf },
}

/// Resolves compiler flags for source and header files
#[derive(Debug, Clone)]
pub struct FlagResolver {
    database: DatabaseAdapter,
    static_flags: FlagSet,
    anchor_dir: PathBuf,
}

impl FlagResolver {
    /// Create a resolver
    ///
    /// `anchor_dir` is the directory relative static flags are resolved
    /// against, normally the directory holding the configuration file.
    pub fn new(
        database: DatabaseAdapter,
        static_flags: FlagSet,
        anchor_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            database,
            static_flags,
            anchor_dir: anchor_dir.into(),
        }
    }

    /// Build a resolver from configuration, opening the database if one is set up
    ///
    /// A configuration without an anchor (not loaded from a file) is anchored
    /// at the current directory, as is a relative anchor.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let anchor_dir = absolute_anchor(config.anchor_dir())?;
        let database = DatabaseAdapter::open(config.database_folder().as_deref())?;
        Ok(Self::new(database, config.static_flags(), anchor_dir))
    }

    pub fn database(&self) -> &DatabaseAdapter {
        &self.database
    }

    pub fn static_flags(&self) -> &FlagSet {
        &self.static_flags
    }

    pub fn anchor_dir(&self) -> &Path {
        &self.anchor_dir
    }

    /// Resolve the flags for `file`
    ///
    /// With a database configured, a file the database cannot account for is
    /// [`Unavailable`]; the static flags are only used when no database is
    /// configured at all.
    pub fn resolve(&self, file: &Path) -> std::result::Result<ResolutionResult, Unavailable> {
        match self.database.resolve_for_file(file) {
            DatabaseLookup::NoDatabase => {
                debug!("Using static flags for {}", file.display());
                Ok(ResolutionResult::new(
                    make_absolute(&self.static_flags, &self.anchor_dir),
                    FlagSource::Static,
                ))
            }
            DatabaseLookup::Found { record, via } => {
                debug!(
                    file = %file.display(),
                    entry = %record.file.display(),
                    borrowed = via.is_some(),
                    "Using compilation database flags"
                );
                let flags = make_absolute(&record.flags, &record.working_directory);
                Ok(ResolutionResult::new(
                    flags,
                    FlagSource::Database { file: record.file },
                ))
            }
            DatabaseLookup::NoSiblingSource { header } => {
                debug!("No sibling source for header {}", header.display());
                Err(Unavailable::NoSiblingSource { header })
            }
            DatabaseLookup::NoRecord { queried } => {
                debug!("No compilation database entry for {}", queried.display());
                Err(Unavailable::NoRecordForFile { file: queried })
            }
        }
    }
}

fn absolute_anchor(anchor: &Path) -> Result<PathBuf> {
    if anchor.is_absolute() {
        return Ok(anchor.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| Error::config(format!("Failed to determine current directory: {e}")))?;
    if anchor.as_os_str().is_empty() {
        Ok(cwd)
    } else {
        Ok(cwd.join(anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::JsonCompilationDatabase;
    use ccflags_core::CompilationRecord;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn resolver_with_database(records: Vec<CompilationRecord>) -> FlagResolver {
        let database = Arc::new(JsonCompilationDatabase::from_records(records));
        FlagResolver::new(
            DatabaseAdapter::with_database(database),
            FlagSet::from(["-I./audio"]),
            "/repo",
        )
    }

    #[test]
    fn test_static_flags_without_database() {
        let resolver = FlagResolver::new(
            DatabaseAdapter::absent(),
            FlagSet::from(["-x", "c++", "-I./audio", "-I", "qga"]),
            "/repo",
        );
        let result = resolver.resolve(Path::new("/anything/at/all.txt")).expect("flags");
        assert_eq!(
            result.flags.as_slice(),
            &["-x", "c++", "-I/repo/audio", "-I", "/repo/qga"]
        );
        assert!(result.do_cache);
        assert_eq!(result.source, FlagSource::Static);
    }

    #[test]
    fn test_empty_database_is_unavailable() {
        let resolver = resolver_with_database(vec![]);
        assert_eq!(
            resolver.resolve(Path::new("foo.cpp")),
            Err(Unavailable::NoRecordForFile {
                file: PathBuf::from("foo.cpp")
            })
        );
    }

    #[test]
    fn test_database_flags_rebased_on_record_directory() {
        let resolver = resolver_with_database(vec![CompilationRecord::new(
            "/proj/src/a.cc",
            ["-I", "inc", "-Isrc/gen"],
            "/proj",
        )]);
        let result = resolver.resolve(Path::new("/proj/src/a.cc")).expect("flags");
        assert_eq!(
            result.flags.as_slice(),
            &["-I", "/proj/inc", "-I/proj/src/gen"]
        );
        assert_eq!(
            result.source,
            FlagSource::Database {
                file: PathBuf::from("/proj/src/a.cc")
            }
        );
    }

    #[test]
    fn test_header_without_sibling_is_unavailable() {
        let resolver = FlagResolver::new(
            DatabaseAdapter::with_database(Arc::new(JsonCompilationDatabase::default()))
                .with_file_probe(|_| false),
            FlagSet::new(),
            "/repo",
        );
        let err = resolver.resolve(Path::new("/proj/src/lonely.h")).unwrap_err();
        assert_eq!(
            err,
            Unavailable::NoSiblingSource {
                header: PathBuf::from("/proj/src/lonely.h")
            }
        );
        assert!(err.to_string().contains("lonely.h"));
    }

    #[test]
    fn test_from_config_without_database() {
        let config = Config::from_toml_str(r#"flags = ["-I./audio"]"#)
            .expect("parse")
            .with_anchor_dir("/repo");
        let resolver = FlagResolver::from_config(&config).expect("resolver");
        assert!(!resolver.database().is_configured());
        let result = resolver.resolve(Path::new("/repo/vpmu/vpmu.cc")).expect("flags");
        assert_eq!(result.flags.as_slice(), &["-I/repo/audio"]);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = Config::from_toml_str("flags = []").expect("parse");
        assert!(FlagResolver::from_config(&config).is_err());
    }

    #[test]
    fn test_result_serializes_flags_and_cache_directive() {
        let result = ResolutionResult::new(FlagSet::from(["-Wall"]), FlagSource::Static);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "flags": ["-Wall"], "do_cache": true })
        );
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlagResolver>();
    }

    #[test]
    fn test_from_config_without_anchor_uses_current_dir() {
        let resolver = FlagResolver::from_config(&Config::default()).expect("resolver");
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(resolver.anchor_dir(), cwd.as_path());

        let result = resolver.resolve(Path::new("/repo/x.c")).expect("flags");
        let flags = result.flags.as_slice();
        let audio = format!("-I{}", cwd.join("audio").display());
        assert!(flags.contains(&audio), "missing {audio}");
        for (i, flag) in flags.iter().enumerate() {
            if flag == "-I" {
                assert!(Path::new(&flags[i + 1]).is_absolute(), "{}", flags[i + 1]);
            } else if let Some(path) = flag.strip_prefix("-I") {
                assert!(Path::new(path).is_absolute(), "{flag}");
            }
        }
    }

    #[test]
    fn test_from_config_relative_anchor_joined_to_current_dir() {
        let config = Config::from_toml_str(r#"flags = ["-Iinc"]"#)
            .expect("parse")
            .with_anchor_dir("proj");
        let resolver = FlagResolver::from_config(&config).expect("resolver");
        let anchor = std::env::current_dir().expect("cwd").join("proj");
        assert_eq!(resolver.anchor_dir(), anchor.as_path());
        let result = resolver.resolve(Path::new("/x.c")).expect("flags");
        assert_eq!(
            result.flags.as_slice(),
            &[format!("-I{}", anchor.join("inc").display())]
        );
    }
}
