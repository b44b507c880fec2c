//! JSON compilation database reader
//!
//! Reads `compile_commands.json` as written by CMake, Meson, Bear and friends:
//! an array of entries with `directory`, `file` and either `arguments` or a
//! shell-quoted `command`. Entries are indexed by the absolute path of the
//! compiled file.

use ccflags_core::{CompilationRecord, Error, FlagSet, Result};
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the database inside the configured folder
pub const COMPILE_COMMANDS_FILE: &str = "compile_commands.json";

/// A store of per-file compile commands
///
/// Implementations are queried concurrently and must not change once built.
pub trait CompileCommandSource: Send + Sync {
    /// Compile record for an absolute file path, if the store has one
    fn compilation_info(&self, file: &Path) -> Option<CompilationRecord>;

    /// Number of files the store knows about
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of `compile_commands.json`
#[derive(Debug, Deserialize)]
struct CompileCommandEntry {
    directory: PathBuf,
    file: PathBuf,
    #[serde(default)]
    arguments: Option<Vec<String>>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    output: Option<String>,
}

/// In-memory compilation database loaded from `compile_commands.json`
#[derive(Debug, Clone, Default)]
pub struct JsonCompilationDatabase {
    records: HashMap<PathBuf, CompilationRecord>,
}

impl JsonCompilationDatabase {
    /// Load `compile_commands.json` from `folder`
    pub fn load(folder: &Path) -> Result<Self> {
        let path = folder.join(COMPILE_COMMANDS_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::database(&path, format!("Failed to read: {e}")))?;
        let database = Self::from_json_str(&content, folder)
            .map_err(|e| Error::database(&path, e.to_string()))?;
        info!(
            "Loaded compilation database with {} files from {}",
            database.len(),
            path.display()
        );
        Ok(database)
    }

    /// Parse a database from JSON text
    ///
    /// `folder` anchors entries whose `directory` is relative. Entries that
    /// carry no usable command line are skipped with a warning.
    pub fn from_json_str(json: &str, folder: &Path) -> Result<Self> {
        let entries: Vec<CompileCommandEntry> = serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("Malformed compilation database: {e}")))?;

        Ok(Self::from_records(
            entries
                .into_iter()
                .filter_map(|entry| record_from_entry(entry, folder)),
        ))
    }

    /// Build a database from ready-made records
    ///
    /// When several records name the same file the first one wins.
    pub fn from_records(records: impl IntoIterator<Item = CompilationRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            match map.entry(clean_path(&record.file)) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(slot) => {
                    debug!(
                        "Ignoring duplicate compile command for {}",
                        slot.key().display()
                    );
                }
            }
        }
        Self { records: map }
    }

    pub fn get(&self, file: &Path) -> Option<&CompilationRecord> {
        self.records.get(&clean_path(file))
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.records.keys().map(PathBuf::as_path)
    }
}

impl CompileCommandSource for JsonCompilationDatabase {
    fn compilation_info(&self, file: &Path) -> Option<CompilationRecord> {
        self.get(file).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

fn record_from_entry(entry: CompileCommandEntry, folder: &Path) -> Option<CompilationRecord> {
    let directory = if entry.directory.is_absolute() {
        entry.directory
    } else {
        folder.join(&entry.directory)
    };
    let file = clean_path(&directory.join(&entry.file));

    let arguments = match (entry.arguments, entry.command) {
        (Some(arguments), _) => arguments,
        (None, Some(command)) => match shlex::split(&command) {
            Some(arguments) => arguments,
            None => {
                warn!(
                    "Skipping {}: command line has unbalanced quoting",
                    file.display()
                );
                return None;
            }
        },
        (None, None) => {
            warn!("Skipping {}: entry has no arguments or command", file.display());
            return None;
        }
    };

    let flags = compile_flags(&arguments, &file, &directory, entry.output.as_deref());
    Some(CompilationRecord::new(file, flags, clean_path(&directory)))
}

/// Strip a compiler command line down to the flags that affect parsing
///
/// Drops the compiler driver, `-c`, the output argument and the input file.
fn compile_flags(
    arguments: &[String],
    file: &Path,
    directory: &Path,
    output: Option<&str>,
) -> FlagSet {
    let mut flags = FlagSet::new();
    let mut args = arguments.iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "-c" {
            continue;
        }
        if arg == "-o" {
            args.next();
            continue;
        }
        if arg.strip_prefix("-o").is_some_and(|fused| Some(fused) == output) {
            continue;
        }
        if !arg.starts_with('-') && clean_path(&directory.join(arg)) == file {
            continue;
        }
        flags.push(arg.clone());
    }
    flags
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }
    cleaned
}
