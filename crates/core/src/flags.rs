//! Compiler flag lists and per-file compile records

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ordered list of compiler arguments
///
/// Each element is a single argument exactly as it would be passed to the
/// compiler. Order is significant: later flags may override earlier ones, and
/// a path flag given in two-token form (`-I`, `include`) must stay adjacent
/// to its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single argument
    pub fn push(&mut self, flag: impl Into<String>) {
        self.0.push(flag.into());
    }

    /// Append every argument of another flag set, keeping order
    pub fn extend_from(&mut self, other: &FlagSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether the exact argument appears in the set
    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for FlagSet {
    fn from(flags: Vec<String>) -> Self {
        Self(flags)
    }
}

impl From<&[&str]> for FlagSet {
    fn from(flags: &[&str]) -> Self {
        Self(flags.iter().map(|f| f.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FlagSet {
    fn from(flags: [&str; N]) -> Self {
        Self(flags.iter().map(|f| f.to_string()).collect())
    }
}

impl FromIterator<String> for FlagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FlagSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The flags a build system used to compile one file
///
/// `working_directory` is the directory the compiler ran in; any relative
/// path inside `flags` is relative to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRecord {
    /// Absolute path of the compiled file
    pub file: PathBuf,
    /// Compiler arguments, driver and input/output arguments stripped
    pub flags: FlagSet,
    /// Directory the compiler was invoked from
    pub working_directory: PathBuf,
}

impl CompilationRecord {
    pub fn new(
        file: impl Into<PathBuf>,
        flags: impl Into<FlagSet>,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file: file.into(),
            flags: flags.into(),
            working_directory: working_directory.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
