//! Header vs source classification by file extension

use std::path::Path;

/// Extensions recognized as headers (case-sensitive)
pub const HEADER_EXTENSIONS: &[&str] = &["H", "h", "hxx", "hpp", "hh"];

/// Extensions recognized as compilable sources, in probe order
///
/// The order decides which sibling a header borrows flags from when several
/// exist, so it must stay fixed.
pub const SOURCE_EXTENSIONS: &[&str] = &["C", "cpp", "cxx", "cc", "c", "m", "mm"];

/// Kind of file being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Included by translation units, rarely compiled directly
    Header,
    /// Anything that is not a header, including unknown extensions
    Source,
}

impl FileKind {
    /// Classify a path by its extension
    pub fn of(path: &Path) -> Self {
        if is_header(path) {
            Self::Header
        } else {
            Self::Source
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Source => "source",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `path` names a header file
///
/// Pure function of the file name; the filesystem is not consulted. Files
/// without an extension are not headers.
pub fn is_header(path: &Path) -> bool {
    has_extension_in(path, HEADER_EXTENSIONS)
}

/// Whether `path` has one of the recognized compilable source extensions
pub fn is_source(path: &Path) -> bool {
    has_extension_in(path, SOURCE_EXTENSIONS)
}

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
