//! Sibling translation unit lookup for header files
//!
//! Build systems rarely emit compile commands for headers. A header next to a
//! source file with the same stem (`vpmu.hpp` and `vpmu.cc`) is assumed to be
//! compiled with that source's flags.

use crate::classify::SOURCE_EXTENSIONS;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Candidate sibling sources for `header`, in probe order
pub fn source_candidates(header: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    SOURCE_EXTENSIONS
        .iter()
        .map(move |ext| header.with_extension(ext))
}

/// First sibling source of `header` for which `exists` holds
///
/// The predicate is the only contact with the outside world, so the probe
/// order can be exercised without a real filesystem.
pub fn find_source_for<F>(header: &Path, exists: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    source_candidates(header).find(|candidate| {
        let found = exists(candidate);
        trace!(
            candidate = %candidate.display(),
            found,
            "Probing sibling source"
        );
        found
    })
}

/// [`find_source_for`] against the real filesystem
pub fn find_source_on_disk(header: &Path) -> Option<PathBuf> {
    find_source_for(header, Path::exists)
}
