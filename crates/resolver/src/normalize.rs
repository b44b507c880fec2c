//! Rebasing relative paths inside compiler flags
//!
//! Compile commands are recorded relative to the directory the compiler ran
//! in, while the analysis engine runs from somewhere else. Every path carried
//! by a path-bearing flag is made absolute against the right directory.

use ccflags_core::FlagSet;
use std::path::{Component, Path, PathBuf};

/// Flags whose value is a filesystem path
///
/// The value either follows as its own argument (`-I include`) or is fused
/// onto the flag (`-Iinclude`, `--sysroot=/opt/sdk`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFlag {
    SystemInclude,
    Include,
    QuoteInclude,
    Sysroot,
}

impl PathFlag {
    /// Every recognized path flag, in matching order
    pub const ALL: [PathFlag; 4] = [
        PathFlag::SystemInclude,
        PathFlag::Include,
        PathFlag::QuoteInclude,
        PathFlag::Sysroot,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            PathFlag::SystemInclude => "-isystem",
            PathFlag::Include => "-I",
            PathFlag::QuoteInclude => "-iquote",
            PathFlag::Sysroot => "--sysroot=",
        }
    }
}

/// How a single argument relates to the path flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Exactly a path flag; the path is the next argument
    Separate,
    /// A path flag with the path attached
    Fused(PathFlag, &'a str),
    Other,
}

fn classify(arg: &str) -> Token<'_> {
    for flag in PathFlag::ALL {
        let prefix = flag.prefix();
        if arg == prefix {
            return Token::Separate;
        }
        if let Some(path) = arg.strip_prefix(prefix) {
            return Token::Fused(flag, path);
        }
    }
    Token::Other
}

/// Rebase a single path value onto `working_directory`
///
/// Absolute and empty paths come back unchanged. `.` components are dropped
/// from the joined result, `..` components are kept.
pub fn rebase(path: &str, working_directory: &Path) -> String {
    if path.is_empty() || Path::new(path).has_root() {
        return path.to_string();
    }
    let joined: PathBuf = working_directory
        .join(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    joined.to_string_lossy().into_owned()
}

/// Make every path-bearing flag in `flags` absolute
///
/// With an empty `working_directory` the flags are returned unchanged. The
/// output has the same arguments in the same order: a two-argument pair stays
/// two arguments, a fused argument stays fused. A path flag with nothing after
/// it is passed through as is.
pub fn make_absolute(flags: &FlagSet, working_directory: &Path) -> FlagSet {
    if working_directory.as_os_str().is_empty() {
        return flags.clone();
    }

    let mut out = FlagSet::new();
    let mut path_follows = false;
    for arg in flags {
        if path_follows {
            path_follows = false;
            out.push(rebase(arg, working_directory));
            continue;
        }

        match classify(arg) {
            Token::Separate => {
                path_follows = true;
                out.push(arg.clone());
            }
            Token::Fused(flag, path) => {
                out.push(format!("{}{}", flag.prefix(), rebase(path, working_directory)));
            }
            Token::Other => out.push(arg.clone()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn normalize(flags: &[&str], wd: &str) -> Vec<String> {
        make_absolute(&FlagSet::from(flags), Path::new(wd)).into_vec()
    }

    #[test]
    fn test_separate_include_rebased() {
        assert_eq!(normalize(&["-I", "inc"], "/proj"), vec!["-I", "/proj/inc"]);
    }

    #[test]
    fn test_fused_include_rebased() {
        assert_eq!(normalize(&["-I./audio"], "/repo"), vec!["-I/repo/audio"]);
        assert_eq!(normalize(&["-Ihw/arm"], "/repo"), vec!["-I/repo/hw/arm"]);
    }

    #[test]
    fn test_all_path_flags() {
        assert_eq!(
            normalize(
                &[
                    "-isystem",
                    "sys",
                    "-isystemsys2",
                    "-iquote",
                    "q",
                    "-iquoteq2",
                    "--sysroot=sdk",
                ],
                "/w"
            ),
            vec![
                "-isystem",
                "/w/sys",
                "-isystem/w/sys2",
                "-iquote",
                "/w/q",
                "-iquote/w/q2",
                "--sysroot=/w/sdk",
            ]
        );
    }

    #[test]
    fn test_sysroot_as_separate_argument() {
        assert_eq!(
            normalize(&["--sysroot=", "sdk"], "/w"),
            vec!["--sysroot=", "/w/sdk"]
        );
    }

    #[test]
    fn test_absolute_paths_untouched() {
        assert_eq!(
            normalize(&["-I/usr/include/glib-2.0", "-I", "/usr/include"], "/repo"),
            vec!["-I/usr/include/glib-2.0", "-I", "/usr/include"]
        );
    }

    #[test]
    fn test_other_flags_pass_through() {
        assert_eq!(
            normalize(
                &["-x", "c++", "-std=c++11", "-DVPMU_CONFIG", "-Wall", "-m64", "-include", "cfg.h"],
                "/repo"
            ),
            vec!["-x", "c++", "-std=c++11", "-DVPMU_CONFIG", "-Wall", "-m64", "-include", "cfg.h"]
        );
    }

    #[test]
    fn test_parent_components_kept() {
        assert_eq!(
            normalize(&["-I../shared"], "/repo/build"),
            vec!["-I/repo/build/../shared"]
        );
    }

    #[test]
    fn test_empty_working_directory_is_identity() {
        assert_eq!(normalize(&["-I", "inc", "-Isrc"], ""), vec!["-I", "inc", "-Isrc"]);
    }

    #[test]
    fn test_empty_separate_value_passes_through() {
        assert_eq!(normalize(&["-I", "", "-Wall"], "/w"), vec!["-I", "", "-Wall"]);
    }

    #[test]
    fn test_trailing_path_flag_passes_through() {
        assert_eq!(normalize(&["-Wall", "-isystem"], "/w"), vec!["-Wall", "-isystem"]);
    }

    #[test]
    fn test_value_after_path_flag_not_reinterpreted() {
        // "-I" consumes the next argument even if it looks like a flag
        assert_eq!(normalize(&["-I", "-Ifoo"], "/w"), vec!["-I", "/w/-Ifoo"]);
    }

    #[test]
    fn test_uppercase_i_does_not_match_iquote() {
        assert_eq!(normalize(&["-Iquote"], "/w"), vec!["-I/w/quote"]);
    }

    #[test]
    fn test_rebase() {
        assert_eq!(rebase("a/./b", Path::new("/w")), "/w/a/b");
        assert_eq!(rebase(".", Path::new("/w")), "/w");
        assert_eq!(rebase("/abs", Path::new("/w")), "/abs");
        assert_eq!(rebase("", Path::new("/w")), "");
    }
}
