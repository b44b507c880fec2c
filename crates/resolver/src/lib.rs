#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

//! Compilation flag resolution for C-family source and header files
//!
//! Given a file in a native project, this crate produces the compiler flags a
//! semantic analysis engine needs to parse it:
//! - Per-file flags from a `compile_commands.json` database when configured
//! - Header files borrow the flags of a sibling source file
//! - A static flag table when no database is configured
//! - Relative include paths rebased onto the right directory
//!
//! # Example
//!
//! ```no_run
//! use ccflags_core::Config;
//! use ccflags_resolver::FlagResolver;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(None)?;
//! let resolver = FlagResolver::from_config(&config)?;
//!
//! match resolver.resolve(Path::new("/repo/vpmu/vpmu.hpp")) {
//!     Ok(result) => println!("{:?}", result.flags),
//!     Err(reason) => eprintln!("no flags: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```

mod adapter;
mod classify;
mod database;
mod locator;
mod normalize;
mod resolver;

pub use adapter::{DatabaseAdapter, DatabaseLookup, FileProbe};
pub use classify::{is_header, is_source, FileKind, HEADER_EXTENSIONS, SOURCE_EXTENSIONS};
pub use database::{CompileCommandSource, JsonCompilationDatabase, COMPILE_COMMANDS_FILE};
pub use locator::{find_source_for, find_source_on_disk, source_candidates};
pub use normalize::{make_absolute, rebase, PathFlag};
pub use resolver::{FlagResolver, FlagSource, ResolutionResult, Unavailable};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::DatabaseAdapter;
    pub use crate::resolver::{FlagResolver, ResolutionResult, Unavailable};
}
