//! Core types for the ccflags compilation-flag resolver
//!
//! This crate provides the foundational pieces shared by the resolver and the
//! command-line front end:
//!
//! - **Flags**: ordered compiler argument lists and per-file compile records
//! - **Configuration**: the static flag table and database location
//! - **Error handling**: unified startup error types
//!

pub mod config;
pub mod error;
pub mod flags;

// Re-export main types for convenience
pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use flags::{CompilationRecord, FlagSet};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::flags::{CompilationRecord, FlagSet};
}
