use std::path::PathBuf;
use thiserror::Error;

/// Result type for ccflags operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ccflags operations
///
/// These are startup failures (bad configuration, unreadable database).
/// A file that simply has no flags is not an error at this level; the
/// resolver reports that per file.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Compilation database could not be loaded
    #[error("Compilation database error in {}: {message}", .path.display())]
    Database { path: PathBuf, message: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a compilation database error
    pub fn database(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Database {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_mentions_path() {
        let err = Error::database("/proj/build", "missing compile_commands.json");
        let msg = err.to_string();
        assert!(msg.contains("/proj/build"));
        assert!(msg.contains("missing compile_commands.json"));
    }

    #[test]
    fn test_config_and_input_messages() {
        assert_eq!(
            Error::config("bad key").to_string(),
            "Configuration error: bad key"
        );
        assert_eq!(
            Error::invalid_input("not JSON").to_string(),
            "Invalid input: not JSON"
        );
    }
}
