//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the generation pipeline
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Generator error type
///
/// Every failure surfaces to the caller with a readable message. Nothing is
/// retried; files written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested table does not exist in the connected database
    #[error("`{table}` table not exist")]
    TableNotFound {
        /// Table that was requested
        table: String,
    },

    /// Invalid user input detected before any side effect
    #[error("Validation error: {0}")]
    Validation(String),

    /// Introspection failed after the table was found
    #[error("Schema error: {0}")]
    Schema(String),

    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database URL scheme is not one of postgres, mysql or sqlite
    #[error("Unsupported database URL `{url}` (expected postgres://, mysql:// or sqlite:)")]
    UnsupportedDatabase {
        /// Offending connection string
        url: String,
    },

    /// A template body could not be found or read
    #[error("Template not found: {name}")]
    TemplateNotFound {
        /// Template name (e.g. `views/index`)
        name: String,
    },

    /// Filesystem error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for GeneratorError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GeneratorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_message() {
        let err = GeneratorError::TableNotFound {
            table: "posts".to_string(),
        };
        assert_eq!(err.to_string(), "`posts` table not exist");
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = GeneratorError::io(
            "app/Models/Post.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("app/Models/Post.php"));
        assert!(message.contains("denied"));
    }
}
