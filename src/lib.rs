//! linkcheck-config: configuration ingestion for a link checker
//!
//! This crate reads INI-style configuration files and merges validated,
//! typed values into a single [`Configuration`] consumed by the rest of a
//! link-checking application.

pub mod config;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for linkcheck-config operations
#[derive(Debug, Error)]
pub enum LinkCheckError {
    #[error("Error parsing configuration: {0}")]
    Config(#[from] ConfigError),
}

impl LinkCheckError {
    /// Returns the underlying configuration error
    pub fn config_error(&self) -> &ConfigError {
        match self {
            Self::Config(err) => err,
        }
    }
}

/// Coarse classification of configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed multi-line entry
    Syntax,
    /// Value present but not acceptable
    Validation,
    /// Source could not be read or tokenized
    Io,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("File contains parsing errors: {source_name} line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("{0}")]
    Syntax(String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid regular expression `{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

impl ConfigError {
    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Parse { .. } => ErrorKind::Io,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Validation(_) | Self::InvalidRegex { .. } => ErrorKind::Validation,
        }
    }
}

/// Result type alias for linkcheck-config operations
pub type Result<T> = std::result::Result<T, LinkCheckError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{fingerprint, ingest, ingest_store, ingest_str, Configuration};
pub use output::LoggerKind;
pub use url::LinkPattern;
