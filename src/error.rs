// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading boilerplate, selecting files or verifying headers.
///
/// Header mismatches are not errors: they are recorded in a
/// [`Report`](crate::models::Report). Every variant here aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The run cannot be configured, e.g. the repository root is unknown.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// `git` could not be launched to discover the repository root.
    #[error("No root specified and git could not be run to discover one")]
    GitUnavailable {
        #[source]
        source: io::Error,
    },

    /// A boilerplate file or candidate file could not be read.
    #[error("Failed to {operation}: {}", .path.display())]
    FileSystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The boilerplate directory exists but holds no `boilerplate.*.txt` files.
    #[error("Unable to find any boilerplate references in {}", .dir.display())]
    NoReferences { dir: PathBuf },

    /// A file was classified under a key that has no reference.
    #[error("No boilerplate reference for key '{key}'")]
    UnknownKey { key: String },

    /// The repository config file is not valid TOML or has unknown keys.
    #[error("Invalid config file: {}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn file_system(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::FileSystem {
            operation,
            path: path.into(),
            source,
        }
    }
}
