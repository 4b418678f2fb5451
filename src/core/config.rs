// src/core/config.rs
pub mod loader;

pub use loader::{discover_root_dir, load_config_file, resolve_root_dir};

use crate::core::header::MatchOptions;
use serde::Deserialize;
use std::path::PathBuf;

/// Boilerplate directory used when neither the CLI nor the config file names one.
pub const DEFAULT_BOILERPLATE_DIR: &str = "hack/boilerplate";

/// Optional per-repository settings, read from the repository root.
pub const CONFIG_FILE_NAME: &str = ".boilerplate.toml";

/// Contents of [`CONFIG_FILE_NAME`]. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Relative paths are resolved against the repository root.
    pub boilerplate_dir: Option<PathBuf>,
    pub force_extension: Option<String>,
    pub any_year: Option<bool>,
}

/// Everything a verification run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root_dir: PathBuf,
    pub boilerplate_dir: PathBuf,
    pub force_extension: Option<String>,
    /// Files to check. Empty means the whole tree under `root_dir`.
    pub filenames: Vec<PathBuf>,
    pub any_year: bool,
}

impl Config {
    /// Defaults for a repository rooted at `root_dir`.
    #[inline]
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        Self {
            boilerplate_dir: root_dir.join(DEFAULT_BOILERPLATE_DIR),
            root_dir,
            force_extension: None,
            filenames: Vec::new(),
            any_year: false,
        }
    }

    /// Applies the values present in a repository config file.
    #[inline]
    #[must_use]
    pub fn with_file_config(mut self, file: FileConfig) -> Self {
        if let Some(dir) = file.boilerplate_dir {
            self.boilerplate_dir = self.root_dir.join(dir);
        }
        if file.force_extension.is_some() {
            self = self.with_force_extension(file.force_extension);
        }
        if let Some(any_year) = file.any_year {
            self.any_year = any_year;
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn with_boilerplate_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.boilerplate_dir = dir.into();
        self
    }

    /// An empty key means "no forced key".
    #[inline]
    #[must_use]
    pub fn with_force_extension(mut self, key: Option<String>) -> Self {
        self.force_extension = key.filter(|k| !k.is_empty());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_filenames(mut self, filenames: Vec<PathBuf>) -> Self {
        self.filenames = filenames;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_any_year(mut self, any_year: bool) -> Self {
        self.any_year = any_year;
        self
    }

    #[inline]
    #[must_use]
    pub fn force_extension(&self) -> Option<&str> {
        self.force_extension.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn match_options(&self) -> MatchOptions {
        MatchOptions {
            any_year: self.any_year,
        }
    }
}
