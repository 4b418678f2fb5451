// src/core/config/loader.rs
use crate::core::config::{CONFIG_FILE_NAME, FileConfig};
use crate::error::Error;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Loads `.boilerplate.toml` from the repository root, if there is one.
///
/// # Arguments
///
/// * `root` - The repository root
///
/// # Returns
///
/// * `Ok(FileConfig)` - The parsed file, or an empty config when the file is absent
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config_file(root: &Path) -> Result<FileConfig, Error> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::file_system("read config file", &path, e))?;
    let config = toml::from_str(&content).map_err(|source| Error::InvalidConfig {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Asks git for the top level of the repository containing the current directory.
///
/// # Errors
///
/// This function may return an error if:
/// * git is not installed or cannot be started
/// * The current directory is not inside a git repository
#[inline]
pub fn discover_root_dir() -> Result<PathBuf, Error> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|source| Error::GitUnavailable { source })?;

    if !output.status.success() {
        return Err(Error::Configuration {
            message: String::from(
                "No root specified and directory does not seem to be a git repository",
            ),
        });
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if root.is_empty() {
        return Err(Error::Configuration {
            message: String::from("git did not report a repository root"),
        });
    }

    debug!(root = %root, "Discovered repository root");
    Ok(PathBuf::from(root))
}

/// Uses `rootdir` when given, made absolute, and otherwise asks git.
///
/// # Errors
///
/// See [`discover_root_dir`]. Also fails if the current directory is unavailable.
#[inline]
pub fn resolve_root_dir(rootdir: Option<&Path>) -> Result<PathBuf, Error> {
    match rootdir {
        Some(dir) if dir.is_absolute() => Ok(dir.to_path_buf()),
        Some(dir) => {
            let cwd = env::current_dir()
                .map_err(|e| Error::file_system("read current directory", ".", e))?;
            Ok(cwd.join(dir))
        }
        None => discover_root_dir(),
    }
}
