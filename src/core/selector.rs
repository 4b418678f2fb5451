// src/core/selector.rs
use crate::core::classify::file_key;
use crate::error::Error;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Path fragments that are never checked for boilerplate.
pub const SKIPPED_PATHS: &[&str] = &[
    "Godeps",
    "third_party",
    "_gopath",
    "_output",
    ".git",
    "vendor",
    "__init__.py",
    "node_modules",
    "bazel-out",
    "external",
    "3rdparty",
];

/// Builds the list of files whose boilerplate should be verified.
///
/// # Arguments
///
/// * `root` - The repository root; relative paths are resolved against it
/// * `explicit` - Files to check; when empty the whole tree under `root` is walked
/// * `skip_paths` - Fragments that exclude any path containing them
/// * `known_keys` - Keys that have a reference
/// * `forced` - A forced key; when set, files are kept regardless of their key
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Absolute paths, in walk order or in the order given
///
/// # Errors
///
/// This function may return an error if:
/// * A directory under `root` cannot be read during the walk
pub fn select_files(
    root: &Path,
    explicit: &[PathBuf],
    skip_paths: &[&str],
    known_keys: &HashSet<String>,
    forced: Option<&str>,
) -> Result<Vec<PathBuf>, Error> {
    let initial = if explicit.is_empty() {
        walk_tree(root, skip_paths)?
    } else {
        explicit.to_vec()
    };

    let selected = initial
        .into_iter()
        .map(|path| absolutize(root, path))
        .filter(|path| {
            let skipped = is_skipped(path, skip_paths);
            if skipped {
                debug!(path = %path.display(), "Skipping path");
            }
            !skipped
        })
        .filter(|path| forced.is_some() || known_keys.contains(&file_key(path)))
        .collect();

    Ok(selected)
}

/// Whether any skip fragment occurs anywhere in the full `path` string,
/// including the part above the repository root.
#[inline]
#[must_use]
pub fn is_skipped(path: &Path, skip_paths: &[&str]) -> bool {
    let path_str = path.to_string_lossy();
    skip_paths.iter().any(|fragment| path_str.contains(fragment))
}

fn absolutize(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn walk_tree(root: &Path, skip_paths: &[&str]) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !should_prune(e, skip_paths))
    {
        let entry = entry?;
        if is_regular_file(&entry) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Skipped directories are not descended into. The same paths would be
/// filtered out afterwards anyway.
fn should_prune(entry: &DirEntry, skip_paths: &[&str]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_paths.contains(&name))
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
