// src/core/classify.rs
use std::path::Path;

/// Returns the key a file is matched under: its lowercased extension, or its
/// full basename when it has none (`Dockerfile`, `Makefile`, `.bashrc`).
#[inline]
#[must_use]
pub fn file_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_lowercase(),
        _ => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Like [`file_key`], except that a forced key wins for every file.
#[inline]
#[must_use]
pub fn classify(path: &Path, forced: Option<&str>) -> String {
    forced.map_or_else(|| file_key(path), str::to_owned)
}
