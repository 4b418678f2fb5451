// src/core/references.rs
use crate::error::Error;
use crate::utils::split_lines;
use glob::{Pattern, glob};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const FILE_PREFIX: &str = "boilerplate";
const REFERENCE_SUFFIX: &str = "txt";
const PREAMBLE_SUFFIX: &str = "preamble";

/// Lines of boilerplate keyed by extension or basename.
pub type LineMap = HashMap<String, Vec<String>>;

/// Loads every `boilerplate.<key>.txt` reference in `dir`.
///
/// # Arguments
///
/// * `dir` - The boilerplate directory to scan
///
/// # Returns
///
/// * `Ok(LineMap)` - The reference lines of each key, without line endings
///
/// # Errors
///
/// This function may return an error if:
/// * The directory is missing or cannot be read
/// * A reference file cannot be read as UTF-8 text
#[inline]
pub fn load_references(dir: &Path) -> Result<LineMap, Error> {
    load_category(dir, REFERENCE_SUFFIX)
}

/// Loads every `boilerplate.<key>.preamble` in `dir`.
///
/// # Errors
///
/// Same conditions as [`load_references`].
#[inline]
pub fn load_preambles(dir: &Path) -> Result<LineMap, Error> {
    load_category(dir, PREAMBLE_SUFFIX)
}

fn load_category(dir: &Path, suffix: &str) -> Result<LineMap, Error> {
    fs::read_dir(dir).map_err(|e| Error::file_system("read boilerplate directory", dir, e))?;

    let pattern = format!(
        "{}/{FILE_PREFIX}.*.{suffix}",
        Pattern::escape(&dir.to_string_lossy())
    );

    let mut lines = LineMap::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::file_system("scan boilerplate directory", path, e.into_error())
        })?;

        let Some(key) = key_from_file_name(&path) else {
            continue;
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::file_system("read boilerplate", &path, e))?;
        debug!(key = %key, path = %path.display(), "Loaded boilerplate .{suffix}");
        lines.insert(key, split_lines(&content));
    }

    Ok(lines)
}

/// `boilerplate.py.txt` -> `py`, `boilerplate.Dockerfile.txt` -> `Dockerfile`.
fn key_from_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    name.split('.')
        .nth(1)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
}

/// References and preambles loaded from one boilerplate directory.
#[derive(Debug, Default, Clone)]
pub struct ReferenceStore {
    references: LineMap,
    preambles: LineMap,
}

impl ReferenceStore {
    /// Loads references and preambles from `dir`.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The directory is missing or cannot be read
    /// * Any boilerplate file cannot be read
    /// * The directory contains no `boilerplate.*.txt` reference at all
    #[inline]
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let references = load_references(dir)?;
        if references.is_empty() {
            return Err(Error::NoReferences {
                dir: dir.to_path_buf(),
            });
        }
        let preambles = load_preambles(dir)?;

        info!(
            references = references.len(),
            preambles = preambles.len(),
            dir = %dir.display(),
            "Loaded boilerplate"
        );
        Ok(Self {
            references,
            preambles,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts(references: LineMap, preambles: LineMap) -> Self {
        Self {
            references,
            preambles,
        }
    }

    #[inline]
    #[must_use]
    pub fn reference(&self, key: &str) -> Option<&[String]> {
        self.references.get(key).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn preamble(&self, key: &str) -> Option<&[String]> {
        self.preambles.get(key).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.references.contains_key(key)
    }

    /// Keys that have a reference, in no particular order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub const fn references(&self) -> &LineMap {
        &self.references
    }

    #[inline]
    #[must_use]
    pub const fn preambles(&self) -> &LineMap {
        &self.preambles
    }
}
