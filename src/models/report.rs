// src/models/report.rs
use crate::models::VerificationResult;
use std::path::{Path, PathBuf};

pub const SUCCESS_MESSAGE: &str = "All files examined have correct boilerplate.";
pub const FAILURE_PREFIX: &str = "FAIL: Boilerplate header is wrong for:";

/// Results of one verification run.
#[derive(Debug, Default)]
pub struct Report {
    pub root: PathBuf,
    pub results: Vec<VerificationResult>,
}

impl Report {
    #[inline]
    #[must_use]
    pub const fn new(root: PathBuf, results: Vec<VerificationResult>) -> Self {
        Self { root, results }
    }

    #[inline]
    #[must_use]
    pub fn checked(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Non-conforming files relative to the root, sorted.
    #[inline]
    #[must_use]
    pub fn nonconforming(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| relative_to(&self.root, &r.path))
            .collect();
        paths.sort();
        paths
    }

    /// The lines printed for this report: one per failing file, or a
    /// single success line.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.is_success() {
            return vec![SUCCESS_MESSAGE.to_owned()];
        }
        self.nonconforming()
            .iter()
            .map(|path| format!("{FAILURE_PREFIX} {}", path.display()))
            .collect()
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
