// src/models/verification_result.rs
use std::path::PathBuf;

/// Outcome of checking one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub path: PathBuf,
    /// The key the file was matched under.
    pub key: String,
    pub passed: bool,
}
