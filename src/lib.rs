// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::classify::{classify, file_key};
pub use crate::core::config::{CONFIG_FILE_NAME, Config, DEFAULT_BOILERPLATE_DIR, FileConfig};
pub use crate::core::header::{HeaderMatcher, MatchOptions, has_valid_header};
pub use crate::core::references::{LineMap, ReferenceStore, load_preambles, load_references};
pub use crate::core::selector::{SKIPPED_PATHS, is_skipped, select_files};
pub use crate::core::verifier::verify;
pub use error::Error;
pub use models::{Report, VerificationResult};
