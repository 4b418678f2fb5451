// src/core/verifier.rs
use crate::core::classify::classify;
use crate::core::config::Config;
use crate::core::header::HeaderMatcher;
use crate::core::references::ReferenceStore;
use crate::core::selector::{SKIPPED_PATHS, select_files};
use crate::error::Error;
use crate::models::{Report, VerificationResult};
use crate::utils::read_source;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Verifies the boilerplate of every candidate file described by `config`.
///
/// Header mismatches are collected in the returned [`Report`]; they never
/// abort the run.
///
/// # Arguments
///
/// * `config` - The resolved run configuration
///
/// # Returns
///
/// * `Ok(Report)` - One result per candidate file, in selection order
///
/// # Errors
///
/// This function may return an error if:
/// * The boilerplate directory is missing, unreadable or empty
/// * The forced key has no reference
/// * The repository tree cannot be walked
/// * A candidate file cannot be read
#[inline]
pub fn verify(config: &Config) -> Result<Report, Error> {
    let store = ReferenceStore::load(&config.boilerplate_dir)?;

    let forced = config.force_extension();
    if let Some(key) = forced {
        if !store.contains(key) {
            return Err(Error::UnknownKey {
                key: key.to_owned(),
            });
        }
        warn!(key, "Checking every selected file against a forced key");
    }

    let matcher = HeaderMatcher::new(&store, config.match_options())?;
    let known_keys: HashSet<String> = store.keys().map(str::to_owned).collect();

    let files = select_files(
        &config.root_dir,
        &config.filenames,
        SKIPPED_PATHS,
        &known_keys,
        forced,
    )?;
    info!(files = files.len(), "Selected files for verification");

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let contents = read_source(&path)?;
        let key = classify(&path, forced);
        let passed = matcher.matches(&contents, &key)?;
        debug!(path = %path.display(), key = %key, passed, "Verified header");

        results.push(VerificationResult { path, key, passed });
    }

    Ok(Report::new(config.root_dir.clone(), results))
}
