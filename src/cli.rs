// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{Config, load_config_file, resolve_root_dir};
use crate::core::verifier::verify;
use crate::models::Report;

/// Verifies that source files start with the required license boilerplate.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to check; every file in the repository is checked when omitted
    pub filenames: Vec<PathBuf>,

    /// Check every file against this key's boilerplate (e.g. "sh" for
    /// extensionless scripts)
    #[arg(short = 'f', long)]
    pub force_extension: Option<String>,

    /// Root directory of the repository (defaults to the git top level)
    #[arg(short = 'r', long)]
    pub rootdir: Option<PathBuf>,

    /// Directory with the boilerplate files (defaults to <rootdir>/hack/boilerplate)
    #[arg(short = 'b', long)]
    pub boilerplate_dir: Option<PathBuf>,

    /// Accept any 20xx copyright year instead of the one in the boilerplate
    #[arg(long)]
    pub any_year: bool,

    /// Log each checked file to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the run configuration: flags win over `.boilerplate.toml`,
    /// which wins over the defaults.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * No root is given and git cannot report one
    /// * The repository config file is unreadable or invalid
    pub fn into_config(self) -> Result<Config> {
        let root_dir = resolve_root_dir(self.rootdir.as_deref())
            .context("Failed to determine the repository root")?;
        let file_config = load_config_file(&root_dir)
            .with_context(|| format!("Failed to load config in: {}", root_dir.display()))?;

        let mut config = Config::new(root_dir)
            .with_file_config(file_config)
            .with_filenames(self.filenames);
        if let Some(dir) = self.boilerplate_dir {
            config = config.with_boilerplate_dir(dir);
        }
        // An empty key on the command line leaves the config file's key in place.
        if let Some(key) = self.force_extension.filter(|key| !key.is_empty()) {
            config = config.with_force_extension(Some(key));
        }
        if self.any_year {
            config = config.with_any_year(true);
        }
        Ok(config)
    }
}

/// Runs a verification and returns its report without printing it.
///
/// # Errors
///
/// Returns an error if the run cannot be configured or aborts; see
/// [`verify`] for the conditions.
pub fn run(args: Args) -> Result<Report> {
    let config = args.into_config()?;
    verify(&config).with_context(|| {
        format!(
            "Failed to verify boilerplate in: {}",
            config.root_dir.display()
        )
    })
}
