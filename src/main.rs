// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use verify_boilerplate::cli::{Args, run};
use verify_boilerplate::logging::init_logging;
use verify_boilerplate::utils::print_report;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = run(args)?;
    print_report(&report);

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
