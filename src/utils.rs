// src/utils.rs
use crate::error::Error;
use crate::models::Report;
use std::fs;
use std::path::Path;

/// Splits text into lines without their `\n` / `\r\n` endings.
#[inline]
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_owned).collect()
}

/// Reads a candidate file. Invalid UTF-8 is replaced rather than rejected,
/// so binary files with a known extension simply fail the header check.
///
/// # Errors
///
/// Returns [`Error::FileSystem`] if the file cannot be read.
#[inline]
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|e| Error::file_system("read file", path, e))?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

pub fn print_report(report: &Report) {
    for line in report.lines() {
        println!("{line}");
    }
}
