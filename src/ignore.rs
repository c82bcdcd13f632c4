//! Ignore pattern handling for scone templates.
//! A template tree can carry a .sconeignore file excluding paths from
//! rendering, similar to .gitignore functionality. The template's own
//! configuration files are always excluded.

use crate::config::CONFIG_FILES;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Name of the per-template ignore file.
pub const IGNORE_FILE: &str = ".sconeignore";

/// Patterns excluded from every template, ignore file or not.
const DEFAULT_PATTERNS: [&str; 2] = [IGNORE_FILE, "**/.DS_Store"];

/// Reads and processes the .sconeignore file to create a set of glob patterns.
///
/// # Arguments
/// * `ignore_path` - Path to the .sconeignore file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - If the .sconeignore file doesn't exist, only the defaults apply
/// - Each non-empty line in the file is treated as a separate glob pattern
/// - Lines starting with `#` are comments
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in CONFIG_FILES.iter().chain(DEFAULT_PATTERNS.iter()) {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnoreError(format!("default ignore pattern failed: {}", e))
        })?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!(".sconeignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".sconeignore does not exist")
    }

    let glob_set = builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".sconeignore loading failed: {}", e)))?;

    Ok(glob_set)
}
