//! Template resolution.
//! A template argument is either a directory path or the name of one of the
//! built-in templates shipped with scone.

use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;

/// Environment variable overriding where the built-in templates live.
pub const TEMPLATES_DIR_VAR: &str = "SCONE_TEMPLATES";

fn builtin_root() -> PathBuf {
    match std::env::var(TEMPLATES_DIR_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"),
    }
}

/// Resolves a template argument to a template directory.
///
/// An existing directory wins; otherwise the argument names a built-in
/// template (`addon`, `behavior`).
///
/// # Errors
/// * `Error::TemplateNotFoundError` if neither resolves
pub fn resolve_template(template: &str) -> Result<PathBuf> {
    let as_path = PathBuf::from(template);
    if as_path.is_dir() {
        debug!("Using template directory {}", as_path.display());
        return Ok(as_path);
    }

    let builtin = builtin_root().join(template);
    if builtin.is_dir() {
        debug!("Using built-in template {}", builtin.display());
        return Ok(builtin);
    }

    Err(Error::TemplateNotFoundError { template: template.to_string() })
}
