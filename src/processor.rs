//! Template tree processing and run orchestration.
//! Walks a template directory, renders path expressions and `.j2` files into
//! the target directory, and drives a whole generation run from questions to
//! post-render hooks.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config;
use crate::context::Configurator;
use crate::error::{Error, Result};
use crate::hooks;
use crate::ignore;
use crate::parser;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Whether a file name carries the `.j2` rendering suffix on top of its
/// real extension.
pub fn is_template_path(filename: &str) -> bool {
    let parts: Vec<&str> = filename.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&"j2")
}

/// Maps a rendered relative path into the target directory, stripping the
/// `.j2` suffix for files that get rendered rather than copied.
pub fn get_target_path(processed_path: &str, target_dir: &Path) -> (PathBuf, bool) {
    let mut template_path = false;

    let target_path = if let Some(filename) =
        Path::new(processed_path).file_name().and_then(|n| n.to_str())
    {
        if is_template_path(filename) {
            // Has double extension, remove .j2
            let new_name = filename.strip_suffix(".j2").unwrap_or(filename);
            template_path = true;
            target_dir.join(Path::new(processed_path).with_file_name(new_name))
        } else {
            target_dir.join(processed_path)
        }
    } else {
        target_dir.join(processed_path)
    };

    (target_path, template_path)
}

/// Renders a template tree into the target directory.
///
/// Every relative path is itself rendered, so directory names like
/// `src/{{ package.namespace }}` resolve against the answers. Files ending
/// in `.j2` are rendered, everything else is copied verbatim. A path that
/// renders to nothing is skipped.
pub fn process_template(
    template_dir: &Path,
    output_dir: &Path,
    context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
    ignored: GlobSet,
) -> Result<()> {
    debug!("Processing template...");

    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(template_dir)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let relative_path = relative_path
            .to_str()
            .ok_or_else(|| Error::ConfigError("Invalid path".to_string()))?;

        if ignored.is_match(relative_path) {
            debug!("Skipping file {} from {}", relative_path, ignore::IGNORE_FILE);
            continue;
        }

        let processed_path = engine.render_path(relative_path, context)?;

        // A path rendering to nothing means this entry is the template root
        // or was conditionally disabled.
        if processed_path.is_empty() {
            continue;
        }

        let (target_path, is_template_path) = get_target_path(&processed_path, output_dir);

        if path.is_dir() {
            fs::create_dir_all(&target_path).map_err(Error::IoError)?;
        } else if is_template_path {
            debug!("Writing file: {}", target_path.display());
            let content = read_file(path)?;
            let final_content = engine.render(&content, context)?;
            write_file(&target_path, &final_content)?;
        } else {
            // Simply copy the file without processing
            debug!("Copying file: {}", target_path.display());
            copy_file(path, &target_path)?;
        }
    }
    Ok(())
}

/// Runs a whole generation: asks the template's questions, renders the tree
/// and executes the configured hooks around it.
///
/// The target directory is created up front so suggestion hooks can read its
/// name even on a fresh run.
pub fn generate(
    template_root: &Path,
    target_dir: &Path,
    preloaded_answers: serde_json::Value,
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
) -> Result<()> {
    fs::create_dir_all(target_dir).map_err(Error::IoError)?;
    let target_dir = target_dir.canonicalize().map_err(Error::IoError)?;

    let config = config::get_config(template_root)?;

    let mut configurator = Configurator::new(&target_dir);
    parser::get_answers(engine, prompt, &mut configurator, config.questions, preloaded_answers)?;

    for hook in config.pre_render {
        hooks::apply_render_hook(hook, &mut configurator)?;
    }

    let ignored = ignore::parse_ignore_file(template_root.join(ignore::IGNORE_FILE))?;
    process_template(template_root, &target_dir, &configurator.render_context(), engine, ignored)?;

    for hook in config.post_render {
        hooks::apply_render_hook(hook, &mut configurator)?;
    }

    Ok(())
}
