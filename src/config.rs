//! Configuration handling for scone templates.
//! Each built-in template ships a config file describing its questions, the
//! hooks wired to them, and the whole-run hooks executed around rendering.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["scone.json", "scone.yml", "scone.yaml"];

/// Kind of value a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Str,
    Bool,
}

/// Pre-question hooks. Each derives a suggested default from the target
/// directory name and mutates only the question's `default` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestHook {
    PackageType,
    Namespace,
    Namespace2,
    Name,
}

/// Post-question hooks. Each normalizes the raw answer and may force
/// downstream answers into the configurator so their questions are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerHook {
    ToBoolean,
    PackageType,
    PackageName,
    Profile,
    Testing,
    Travis,
    SubtemplateWarning,
}

/// Whole-run hooks executed before or after the template tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderHook {
    PrepareAddon,
    PrepareBehavior,
    CleanupAddon,
    GitInit,
}

/// A single prompt definition from the template configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// Prompt text shown to the user; may itself contain template syntax.
    #[serde(default)]
    pub help: String,

    /// Kind of value this question collects.
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// Default answer, offered by the prompt and taken verbatim in
    /// non-interactive runs. Suggestion hooks overwrite this field.
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// For string questions: restrict the answer to one of these values.
    #[serde(default)]
    pub choices: Vec<String>,

    /// Suggestion hook run before the question is presented.
    #[serde(default)]
    pub suggest: Option<SuggestHook>,

    /// Post-answer hook run on every accepted answer, including preloaded
    /// and forced ones.
    #[serde(default)]
    pub post: Option<AnswerHook>,
}

/// Parsed template configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Questions in the order they are asked.
    pub questions: IndexMap<String, Question>,

    /// Hooks run after all answers are final, before rendering.
    #[serde(default)]
    pub pre_render: Vec<RenderHook>,

    /// Hooks run after the template tree has been rendered.
    #[serde(default)]
    pub post_render: Vec<RenderHook>,
}

/// Loads configuration from a template directory, trying multiple file names.
/// Supports: scone.json, scone.yml, scone.yaml
///
/// # Arguments
/// * `template_dir` - Directory containing the template configuration
/// * `config_files` - List of configuration files to try
///
/// # Returns
/// * `Result<String>` - Contents of the first found configuration file
///
/// # Errors
/// * `Error::ConfigError` if no valid config file exists
pub fn load_config<P: AsRef<Path>>(template_dir: P, config_files: &[&str]) -> Result<String> {
    for file in config_files {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(std::fs::read_to_string(&config_path).map_err(Error::IoError)?);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        config_files.join(", ")
    )))
}

/// Parses the configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither parse succeeds
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads and parses the configuration of a template directory.
pub fn get_config<P: AsRef<Path>>(template_root: P) -> Result<Config> {
    let content = load_config(template_root, &CONFIG_FILES)?;
    parse_config(&content)
}
