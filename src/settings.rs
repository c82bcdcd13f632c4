//! Typed view of the final add-on answers.
//! Constructed at the boundary between raw answers and everything that
//! consumes them (derived variables, cleanup, git init); every documented
//! key becomes a named field and the invariants are checked here once.

use crate::context::Configurator;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Layout of the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    /// Two-segment dotted name, directly under its namespace.
    Normal,
    /// Three-segment dotted name, under an extra namespace folder.
    Nested,
}

impl PackageType {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "normal" => Ok(PackageType::Normal),
            "nested" => Ok(PackageType::Nested),
            other => Err(Error::ConfigError(format!(
                "Unknown package type '{}' (expected 'normal' or 'nested')",
                other
            ))),
        }
    }
}

/// Validated answers of the addon template.
#[derive(Debug, Clone)]
pub struct PackageSettings {
    pub package_type: PackageType,
    pub namespace: String,
    /// Second namespace segment; present only for nested packages. The
    /// package-type hook forces the raw answer to a disabled marker for
    /// normal packages, which reads back as `None` here.
    pub namespace2: Option<String>,
    pub name: String,
    pub profile: bool,
    pub setuphandlers: bool,
    pub theme: bool,
    pub locales: bool,
    pub example: bool,
    pub testing: bool,
    pub travis: bool,
    pub git_init: bool,
}

impl PackageSettings {
    /// Builds the typed settings from the raw answers.
    ///
    /// # Errors
    /// * `Error::ConfigError` for missing keys or an unknown package type
    /// * `Error::ValidationError` for identifier-shaped keys that are not
    ///   valid lowercase identifiers
    /// * `Error::ConfigError` when a nested package has no second namespace
    pub fn from_configurator(configurator: &Configurator) -> Result<Self> {
        let package_type = PackageType::parse(&require_str(configurator, "package.type")?)?;
        let namespace = require_identifier(configurator, "package.namespace")?;
        let name = require_identifier(configurator, "package.name")?;

        // Absent values and disabled markers (false) both mean "no second
        // namespace"; only a non-empty string counts.
        let namespace2 = match configurator.get_str("package.namespace2") {
            Some(value) if !value.is_empty() => {
                if !is_valid_identifier(value) {
                    return Err(invalid_identifier(value, "package.namespace2"));
                }
                Some(value.to_string())
            }
            _ => None,
        };

        if package_type == PackageType::Nested && namespace2.is_none() {
            return Err(Error::ConfigError(
                "Nested packages need a non-empty 'package.namespace2'".to_string(),
            ));
        }

        Ok(Self {
            package_type,
            namespace,
            namespace2,
            name,
            profile: configurator.get_bool("package.profile"),
            setuphandlers: configurator.get_bool("package.setuphandlers"),
            theme: configurator.get_bool("package.theme"),
            locales: configurator.get_bool("package.locales"),
            example: configurator.get_bool("package.example"),
            testing: configurator.get_bool("package.testing"),
            travis: configurator.get_bool("travis.integration.enabled"),
            git_init: configurator.get_bool("package.git.init"),
        })
    }

    /// Full dotted package name: two segments for normal packages, three
    /// for nested ones.
    pub fn dotted_name(&self) -> String {
        match (self.package_type, &self.namespace2) {
            (PackageType::Nested, Some(namespace2)) => {
                format!("{}.{}.{}", self.namespace, namespace2, self.name)
            }
            _ => format!("{}.{}", self.namespace, self.name),
        }
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid pattern"))
}

/// Namespace and name segments end up as importable module names, so they
/// are restricted to lowercase identifiers.
pub fn is_valid_identifier(value: &str) -> bool {
    identifier_pattern().is_match(value)
}

pub(crate) fn invalid_identifier(value: &str, key: &str) -> Error {
    Error::ValidationError(format!(
        "'{}' is not a valid value for '{}' (lowercase letters, digits and '_' only)",
        value, key
    ))
}

fn require_str(configurator: &Configurator, key: &str) -> Result<String> {
    configurator
        .get_str(key)
        .map(str::to_string)
        .ok_or_else(|| Error::ConfigError(format!("Missing answer for '{}'", key)))
}

fn require_identifier(configurator: &Configurator, key: &str) -> Result<String> {
    let value = require_str(configurator, key)?;
    if !is_valid_identifier(&value) {
        return Err(invalid_identifier(&value, key));
    }
    Ok(value)
}
