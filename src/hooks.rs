//! Hook functions wired to the template questions.
//! Answer normalization, defaults suggested from the target directory,
//! cascading skips for disabled features, the package-name validator and
//! the dispatchers the question pipeline calls into.

use crate::cleanup;
use crate::config::{AnswerHook, Question, RenderHook, SuggestHook};
use crate::context::Configurator;
use crate::error::{Error, Result};
use crate::git;
use crate::prompt::Prompter;
use crate::settings;
use crate::variables;

/// Notification destination used when travis integration is turned off but
/// the rendered config still needs a valid value.
pub const TRAVIS_PLACEHOLDER_DESTINATION: &str = "noreply@example.org";

/// Outcome of a post-answer hook.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The (possibly rewritten) answer to store.
    Accepted(serde_json::Value),
    /// The user declined to continue; the caller aborts the run.
    Rejected,
}

/// Converts a free-text yes/no answer into a boolean. Booleans pass through
/// unchanged.
///
/// # Errors
/// * `Error::ValidationError` for anything outside y/yes/true/1 and
///   n/no/false/0 (case-insensitive)
pub fn to_boolean(answer: &serde_json::Value) -> Result<bool> {
    if let Some(value) = answer.as_bool() {
        return Ok(value);
    }
    match answer.as_str().unwrap_or_default().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(Error::ValidationError("Value must be a boolean (y/n)".to_string())),
    }
}

/// Suggests the package type from the name of the target directory:
/// exactly three dot-separated parts suggest a nested package.
pub fn suggest_package_type(configurator: &Configurator, question: &mut Question) {
    let package_type =
        if configurator.dir_name().split('.').count() == 3 { "nested" } else { "normal" };
    question.default = Some(serde_json::Value::String(package_type.to_string()));
}

/// Suggests the namespace from the first dot-separated part of the target
/// directory name.
pub fn suggest_namespace(configurator: &Configurator, question: &mut Question) {
    let namespace = configurator.dir_name().split('.').next().unwrap_or_default();
    question.default = Some(serde_json::Value::String(namespace.to_string()));
}

/// Suggests the second namespace from the target directory name. A name
/// without a second dot-separated segment cannot produce a suggestion and
/// is rejected with a clear error.
pub fn suggest_namespace2(configurator: &Configurator, question: &mut Question) -> Result<()> {
    let dir_name = configurator.dir_name();
    let namespace2 = dir_name.split('.').nth(1).ok_or_else(|| {
        Error::ConfigError(format!(
            "Directory name '{}' has no second namespace segment \
             (nested packages expect 'namespace.namespace2.name')",
            dir_name
        ))
    })?;
    question.default = Some(serde_json::Value::String(namespace2.to_string()));
    Ok(())
}

/// Suggests the short package name from the last dot-separated part of the
/// target directory name.
pub fn suggest_name(configurator: &Configurator, question: &mut Question) {
    let name = configurator.dir_name().split('.').last().unwrap_or_default();
    question.default = Some(serde_json::Value::String(name.to_string()));
}

/// Runs the suggestion hook for a question before it is presented.
pub fn apply_suggest(
    hook: SuggestHook,
    configurator: &Configurator,
    question: &mut Question,
) -> Result<()> {
    match hook {
        SuggestHook::PackageType => suggest_package_type(configurator, question),
        SuggestHook::Namespace => suggest_namespace(configurator, question),
        SuggestHook::Namespace2 => return suggest_namespace2(configurator, question),
        SuggestHook::Name => suggest_name(configurator, question),
    }
    Ok(())
}

/// Lower-cases the package type and skips the second namespace question for
/// normal packages by forcing its answer to a disabled marker.
pub fn post_package_type(
    configurator: &mut Configurator,
    answer: &serde_json::Value,
) -> Result<Outcome> {
    let value = answer.as_str().unwrap_or_default().to_lowercase();
    if value == "normal" {
        configurator.set("package.namespace2", false);
    }
    Ok(Outcome::Accepted(serde_json::Value::String(value)))
}

/// Checks that the target directory and the full package name match. On
/// mismatch asks whether to continue; declining is reported to the caller
/// instead of exiting from here.
pub fn post_package_name(
    configurator: &mut Configurator,
    answer: &serde_json::Value,
    prompt: &dyn Prompter,
) -> Result<Outcome> {
    let name = answer.as_str().unwrap_or_default();
    if !settings::is_valid_identifier(name) {
        return Err(settings::invalid_identifier(name, "package.name"));
    }

    let nested = configurator.get_str("package.type") == Some("nested");
    let namespace = configurator.get_str("package.namespace").unwrap_or_default();
    let package_name = if nested {
        let namespace2 = configurator.get_str("package.namespace2").unwrap_or_default();
        format!("{}.{}.{}", namespace, namespace2, name)
    } else {
        format!("{}.{}", namespace, name)
    };

    let dir_name = configurator.dir_name();
    if dir_name != package_name {
        let message = format!(
            "Directory ({}) and name ({}) do not match. Continue anyway?",
            dir_name, package_name
        );
        if !prompt.confirm(message, true)? {
            return Ok(Outcome::Rejected);
        }
    }
    Ok(Outcome::Accepted(serde_json::Value::String(name.to_string())))
}

/// Skips most feature questions if the package has no profile.
pub fn post_profile(
    configurator: &mut Configurator,
    answer: &serde_json::Value,
) -> Result<Outcome> {
    let value = to_boolean(answer)?;
    if !value {
        configurator.set("package.theme", false);
        configurator.set("package.setuphandlers", false);
        configurator.set("package.testing", false);
        configurator.set("travis.integration.enabled", false);
        configurator.set("travis.notifications.type", false);
        configurator.set("travis.notifications.destination", false);
    }
    Ok(Outcome::Accepted(serde_json::Value::Bool(value)))
}

/// Skips the travis questions if the package has no test setup.
pub fn post_testing(
    configurator: &mut Configurator,
    answer: &serde_json::Value,
) -> Result<Outcome> {
    let value = to_boolean(answer)?;
    if !value {
        configurator.set("travis.integration.enabled", false);
        configurator.set("travis.notifications.type", false);
        configurator.set("travis.notifications.destination", false);
    }
    Ok(Outcome::Accepted(serde_json::Value::Bool(value)))
}

/// Skips the travis notification questions when integration is off, while
/// keeping valid values for the rendered files.
pub fn post_travis(
    configurator: &mut Configurator,
    answer: &serde_json::Value,
) -> Result<Outcome> {
    let value = to_boolean(answer)?;
    if !value {
        configurator.set("travis.notifications.type", "email");
        configurator.set("travis.notifications.destination", TRAVIS_PLACEHOLDER_DESTINATION);
    }
    Ok(Outcome::Accepted(serde_json::Value::Bool(value)))
}

/// Gate before a subtemplate renders into an existing package.
pub fn post_subtemplate_warning(answer: &serde_json::Value) -> Result<Outcome> {
    let value = to_boolean(answer)?;
    if !value {
        return Ok(Outcome::Rejected);
    }
    Ok(Outcome::Accepted(serde_json::Value::Bool(value)))
}

/// Runs a post-answer hook on the raw answer.
pub fn apply_answer_hook(
    hook: AnswerHook,
    configurator: &mut Configurator,
    answer: &serde_json::Value,
    prompt: &dyn Prompter,
) -> Result<Outcome> {
    match hook {
        AnswerHook::ToBoolean => {
            Ok(Outcome::Accepted(serde_json::Value::Bool(to_boolean(answer)?)))
        }
        AnswerHook::PackageType => post_package_type(configurator, answer),
        AnswerHook::PackageName => post_package_name(configurator, answer, prompt),
        AnswerHook::Profile => post_profile(configurator, answer),
        AnswerHook::Testing => post_testing(configurator, answer),
        AnswerHook::Travis => post_travis(configurator, answer),
        AnswerHook::SubtemplateWarning => post_subtemplate_warning(answer),
    }
}

/// Runs a whole-run hook before or after rendering.
pub fn apply_render_hook(hook: RenderHook, configurator: &mut Configurator) -> Result<()> {
    match hook {
        RenderHook::PrepareAddon => variables::prepare_addon(configurator),
        RenderHook::PrepareBehavior => variables::prepare_behavior(configurator),
        RenderHook::CleanupAddon => cleanup::cleanup_addon(configurator),
        RenderHook::GitInit => git::init_if_requested(configurator),
    }
}
