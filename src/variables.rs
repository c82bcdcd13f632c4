//! Derived template variables.
//! Computed once after all answers are final and before rendering; the
//! templates consume these instead of re-deriving names themselves.

use crate::context::Configurator;
use crate::error::{Error, Result};
use crate::settings::{PackageSettings, PackageType};
use cruet::Inflector;

/// Computes the variables the addon templates need beyond the raw answers.
///
/// For `namespace = "collective"`, `name = "task"` this writes:
/// * `package.dottedname` - `collective.task`
/// * `package.browserlayer` - `CollectiveTaskLayer`
/// * `package.longname` - `collectivetask`
/// * `jenkins.directories` - `collective/task`
/// * `package.namespace_packages` - the setup.py list literal
pub fn prepare_addon(configurator: &mut Configurator) -> Result<()> {
    let settings = PackageSettings::from_configurator(configurator)?;
    let dotted_name = settings.dotted_name();

    let camel_case_name = camel_case(&dotted_name);
    let browser_layer = format!("{}Layer", camel_case_name);
    let long_name = camel_case_name.to_lowercase();
    let jenkins_directories = dotted_name.replace('.', "/");
    let namespace_packages = namespace_packages_literal(&settings);

    configurator.set("package.dottedname", dotted_name);
    configurator.set("package.browserlayer", browser_layer);
    configurator.set("package.longname", long_name);
    configurator.set("jenkins.directories", jenkins_directories);
    configurator.set("package.namespace_packages", namespace_packages);
    Ok(())
}

/// Computes the variables the behavior subtemplate needs. The package paths
/// come from the target directory name, since the subtemplate runs inside
/// an already generated package.
pub fn prepare_behavior(configurator: &mut Configurator) -> Result<()> {
    let dir_name = configurator.dir_name().to_string();
    if dir_name.split('.').count() < 2 {
        return Err(Error::ConfigError(format!(
            "Directory name '{}' does not look like a generated package \
             (expected at least 'namespace.name')",
            dir_name
        )));
    }

    let behavior_name = configurator
        .get_str("behavior.name")
        .map(str::to_string)
        .ok_or_else(|| Error::ConfigError("Missing answer for 'behavior.name'".to_string()))?;

    let namespace_path = dir_name.replace('.', "/");

    configurator.set("package.dottedname", dir_name);
    configurator.set("package.namespace_path", namespace_path);
    configurator.set("behavior.classname", behavior_name.to_pascal_case());
    configurator.set("behavior.module", behavior_name.to_snake_case());
    Ok(())
}

/// Title-cases every dot-separated part and joins them: `collective.task`
/// becomes `CollectiveTask`. Underscores and digits end a word, so the next
/// letter is uppercased again: `my_addon` becomes `My_Addon` and `ab2cd`
/// becomes `Ab2Cd`.
fn camel_case(dotted_name: &str) -> String {
    dotted_name.split('.').map(title_case).collect()
}

fn title_case(part: &str) -> String {
    let mut result = String::with_capacity(part.len());
    let mut previous_cased = false;
    for c in part.chars() {
        if previous_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_cased = c.is_lowercase() || c.is_uppercase();
    }
    result
}

/// List literal for the generated setup.py. Nested packages get a single
/// quoted namespace; normal ones a two-part literal whose second namespace
/// is empty by construction.
fn namespace_packages_literal(settings: &PackageSettings) -> String {
    match settings.package_type {
        PackageType::Nested => format!("'{}'", settings.namespace),
        PackageType::Normal => {
            let namespace2 = settings.namespace2.as_deref().unwrap_or_default();
            format!("'{0}', '{0}.{1}'", settings.namespace, namespace2)
        }
    }
}
