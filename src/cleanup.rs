//! Post-generation cleanup.
//! Restructures the rendered tree into a nested layout when requested, then
//! prunes the files and directories belonging to disabled features.

use crate::context::Configurator;
use crate::error::Result;
use crate::settings::{PackageSettings, PackageType};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Restructures the generated package when nested, then removes everything
/// disabled features left behind. Runs once after rendering; running it
/// again on the same tree is a no-op.
pub fn cleanup_addon(configurator: &Configurator) -> Result<()> {
    let settings = PackageSettings::from_configurator(configurator)?;

    // '<target>/src/collective'
    let start_path = configurator.target_dir().join("src").join(&settings.namespace);
    // '<target>/src/collective/task' for normal packages
    let mut base_path = start_path.join(&settings.name);

    if let (PackageType::Nested, Some(namespace2)) =
        (settings.package_type, settings.namespace2.as_deref())
    {
        base_path = restructure_nested(&start_path, &base_path, namespace2, &settings.name)?;
    }

    for relative in deletion_plan(&settings) {
        remove_path(&base_path.join(relative))?;
    }
    Ok(())
}

/// Turns `src/<namespace>/<name>` into `src/<namespace>/<namespace2>/<name>`:
/// creates the intermediate namespace directory, copies the package
/// `__init__.py` into it and moves the package directory underneath.
/// Skipped entirely when the intermediate directory already exists.
fn restructure_nested(
    start_path: &Path,
    base_path: &Path,
    namespace2: &str,
    name: &str,
) -> Result<PathBuf> {
    let nested_root = start_path.join(namespace2);
    let nested_base = nested_root.join(name);

    if !nested_root.exists() {
        debug!("Restructuring into nested layout at {}", nested_root.display());
        fs::create_dir_all(&nested_root)?;
        fs::copy(base_path.join("__init__.py"), nested_root.join("__init__.py"))?;
        fs::rename(base_path, &nested_base)?;
    }

    Ok(nested_base)
}

/// Base-path-relative paths to delete, in fixed evaluation order. Disabled
/// features append their paths; duplicates are harmless because deletion
/// silently skips absent paths.
pub fn deletion_plan(settings: &PackageSettings) -> Vec<&'static str> {
    let mut plan = Vec::new();

    if !settings.profile {
        plan.extend(["profiles", "testing.zcml", "setuphandlers.py", "interfaces.py"]);
    }
    if !settings.setuphandlers {
        plan.push("setuphandlers.py");
    }
    if !settings.locales {
        plan.push("locales");
    }
    if !settings.example {
        plan.extend(["browser/templates", "browser/views.py"]);
    }
    if !settings.testing {
        plan.extend([
            "tests",
            "testing.py",
            "testing.zcml",
            ".travis.yml",
            "travis.cfg",
            ".coveragerc",
            "profile/testing",
        ]);
    }
    if !settings.travis {
        plan.extend([".travis.yml", "travis.cfg"]);
    }
    if !settings.theme {
        plan.extend(["theme", "profiles/default/theme.xml"]);
    }

    plan
}

/// Removes a file or directory tree; absent paths are not an error.
fn remove_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!("Removing {}", path.display());
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
