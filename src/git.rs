//! Git repository initialization for freshly generated packages.

use crate::context::Configurator;
use crate::error::Result;
use git2::{IndexAddOption, Repository, Signature};
use log::debug;
use std::path::Path;

/// Runs after rendering when the template asked the git question; does
/// nothing unless the `package.git.init` answer is true.
pub fn init_if_requested(configurator: &Configurator) -> Result<()> {
    if !configurator.get_bool("package.git.init") {
        debug!("Skipping git initialization");
        return Ok(());
    }
    init_repository(configurator.target_dir())
}

/// Initializes a git repository in the generated package and commits
/// everything the run produced. An existing repository is left untouched.
pub fn init_repository(path: &Path) -> Result<()> {
    if path.join(".git").exists() {
        debug!("Repository already initialized at {}", path.display());
        return Ok(());
    }

    let repo = Repository::init(path)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // Fall back to a fixed identity when the environment has no git config.
    let signature =
        repo.signature().or_else(|_| Signature::now("scone", "scone@localhost"))?;

    repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])?;

    debug!("Initialized git repository at {}", path.display());
    Ok(())
}
