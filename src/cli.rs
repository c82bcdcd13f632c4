//! Command-line interface implementation for scone.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for scone.
#[derive(Parser, Debug)]
#[command(author, version, about = "Scone: scaffolding tool for CMS add-on packages", long_about = None)]
pub struct Args {
    /// Name of a built-in template (addon, behavior) or path to a template directory
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory the package is generated into; its name seeds the
    /// suggested answers. Defaults to the current directory.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Read answers from a JSON or YAML file instead of asking
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Never prompt; questions without a preloaded answer take their defaults
    #[arg(short, long)]
    pub non_interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
