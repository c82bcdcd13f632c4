//! Scone's main application entry point.
//! Parses command-line arguments, wires up the renderer and prompter and
//! hands the run to the processor.

use scone::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    loader::resolve_template,
    parser::get_answers_from,
    processor::generate,
    prompt::{AutoPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template argument to a template directory
/// 2. Resolves the target directory (argument or current directory)
/// 3. Loads preloaded answers if an answers file was given
/// 4. Runs the generation
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt: Box<dyn Prompter> = if args.non_interactive {
        Box::new(AutoPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };

    let template_root = resolve_template(&args.template)?;
    let target_dir = match args.target_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(Error::IoError)?,
    };

    let preloaded_answers = get_answers_from(args.answers.as_deref())?;

    generate(&template_root, &target_dir, preloaded_answers, &engine, &*prompt)?;

    println!("Generation completed successfully in {}.", target_dir.display());
    Ok(())
}
