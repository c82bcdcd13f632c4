//! Scone is a scaffolding tool for CMS add-on packages.
//! It generates ready-to-develop packages from built-in templates, with
//! answer normalization, suggested defaults and post-generation cleanup.

/// Command-line interface module for the scone application
pub mod cli;

/// Post-generation cleanup
/// Removes skeleton parts belonging to disabled features and restructures
/// nested namespace packages
pub mod cleanup;

/// Configuration handling for scone templates
/// Supports JSON and YAML formats (scone.json, scone.yml, scone.yaml)
pub mod config;

/// The configuration context carrying the target directory and the answers
pub mod context;

/// Error types and handling for the scone application
pub mod error;

/// Git repository initialization for generated packages
pub mod git;

/// Hook functions wired to the template questions
/// Handles answer normalization, suggested defaults, cascading skips and
/// the package-name validator
pub mod hooks;

/// File and directory ignore patterns
/// Processes .sconeignore files to exclude specific paths
pub mod ignore;

/// Template resolution for built-in and local templates
pub mod loader;

/// The question pipeline
pub mod parser;

/// Core template processing orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering backed by MiniJinja
pub mod renderer;

/// Typed view of the package answers, validated once per run
pub mod settings;

/// Derived template variables computed before rendering
pub mod variables;
