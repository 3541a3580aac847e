//! cpp-scaffold creates C++ projects from built-in or local templates.
//! It resolves the configuration of a run from the command line, profiles and the tool
//! configuration file, validates it, customizes a template skeleton and writes the result.

/// Permissive parser turning raw tokens into a command and an option model
pub mod args;

/// Built-in template skeletons, one per template kind
pub mod catalog;

/// Command-line interface module for cpp-scaffold
pub mod cli;

/// Help, version, listings and reports printed by the informational commands
pub mod commands;

/// Tool configuration handling
/// Supports JSON and YAML formats (cpp-scaffold.json, cpp-scaffold.yml, cpp-scaffold.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the cpp-scaffold application
pub mod error;

/// File and directory ignore patterns
/// Processes .scaffoldignore files of custom templates
pub mod ignore;

/// Template sources: built-in skeletons and local template directories
pub mod loader;

pub mod logger;

/// The option model shared by every stage
pub mod options;

/// Resolution, customization and generation pipeline
pub mod orchestrator;

/// Template customization engine
pub mod processor;

/// Named option presets and their merge rules
pub mod profiles;

/// User input and interaction handling
pub mod prompt;

pub mod registry;

/// Placeholder substitution and conditional blocks
pub mod renderer;

/// Closed enumerations with their string tables
pub mod tags;

/// Template skeleton model
pub mod template;

/// Cross-field validation of the option model
pub mod validator;

/// Git repository setup for generated projects
pub mod vcs;

/// Filesystem writers for generated projects
pub mod writer;
