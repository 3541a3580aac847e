//! Command-line entry point for cpp-scaffold.
//! Clap only captures the raw tokens; the permissive parser in [`crate::args`] interprets them,
//! so unknown flags end up as diagnostics instead of hard errors.

use clap::Parser;

/// Command-line arguments structure for cpp-scaffold.
#[derive(Parser, Debug)]
#[command(
    name = "cpp-scaffold",
    about = "cpp-scaffold: C++ project scaffolding tool",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Command, project name and flags, e.g. `create demo --template lib --tests`
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub tokens: Vec<String>,
}

impl Args {
    /// Verbose logging was requested, checked before the tokens are parsed.
    pub fn verbose(&self) -> bool {
        self.tokens.iter().any(|token| token == "--verbose")
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling if the tokens cannot be captured
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
