//! cpp-scaffold's main application entry point.
//! Reads the tool configuration, parses the tokens and dispatches the command.

use std::path::{Path, PathBuf};

use cpp_scaffold::{
    args::{parse_with_defaults, Command, ParsedArgs},
    cli::{get_args, Args},
    commands::{
        help_text, profile_details, profiles_listing, templates_listing, validate_project,
        validation_listing, version_text,
    },
    config::get_config,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    orchestrator::Orchestrator,
    profiles::ProfileStore,
    prompt::DialoguerPrompter,
    registry::TemplateRegistry,
    vcs::GitVcs,
    writer::{DryRunWriter, LocalWriter},
};
use log::warn;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose());

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and force is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn run(args: Args) -> Result<()> {
    let config = get_config()?;
    let mut profiles = ProfileStore::with_builtins();
    config.register_profiles(&mut profiles)?;
    let mut orchestrator = Orchestrator::new(profiles, TemplateRegistry::with_builtins());

    let parsed = parse_with_defaults(&args.tokens, config.defaults);

    if parsed.show_help || parsed.show_version {
        for diagnostic in &parsed.diagnostics {
            warn!("{diagnostic}");
        }
        if parsed.show_version {
            println!("{}", version_text());
        } else {
            print!("{}", help_text());
        }
        return Ok(());
    }

    match parsed.command {
        Command::Help => print!("{}", help_text()),
        Command::Version => println!("{}", version_text()),
        Command::ListTemplates => print!("{}", templates_listing(orchestrator.registry())),
        Command::ListProfiles => print!("{}", profiles_listing(orchestrator.profiles())),
        Command::ShowProfile => {
            let name = parsed.argument.unwrap_or_default();
            let details = profile_details(orchestrator.profiles(), &name)
                .ok_or_else(|| Error::ProfileError(format!("profile '{name}' not found")))?;
            print!("{details}");
        }
        Command::Validate => {
            let path = parsed.argument.unwrap_or_else(|| ".".to_string());
            let report = validate_project(&path);
            print!("{}", validation_listing(&report));
            if !report.is_valid() {
                return Err(Error::ValidationError { errors: report.errors });
            }
        }
        Command::ValidateConfig => {
            let resolution = orchestrator.resolve(parsed, &DialoguerPrompter::new())?;
            print!("{}", validation_listing(&resolution.validation));
            resolution.ensure_valid()?;
        }
        Command::Config => {
            let resolution = orchestrator.resolve(parsed, &DialoguerPrompter::new())?;
            print!("{}", serde_yaml::to_string(&resolution.options)?);
        }
        Command::Create | Command::Interactive => create(&mut orchestrator, parsed)?,
    }
    Ok(())
}

fn create(orchestrator: &mut Orchestrator, parsed: ParsedArgs) -> Result<()> {
    let resolution = orchestrator.resolve(parsed, &DialoguerPrompter::new())?;
    for warning in resolution.warnings.iter().chain(&resolution.validation.warnings) {
        warn!("{warning}");
    }
    resolution.ensure_valid()?;

    let options = &resolution.options;
    let root = get_output_dir(options.project_root(), options.force || options.dry_run)?;
    let project = orchestrator.customize(options)?;
    let vcs = GitVcs::new();

    let report = if options.dry_run {
        let writer = DryRunWriter::new();
        let report = orchestrator.generate(options, &project, &writer, &vcs);
        for operation in writer.operations() {
            println!("would {operation}");
        }
        report
    } else {
        orchestrator.generate(options, &project, &LocalWriter::new(&root), &vcs)
    };

    for failure in &report.failures {
        eprintln!("failed: {failure}");
    }
    println!(
        "Project '{}' generated in {} ({} directories, {} files).",
        options.project_name,
        root.display(),
        report.directories_created.len(),
        report.files_written.len()
    );
    Ok(())
}
