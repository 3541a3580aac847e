//! Resolution pipeline: parsed arguments in, validated options out, then customization
//! and generation.
//!
//! The orchestrator owns the profile store and the template registry. Both are built by the
//! caller and handed over, so tests can run the pipeline against their own stores.

use crate::args::{Command, Diagnostic, ParsedArgs};
use crate::error::{Error, Result};
use crate::loader::{load_skeleton, TemplateSource};
use crate::options::Options;
use crate::processor::{self, CustomizedProject};
use crate::profiles::ProfileStore;
use crate::prompt::{prompt_project_name, run_wizard, Prompter};
use crate::registry::TemplateRegistry;
use crate::tags::SourceType;
use crate::validator::{validate, ValidationReport};
use crate::vcs::{workflow_branches, VersionControl};
use crate::writer::FileSystemWriter;
use log::{debug, warn};
use std::path::PathBuf;

/// Options that control the run itself rather than the project.
///
/// They always come from the command line, even when a profile is applied.
#[derive(Debug, Clone)]
struct RunControls {
    output_dir: PathBuf,
    force: bool,
    dry_run: bool,
    verbose: bool,
    validate_config: bool,
    strict_validation: bool,
    source_type: SourceType,
    custom_template_path: Option<PathBuf>,
    git_repository_url: Option<String>,
    archive_url: Option<String>,
    archive_path: Option<PathBuf>,
    profile_file: Option<PathBuf>,
}

impl RunControls {
    fn capture(options: &Options) -> Self {
        Self {
            output_dir: options.output_dir.clone(),
            force: options.force,
            dry_run: options.dry_run,
            verbose: options.verbose,
            validate_config: options.validate_config,
            strict_validation: options.strict_validation,
            source_type: options.source_type,
            custom_template_path: options.custom_template_path.clone(),
            git_repository_url: options.git_repository_url.clone(),
            archive_url: options.archive_url.clone(),
            archive_path: options.archive_path.clone(),
            profile_file: options.profile_file.clone(),
        }
    }

    fn restore(self, mut options: Options) -> Options {
        options.output_dir = self.output_dir;
        options.force = self.force;
        options.dry_run = self.dry_run;
        options.verbose = self.verbose;
        options.validate_config = self.validate_config;
        options.strict_validation = self.strict_validation;
        options.source_type = self.source_type;
        options.custom_template_path = self.custom_template_path;
        options.git_repository_url = self.git_repository_url;
        options.archive_url = self.archive_url;
        options.archive_path = self.archive_path;
        options.profile_file = self.profile_file;
        options
    }
}

/// Outcome of [`Orchestrator::resolve`].
#[derive(Debug, Clone)]
pub struct Resolution {
    pub command: Command,
    pub options: Options,
    pub diagnostics: Vec<Diagnostic>,
    /// Warnings raised while applying a profile
    pub warnings: Vec<String>,
    pub validation: ValidationReport,
}

impl Resolution {
    /// Fails with [`Error::ValidationError`] when the options have errors, unless
    /// `--force` was given or validation is turned off.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.validation.is_valid() || self.options.force || !self.options.validate_config {
            return Ok(());
        }
        Err(Error::ValidationError { errors: self.validation.errors.clone() })
    }
}

/// What [`Orchestrator::generate`] did. Failed steps do not stop the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub directories_created: Vec<String>,
    pub files_written: Vec<String>,
    pub failures: Vec<String>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, step: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("{step} failed: {e}");
                self.failures.push(format!("{step}: {e}"));
                false
            }
        }
    }
}

pub struct Orchestrator {
    profiles: ProfileStore,
    registry: TemplateRegistry,
}

impl Orchestrator {
    pub fn new(profiles: ProfileStore, registry: TemplateRegistry) -> Self {
        Self { profiles, registry }
    }

    /// Orchestrator over the built-in profiles and skeletons.
    pub fn with_builtins() -> Self {
        Self::new(ProfileStore::with_builtins(), TemplateRegistry::with_builtins())
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn profiles_mut(&mut self) -> &mut ProfileStore {
        &mut self.profiles
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolves parsed arguments into validated options.
    ///
    /// # Arguments
    /// * `parsed` - Output of the argument parser
    /// * `prompter` - Asked for the project name or the wizard answers when needed
    ///
    /// # Errors
    /// * `Error::ProfileError` / `Error::IoError` if the profile file cannot be imported
    /// * `Error::PromptError` if reading an answer fails
    pub fn resolve(&mut self, parsed: ParsedArgs, prompter: &dyn Prompter) -> Result<Resolution> {
        let ParsedArgs { command, options, diagnostics, .. } = parsed;
        for diagnostic in &diagnostics {
            warn!("{diagnostic}");
        }

        if let Some(file) = &options.profile_file {
            let imported = self.profiles.import_file(file)?;
            debug!("Imported profiles: {}", imported.join(", "));
        }

        let mut options = options;
        let mut warnings = Vec::new();
        if let Some(name) = options.profile_name.clone() {
            let controls = RunControls::capture(&options);
            let outcome = self.profiles.apply_profile(&name, options);
            options = controls.restore(outcome.options);
            warnings.extend(outcome.warnings);
        }

        match command {
            Command::Create if options.project_name.trim().is_empty() => {
                options.project_name = prompt_project_name(prompter, None)?;
            }
            Command::Interactive => options = run_wizard(prompter, options)?,
            _ => {}
        }

        let mut validation = validate(&options);
        if options.strict_validation {
            validation = validation.strict();
        }
        debug!(
            "Validation finished with {} errors and {} warnings",
            validation.errors.len(),
            validation.warnings.len()
        );

        Ok(Resolution { command, options, diagnostics, warnings, validation })
    }

    /// Loads the skeleton selected by `options` and customizes it.
    ///
    /// # Errors
    /// * `Error::UnsupportedSourceError` for git and archive sources
    /// * Any error of the loader or the customization engine
    pub fn customize(&self, options: &Options) -> Result<CustomizedProject> {
        let source = TemplateSource::from_options(options)?;
        let skeleton = load_skeleton(&source, &self.registry)?;
        processor::customize(&skeleton, options)
    }

    /// Writes `project` and sets up version control.
    ///
    /// Directories come first, then files, then executable bits. Version control runs only
    /// for real runs with `init_repo` set.
    pub fn generate(
        &self,
        options: &Options,
        project: &CustomizedProject,
        writer: &dyn FileSystemWriter,
        vcs: &dyn VersionControl,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        for directory in &project.directories {
            let result = writer.create_directory(directory);
            if report.record(&format!("creating directory '{directory}'"), result) {
                report.directories_created.push(directory.clone());
            }
        }

        for file in &project.files {
            let result = writer.write_file(&file.path, file.bytes());
            if report.record(&format!("writing '{}'", file.path), result) {
                report.files_written.push(file.path.clone());
            }
        }

        for file in project.files.iter().filter(|file| file.executable) {
            if report.files_written.contains(&file.path) {
                let result = writer.set_executable(&file.path);
                report.record(&format!("marking '{}' executable", file.path), result);
            }
        }

        if options.init_repo && !options.dry_run {
            self.setup_version_control(options, vcs, &mut report);
        }

        report
    }

    fn setup_version_control(
        &self,
        options: &Options,
        vcs: &dyn VersionControl,
        report: &mut GenerationReport,
    ) {
        let root = options.project_root();
        report.record("initializing the repository", vcs.init_repository(&root, options));
        report.record("creating .gitignore", vcs.create_ignore_file(&root, options));
        if options.license_enabled() {
            report.record("creating LICENSE", vcs.create_license_file(&root, options));
        }
        if options.setup_hooks {
            report.record("installing git hooks", vcs.install_hooks(&root, options));
        }

        let branches = workflow_branches(options);
        if options.create_initial_commit {
            let committed =
                report.record("creating the initial commit", vcs.initial_commit(&root, options));
            if committed && !branches.is_empty() {
                report.record("creating branches", vcs.create_branches(&root, options));
            }
        } else if !branches.is_empty() {
            warn!("Skipping branches {} as no initial commit is created", branches.join(", "));
        }
    }
}
