//! Cross-field validation of a resolved option model.
//!
//! Rule groups run in a fixed order and their findings are concatenated; no group can
//! stop another from running. Errors make a configuration invalid, warnings never do.

use crate::constants::{
    KNOWN_DOC_FORMATS, KNOWN_DOC_TYPES, KNOWN_NETWORK_LIBRARIES, MAX_GIT_USER_NAME_LENGTH,
    MAX_PROJECT_NAME_LENGTH, RESERVED_NAMES,
};
use crate::options::Options;
use crate::tags::{
    BranchStrategy, BuildSystem, GitWorkflow, PackageManager, TemplateKind, TestFramework,
};
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid project name pattern"));

static GIT_REMOTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?|git|ssh)://[^\s/$.?#].[^\s]*$|^git@[^\s:]+:[^\s]+\.git$")
        .expect("valid git remote pattern")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Findings of a validation run, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True exactly when there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.errors.push(message.into());
    }

    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.warnings.push(message.into());
    }

    /// Appends the findings of `other` after the existing ones.
    pub fn extend(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Promotes every warning to an error, keeping their order after the existing errors.
    pub fn strict(mut self) -> Self {
        self.errors.append(&mut self.warnings);
        self
    }
}

type RuleGroup = fn(&Options, &mut ValidationReport);

const RULE_GROUPS: [RuleGroup; 7] = [
    validate_identity,
    validate_build_compatibility,
    validate_testing,
    validate_documentation,
    validate_git,
    validate_template_requirements,
    validate_consistency,
];

/// Runs every rule group against `options`.
pub fn validate(options: &Options) -> ValidationReport {
    let mut report = ValidationReport::default();
    for group in RULE_GROUPS {
        group(options, &mut report);
    }
    report
}

/// Checks a project name on its own, returning the first problem found.
pub fn check_project_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Project name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
        return Some(format!(
            "Project name is too long (maximum {MAX_PROJECT_NAME_LENGTH} characters)"
        ));
    }
    if !PROJECT_NAME_CHARS.is_match(name) {
        return Some(format!(
            "Project name '{name}' contains invalid characters (use letters, digits, '-' and '_')"
        ));
    }
    if name.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Some(format!("Project name '{name}' must start with a letter or '_'"));
    }
    if RESERVED_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(name)) {
        return Some(format!("Project name '{name}' is reserved"));
    }
    None
}

fn validate_identity(options: &Options, report: &mut ValidationReport) {
    if let Some(problem) = check_project_name(&options.project_name) {
        report.error(problem);
    }
}

fn validate_build_compatibility(options: &Options, report: &mut ValidationReport) {
    let build = options.build_system;
    let package = options.package_manager;

    match build {
        BuildSystem::Bazel if options.uses_package_manager() => report.warning(format!(
            "Bazel manages its own dependencies; package manager '{package}' is usually not needed"
        )),
        BuildSystem::XMake if options.uses_package_manager() => report.warning(format!(
            "XMake has a built-in package manager; '{package}' may conflict with it"
        )),
        BuildSystem::Meson if package == PackageManager::Vcpkg => {
            report.warning("vcpkg integration with Meson is limited; consider conan or wrap files")
        }
        _ => {}
    }

    if matches!(package, PackageManager::Cpm | PackageManager::FetchContent | PackageManager::Hunter)
        && build != BuildSystem::CMake
    {
        report.warning(format!("Package manager '{package}' only works with CMake, not '{build}'"));
    }

    if options.template_kind == TemplateKind::HeaderOnlyLib && options.uses_package_manager() {
        report.warning(format!(
            "Header-only libraries usually have no dependencies; package manager '{package}' may be unnecessary"
        ));
    }

    if options.template_kind == TemplateKind::Embedded && options.uses_package_manager() {
        report.warning(format!(
            "Embedded projects rarely use package managers; '{package}' may not support the target platform"
        ));
    }

    if options.include_tests {
        let framework = options.test_framework;
        match (build, framework) {
            (BuildSystem::Bazel, TestFramework::GTest | TestFramework::None) => {}
            (BuildSystem::Bazel, _) => report.warning(format!(
                "Bazel has first-class support for gtest; '{framework}' needs extra setup"
            )),
            (BuildSystem::Meson, TestFramework::Boost) => {
                report.warning("Boost.Test integration with Meson needs manual configuration")
            }
            _ => {}
        }
    }
}

fn validate_testing(options: &Options, report: &mut ValidationReport) {
    if options.include_tests && options.test_framework == TestFramework::None {
        report.warning("Tests are enabled but the test framework is 'none'; no tests will be generated");
    }
}

fn validate_documentation(options: &Options, report: &mut ValidationReport) {
    if !options.include_documentation {
        return;
    }
    for format in &options.doc_formats {
        if !KNOWN_DOC_FORMATS.contains(&format.to_lowercase().as_str()) {
            report.warning(format!(
                "Unknown documentation format '{format}' (known: {})",
                KNOWN_DOC_FORMATS.join(", ")
            ));
        }
    }
    for doc_type in &options.doc_types {
        if !KNOWN_DOC_TYPES.contains(&doc_type.to_lowercase().as_str()) {
            report.warning(format!(
                "Unknown documentation type '{doc_type}' (known: {})",
                KNOWN_DOC_TYPES.join(", ")
            ));
        }
    }
    if options.generate_doxygen && options.doxygen_theme.trim().is_empty() {
        report.warning("Doxygen is enabled but no theme is set; the default theme will be used");
    }
}

fn validate_git(options: &Options, report: &mut ValidationReport) {
    if !options.init_repo {
        return;
    }
    if let Some(url) = options.remote_url.as_deref().filter(|url| !url.is_empty()) {
        if !GIT_REMOTE_URL.is_match(url) {
            report.error(format!("Invalid git remote URL: {url}"));
        }
    }
    if let Some(email) = options.user_email.as_deref().filter(|email| !email.is_empty()) {
        if !EMAIL.is_match(email) {
            report.error(format!("Invalid git user email: {email}"));
        }
    }
    if let Some(user) = &options.user_name {
        if user.chars().count() > MAX_GIT_USER_NAME_LENGTH {
            report.warning(format!(
                "Git user name is longer than {MAX_GIT_USER_NAME_LENGTH} characters"
            ));
        }
    }
    if options.workflow == GitWorkflow::GitFlow && options.branch_strategy != BranchStrategy::GitFlow
    {
        report.warning(format!(
            "Git workflow 'gitflow' is used with branch strategy '{}'; consider 'gitflow'",
            options.branch_strategy
        ));
    }
}

fn validate_template_requirements(options: &Options, report: &mut ValidationReport) {
    let kind = options.template_kind;
    match kind {
        TemplateKind::Gui | TemplateKind::QtApp if options.gui_frameworks.is_empty() => {
            report.error(format!("Template '{kind}' requires at least one GUI framework (--gui-frameworks)"))
        }
        TemplateKind::Network => {
            match options.network_library.as_deref().map(str::trim).filter(|lib| !lib.is_empty()) {
                None => report.error("Template 'network' requires a network library (--network-lib)"),
                Some(library) if !KNOWN_NETWORK_LIBRARIES.contains(&library.to_lowercase().as_str()) => {
                    report.warning(format!(
                        "Network library '{library}' is not one of: {}",
                        KNOWN_NETWORK_LIBRARIES.join(", ")
                    ))
                }
                Some(_) => {}
            }
        }
        TemplateKind::GameEngine | TemplateKind::SfmlApp
            if options.game_frameworks.is_empty() && options.graphics_libraries.is_empty() =>
        {
            report.warning(format!(
                "Template '{kind}' has no game framework or graphics library configured"
            ))
        }
        TemplateKind::Console if !options.gui_frameworks.is_empty() => {
            report.warning("GUI frameworks are ignored by the 'console' template")
        }
        TemplateKind::HeaderOnlyLib if options.build_system == BuildSystem::Make => {
            report.warning("Plain Make offers no install rules for header-only libraries; consider CMake")
        }
        TemplateKind::Embedded if options.include_tests => {
            report.warning("Unit tests for embedded targets usually run on the host and need extra setup")
        }
        _ => {}
    }
}

fn validate_consistency(options: &Options, report: &mut ValidationReport) {
    if !options.ci_options.is_empty() && !options.init_repo {
        report.warning("CI is configured but git initialization is disabled");
    }
    if options.generate_doxygen && !options.include_documentation {
        report.warning("Doxygen is enabled but documentation is disabled; enable --docs");
    }
    if options.include_shaders
        && !matches!(
            options.template_kind,
            TemplateKind::Gui | TemplateKind::GameEngine | TemplateKind::SfmlApp
        )
    {
        report.warning(format!(
            "Shaders are only used by graphical templates, not '{}'",
            options.template_kind
        ));
    }
}
