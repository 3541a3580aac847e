//! Text produced by the informational commands: help, version, listings and reports.
//!
//! Everything here returns a `String`; printing is left to `main`.

use crate::constants::APP_VERSION;
use crate::profiles::ProfileStore;
use crate::registry::{describe, TemplateRegistry};
use crate::tags::{
    BuildSystem, CiSystem, EditorKind, GitWorkflow, Language, LanguageStandard, LicenseKind,
    PackageManager, ProjectStructure, Tag, TemplateKind, TestFramework,
};
use crate::validator::ValidationReport;
use std::fmt::Write;
use std::path::Path;

/// Build files recognized by `validate`.
const BUILD_FILES: [&str; 7] = [
    "CMakeLists.txt",
    "meson.build",
    "BUILD.bazel",
    "xmake.lua",
    "premake5.lua",
    "Makefile",
    "build.ninja",
];

fn values<T: Tag>() -> String {
    T::tags().join("|")
}

pub fn version_text() -> String {
    format!("CPP-Scaffold Version {APP_VERSION}")
}

pub fn help_text() -> String {
    let flags: Vec<(String, &str)> = vec![
        (format!("-t, --template <{}>", values::<TemplateKind>()), "Project template"),
        (format!("-b, --build <{}>", values::<BuildSystem>()), "Build system"),
        (format!("-p, --package <{}>", values::<PackageManager>()), "Package manager"),
        (format!("--std <{}>", values::<LanguageStandard>()), "C++ standard"),
        (format!("--test-framework <{}>", values::<TestFramework>()), "Test framework"),
        ("--tests".to_string(), "Include tests"),
        ("--docs, --documentation".to_string(), "Include documentation"),
        ("--doxygen".to_string(), "Generate a Doxyfile"),
        ("--code-style".to_string(), "Include clang-format, clang-tidy and .editorconfig"),
        (format!("--editor <{}>", values::<EditorKind>()), "Editor configuration, comma separated"),
        (format!("--ci <{}>", values::<CiSystem>()), "CI configuration, comma separated"),
        (format!("--structure <{}>", values::<ProjectStructure>()), "Directory layout"),
        ("--features <list>".to_string(), "Extra template features"),
        ("--custom-dirs <list>".to_string(), "Directories for the custom structure"),
        ("--set <key=value>".to_string(), "Extension value"),
        (format!("--license <{}>", values::<LicenseKind>()), "License file"),
        (format!("--git-workflow <{}>", values::<GitWorkflow>()), "Git workflow"),
        ("--git-remote <url>".to_string(), "Remote added as 'origin'"),
        ("--git-user <name>, --git-email <email>".to_string(), "Git identity"),
        ("--git-hooks".to_string(), "Install a clang-format pre-commit hook"),
        ("--no-git".to_string(), "Do not initialize a repository"),
        ("--no-initial-commit".to_string(), "Skip the initial commit"),
        ("--profile <name>".to_string(), "Start from a profile"),
        ("--profile-file <path>".to_string(), "Import profiles before resolving"),
        ("--template-path <path>".to_string(), "Use a local custom template"),
        ("-o, --output <dir>".to_string(), "Parent directory of the project"),
        (format!("-l, --language <{}>", values::<Language>()), "Interface language"),
        ("--strict-validation".to_string(), "Treat validation warnings as errors"),
        ("--no-validate".to_string(), "Skip validation"),
        ("--force".to_string(), "Generate even if validation fails or the directory exists"),
        ("--dry-run".to_string(), "Show what would be written"),
        ("--verbose".to_string(), "Enable verbose logging output"),
    ];

    let mut text = String::new();
    let _ = writeln!(text, "{}: C++ project scaffolding tool\n", version_text());
    let _ = writeln!(text, "Usage: cpp-scaffold <command> [project-name] [options]\n");
    let _ = writeln!(text, "Commands:");
    for (command, summary) in [
        ("create, new <name>", "Create a project"),
        ("interactive, -i", "Answer questions to configure a project"),
        ("config", "Print the effective configuration"),
        ("list, list-templates", "List project templates"),
        ("list-profiles", "List configuration profiles"),
        ("show-profile <name>", "Show a profile"),
        ("validate [path]", "Check the layout of an existing project"),
        ("validate-config", "Validate the options without generating"),
        ("help, version", "Show this help or the version"),
    ] {
        let _ = writeln!(text, "  {command:<24} {summary}");
    }
    let _ = writeln!(text, "\nOptions:");
    for (flag, summary) in flags {
        let _ = writeln!(text, "  {flag}\n      {summary}");
    }
    text
}

pub fn templates_listing(registry: &TemplateRegistry) -> String {
    let mut text = String::from("Available templates:\n");
    for kind in registry.kinds() {
        let _ = writeln!(text, "  {:<18} {}", kind.as_str(), describe(kind));
    }
    text
}

pub fn profiles_listing(store: &ProfileStore) -> String {
    let mut text = String::from("Available profiles:\n");
    for (category, profiles) in store.by_category() {
        let _ = writeln!(text, "\n[{category}]");
        for metadata in profiles {
            let _ = writeln!(text, "  {:<18} {}", metadata.name, metadata.description);
        }
    }
    text
}

/// Details of profile `name`, `None` if it is not registered.
pub fn profile_details(store: &ProfileStore, name: &str) -> Option<String> {
    let profile = store.get(name)?;
    let metadata = &profile.metadata;
    let options = &profile.options;

    let mut text = String::new();
    let _ = writeln!(text, "Profile: {}", metadata.name);
    let _ = writeln!(text, "  Description:     {}", metadata.description);
    let _ = writeln!(text, "  Category:        {}", metadata.category);
    if !metadata.tags.is_empty() {
        let _ = writeln!(text, "  Tags:            {}", metadata.tags.join(", "));
    }
    let _ = writeln!(text, "  Author:          {}", metadata.author);
    let _ = writeln!(text, "  Version:         {}", metadata.version);
    let _ = writeln!(text, "  Template:        {}", options.template_kind);
    let _ = writeln!(text, "  Build system:    {}", options.build_system);
    let _ = writeln!(text, "  Package manager: {}", options.package_manager);
    let _ = writeln!(text, "  C++ standard:    {}", options.language_standard);
    if options.include_tests {
        let _ = writeln!(text, "  Tests:           {}", options.test_framework);
    }
    if !profile.recommended_dependencies.is_empty() {
        let _ = writeln!(text, "  Dependencies:    {}", profile.recommended_dependencies.join(", "));
    }
    if let Some(setup) = &profile.setup_instructions {
        let _ = writeln!(text, "\nSetup:\n{setup}");
    }
    Some(text)
}

pub fn validation_listing(report: &ValidationReport) -> String {
    let mut text = String::new();
    for error in &report.errors {
        let _ = writeln!(text, "error: {error}");
    }
    for warning in &report.warnings {
        let _ = writeln!(text, "warning: {warning}");
    }
    let verdict = if report.is_valid() { "valid" } else { "invalid" };
    let _ = writeln!(
        text,
        "Configuration is {verdict} ({} errors, {} warnings)",
        report.errors.len(),
        report.warnings.len()
    );
    text
}

/// Checks the layout of an existing project directory.
pub fn validate_project<P: AsRef<Path>>(path: P) -> ValidationReport {
    let path = path.as_ref();
    let mut report = ValidationReport::default();

    if !path.is_dir() {
        report.error(format!("'{}' is not a directory", path.display()));
        return report;
    }
    if !BUILD_FILES.iter().any(|file| path.join(file).is_file()) {
        report.error(format!("No build file found (expected one of: {})", BUILD_FILES.join(", ")));
    }
    if !path.join("README.md").is_file() {
        report.warning("README.md is missing");
    }
    if !path.join("src").is_dir() && !path.join("include").is_dir() {
        report.error("Neither src/ nor include/ exists");
    } else {
        for dir in ["src", "include"] {
            if !path.join(dir).is_dir() {
                report.warning(format!("{dir}/ is missing"));
            }
        }
    }
    report
}
