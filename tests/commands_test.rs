use cpp_scaffold::commands::{
    help_text, profile_details, profiles_listing, templates_listing, validate_project,
    validation_listing, version_text,
};
use cpp_scaffold::profiles::ProfileStore;
use cpp_scaffold::registry::TemplateRegistry;
use cpp_scaffold::validator::ValidationReport;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_version_and_help() {
    assert_eq!(version_text(), "CPP-Scaffold Version 1.2.0");

    let help = help_text();
    assert!(help.starts_with("CPP-Scaffold Version 1.2.0"));
    assert!(help.contains("cmake|meson|bazel|xmake|premake|make|ninja"));
    assert!(help.contains("--dry-run"));
}

#[test]
fn test_listings() {
    let templates = templates_listing(&TemplateRegistry::with_builtins());
    assert!(templates.starts_with("Available templates:\n"));
    assert!(templates.contains("header-only-lib"));

    let store = ProfileStore::with_builtins();
    let profiles = profiles_listing(&store);
    assert!(profiles.contains("[Web Development]"));
    assert!(profiles.contains("rest-api"));

    let details = profile_details(&store, "rest-api").unwrap();
    assert!(details.starts_with("Profile: rest-api\n"));
    assert!(details.contains("Template:        webservice"));
    assert!(details.contains("nlohmann-json"));
    assert!(profile_details(&store, "missing").is_none());
}

#[test]
fn test_validation_listing() {
    let mut report = ValidationReport::default();
    report.warning("something odd");
    assert_eq!(
        validation_listing(&report),
        "warning: something odd\nConfiguration is valid (0 errors, 1 warnings)\n"
    );

    report.error("broken");
    let text = validation_listing(&report);
    assert!(text.starts_with("error: broken\n"));
    assert!(text.ends_with("Configuration is invalid (1 errors, 1 warnings)\n"));
}

#[test]
fn test_validate_project_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let report = validate_project(root.join("missing"));
    assert_eq!(report.errors.len(), 1);

    let report = validate_project(root);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.warnings, vec!["README.md is missing"]);

    fs::write(root.join("meson.build"), "project('demo', 'cpp')\n").unwrap();
    fs::write(root.join("README.md"), "# demo\n").unwrap();
    fs::create_dir(root.join("src")).unwrap();
    let report = validate_project(root);
    assert!(report.is_valid());
    assert_eq!(report.warnings, vec!["include/ is missing"]);
}
