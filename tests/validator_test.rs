use cpp_scaffold::args::parse;
use cpp_scaffold::options::Options;
use cpp_scaffold::tags::{
    BuildSystem, CiSystem, GitWorkflow, PackageManager, TemplateKind, TestFramework,
};
use cpp_scaffold::validator::validate;

#[test]
fn test_default_console_project_is_clean() {
    let report = validate(&parse(&["create", "demo"]).options);
    assert!(report.is_valid());
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn test_invalid_project_name() {
    let report = validate(&parse(&["create", "??bad??"]).options);
    assert!(!report.is_valid());
    assert!(report.errors.iter().any(|error| error.contains("Project name")));
}

#[test]
fn test_gui_without_frameworks_is_an_error() {
    let options = Options { template_kind: TemplateKind::Gui, ..Options::named("viewer") };
    let report = validate(&options);
    assert!(!report.is_valid());
    assert!(report.errors[0].contains("GUI framework"));

    let options = Options { gui_frameworks: vec!["qt".to_string()], ..options };
    assert!(validate(&options).is_valid());
}

#[test]
fn test_network_library_rules() {
    let options = Options { template_kind: TemplateKind::Network, ..Options::named("net") };
    assert!(!validate(&options).is_valid());

    let options = Options { network_library: Some("asio".to_string()), ..options };
    let report = validate(&options);
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());

    let options = Options { network_library: Some("homegrown".to_string()), ..options };
    let report = validate(&options);
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_warnings_never_flip_validity() {
    let options = Options {
        build_system: BuildSystem::Bazel,
        package_manager: PackageManager::Conan,
        include_tests: true,
        test_framework: TestFramework::None,
        init_repo: false,
        ci_options: vec![CiSystem::GitHub],
        generate_doxygen: true,
        ..Options::named("noisy")
    };
    let report = validate(&options);

    assert!(report.warnings.len() >= 4, "{:?}", report.warnings);
    assert!(report.is_valid());

    let strict = report.clone().strict();
    assert!(!strict.is_valid());
    assert_eq!(strict.errors.len(), report.warnings.len());
}

#[test]
fn test_git_checks_only_apply_when_initializing() {
    let options = Options {
        remote_url: Some("not a url".to_string()),
        user_email: Some("nobody".to_string()),
        ..Options::named("demo")
    };
    let report = validate(&options);
    assert_eq!(report.errors.len(), 2, "{:?}", report.errors);

    let options = Options { init_repo: false, ..options };
    assert!(validate(&options).is_valid());

    let options = Options {
        remote_url: Some("git@github.com:acme/demo.git".to_string()),
        user_email: Some("dev@acme.io".to_string()),
        workflow: GitWorkflow::GitFlow,
        ..Options::named("demo")
    };
    let report = validate(&options);
    assert!(report.is_valid());
    assert!(report.warnings.iter().any(|warning| warning.contains("gitflow")));
}

#[test]
fn test_cmake_only_package_managers() {
    let options = Options {
        build_system: BuildSystem::Meson,
        package_manager: PackageManager::Cpm,
        ..Options::named("demo")
    };
    let report = validate(&options);
    assert!(report.is_valid());
    assert!(report.warnings.iter().any(|warning| warning.contains("only works with CMake")));
}
