use cpp_scaffold::config::{find_config, get_config_from, parse_config, ToolConfig};
use cpp_scaffold::profiles::ProfileStore;
use cpp_scaffold::tags::{BuildSystem, TestFramework};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = get_config_from(&[temp_dir.path()]).unwrap();
    assert_eq!(config, ToolConfig::default());
}

#[test]
fn test_first_directory_wins() {
    let local = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("cpp-scaffold.json"), r#"{"defaults": {"build_system": "bazel"}}"#)
        .unwrap();

    let config = get_config_from(&[local.path(), home.path()]).unwrap();
    assert_eq!(config.defaults.build_system, BuildSystem::Bazel);

    fs::write(local.path().join("cpp-scaffold.yml"), "defaults:\n  build_system: xmake\n").unwrap();
    let found = find_config(&[local.path(), home.path()], &["cpp-scaffold.json", "cpp-scaffold.yml"]);
    assert_eq!(found, Some(local.path().join("cpp-scaffold.yml")));
    let config = get_config_from(&[local.path(), home.path()]).unwrap();
    assert_eq!(config.defaults.build_system, BuildSystem::XMake);
}

#[test]
fn test_configured_profiles_are_registered() {
    let config = parse_config(
        r#"
defaults:
  include_tests: true
  test_framework: doctest
profiles:
  - metadata:
      name: house-style
      category: Team
    options:
      include_code_style_tools: true
"#,
    )
    .unwrap();
    assert!(config.defaults.include_tests);
    assert_eq!(config.defaults.test_framework, TestFramework::Doctest);

    let mut store = ProfileStore::with_builtins();
    let builtins = store.len();
    config.register_profiles(&mut store).unwrap();
    assert_eq!(store.len(), builtins + 1);
    assert!(store.get("house-style").unwrap().options.include_code_style_tools);

    assert!(config.register_profiles(&mut store).is_err());
}

#[test]
fn test_unknown_tags_are_rejected() {
    let err = parse_config("defaults:\n  build_system: scons\n").unwrap_err();
    assert!(err.to_string().contains("Invalid configuration format"));
}
