use cpp_scaffold::options::Options;
use cpp_scaffold::processor::{customize_on, resolve_features, select_directories, CustomizedProject};
use cpp_scaffold::registry::TemplateRegistry;
use cpp_scaffold::tags::{
    CiSystem, EditorKind, ExtensionKey, ProjectStructure, TemplateKind, TestFramework,
};
use cpp_scaffold::template::{TemplateFile, TemplateSkeleton};
use cpp_scaffold::writer::{FileSystemWriter, LocalWriter};
use tempfile::TempDir;
use time::{Date, Month};

fn date() -> Date {
    Date::from_calendar_date(2024, Month::January, 15).unwrap()
}

fn builtin(kind: TemplateKind) -> TemplateSkeleton {
    TemplateRegistry::with_builtins().get(kind).cloned().unwrap()
}

fn paths(project: &CustomizedProject) -> Vec<&str> {
    project.files.iter().map(|file| file.path.as_str()).collect()
}

fn write(project: &CustomizedProject, writer: &LocalWriter) {
    for directory in &project.directories {
        writer.create_directory(directory).unwrap();
    }
    for file in &project.files {
        writer.write_file(&file.path, file.bytes()).unwrap();
    }
}

#[test]
fn test_default_console_project() {
    let options = Options::named("demo");
    let project = customize_on(&builtin(TemplateKind::Console), &options, date()).unwrap();

    assert_eq!(project.directories, vec!["src", "include", "tests"]);
    assert_eq!(project.features.iter().collect::<Vec<_>>(), vec!["cli11"]);
    assert_eq!(
        paths(&project),
        vec![
            "src/main.cpp",
            "include/demo/app.hpp",
            "src/app.cpp",
            "include/demo/cli.hpp",
            "CMakeLists.txt",
            "scripts/build.sh",
            "vcpkg.json",
            "README.md",
        ]
    );
    assert!(project.unresolved.is_empty(), "{:?}", project.unresolved);

    let script = project.files.iter().find(|file| file.path == "scripts/build.sh").unwrap();
    assert!(script.executable);
    let readme = project.files.iter().find(|file| file.path == "README.md").unwrap();
    assert!(readme.content.starts_with("# demo\n"));
    assert!(!readme.content.contains("## Testing"));
    assert!(!readme.content.contains("{{"));
}

#[test]
fn test_customization_is_idempotent() {
    let skeleton = builtin(TemplateKind::Lib);
    let options = Options {
        include_tests: true,
        include_documentation: true,
        generate_doxygen: true,
        ..Options::named("geometry")
    };

    let first = customize_on(&skeleton, &options, date()).unwrap();
    let second = customize_on(&skeleton, &options, date()).unwrap();
    assert_eq!(first, second);

    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    write(&first, &LocalWriter::new(first_dir.path()));
    write(&second, &LocalWriter::new(second_dir.path()));
    assert!(!dir_diff::is_different(first_dir.path(), second_dir.path()).unwrap());
}

#[test]
fn test_enabling_tests_adds_framework_features() {
    let options = Options {
        include_tests: true,
        test_framework: TestFramework::Catch2,
        ..Options::named("demo")
    };
    let project = customize_on(&builtin(TemplateKind::Console), &options, date()).unwrap();

    assert!(project.features.contains("testing"));
    assert!(project.features.contains("test-catch2"));
    assert!(!project.features.contains("test-gtest"));

    let files = paths(&project);
    assert!(files.contains(&"tests/test_main.cpp"));
    assert!(files.contains(&"tests/CMakeLists.txt"));
    assert_eq!(files.iter().filter(|path| **path == "tests/test_main.cpp").count(), 1);

    let readme = project.files.iter().find(|file| file.path == "README.md").unwrap();
    assert!(readme.content.contains("Tests use catch2"));
}

#[test]
fn test_feature_order() {
    let skeleton = builtin(TemplateKind::Console);
    let options = Options {
        extra_features: vec!["logging".to_string(), "bogus".to_string()],
        include_tests: true,
        include_code_style_tools: true,
        ci_options: vec![CiSystem::GitHub],
        editor_options: vec![EditorKind::VsCode],
        ..Options::named("demo")
    };

    let features: Vec<String> = resolve_features(&skeleton, &options).into_iter().collect();
    assert_eq!(
        features,
        vec![
            "cli11",
            "logging",
            "testing",
            "test-gtest",
            "code-style",
            "clang-format",
            "clang-tidy",
            "ci-github",
            "editor-vscode",
        ]
    );

    let project = customize_on(&skeleton, &options, date()).unwrap();
    let files = paths(&project);
    for expected in [
        "include/demo/log.hpp",
        ".clang-format",
        ".clang-tidy",
        ".editorconfig",
        ".github/workflows/ci.yml",
        ".vscode/settings.json",
    ] {
        assert!(files.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_project_structures() {
    let skeleton = builtin(TemplateKind::Console);

    let minimal = Options { project_structure: ProjectStructure::Minimal, ..Options::named("a") };
    assert_eq!(select_directories(&skeleton, &minimal), vec!["src", "include"]);

    let advanced = Options { project_structure: ProjectStructure::Advanced, ..Options::named("a") };
    assert!(select_directories(&skeleton, &advanced).contains(&"scripts".to_string()));

    let mut custom = Options { project_structure: ProjectStructure::Custom, ..Options::named("a") };
    assert_eq!(select_directories(&skeleton, &custom), skeleton.directories);
    custom.extensions.set(ExtensionKey::CustomDirectories, "src, tools, src");
    let project = customize_on(&skeleton, &custom, date()).unwrap();
    assert_eq!(project.directories, vec!["src", "tools"]);
}

#[test]
fn test_custom_files_are_added_empty() {
    let mut options = Options::named("demo");
    options.extensions.set(ExtensionKey::CustomFiles, "NOTES.md, src/main.cpp");
    let project = customize_on(&builtin(TemplateKind::Console), &options, date()).unwrap();

    let notes = project.files.iter().find(|file| file.path == "NOTES.md").unwrap();
    assert!(notes.content.is_empty());
    // The skeleton's own main.cpp wins over the custom entry.
    let main = project.files.iter().filter(|file| file.path == "src/main.cpp").count();
    assert_eq!(main, 1);
}

#[test]
fn test_paths_rendering_to_nothing_are_dropped() {
    let skeleton = TemplateSkeleton {
        directories: vec!["src".to_string(), "{{#IF ENABLE_DOCS}}docs{{/IF}}".to_string()],
        files: vec![
            TemplateFile::new("{{#IF ENABLE_DOCS}}docs/index.md{{/IF}}", "docs"),
            TemplateFile::new("/src/{{PROJECT_NAME_SNAKE}}.cpp/", "// {{AUTHOR}}"),
        ],
        ..TemplateSkeleton::default()
    };
    let project = customize_on(&skeleton, &Options::named("my-app"), date()).unwrap();

    assert_eq!(project.directories, vec!["src"]);
    assert_eq!(paths(&project), vec!["src/my_app.cpp"]);
    assert_eq!(project.files[0].content, "// {{AUTHOR}}");
    assert_eq!(project.unresolved, vec!["AUTHOR"]);
}
