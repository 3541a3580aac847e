use cpp_scaffold::error::Error;
use cpp_scaffold::loader::{load_skeleton, LocalLoader, Manifest, TemplateLoader, TemplateSource};
use cpp_scaffold::options::Options;
use cpp_scaffold::processor::customize_on;
use cpp_scaffold::registry::TemplateRegistry;
use cpp_scaffold::tags::TemplateKind;
use cpp_scaffold::writer::{FileSystemWriter, LocalWriter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use time::{Date, Month};

const MANIFEST: &str = r#"
available_features: [docs]
files:
  docs/guide.md:
    required_features: [docs]
  run.sh:
    executable: true
  ghost.txt:
    optional: true
"#;

fn write(root: &Path, path: &str, content: &str) {
    let target = root.join(path);
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(target, content).unwrap();
}

fn custom_template() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "template.yaml", MANIFEST);
    write(root, ".scaffoldignore", "build\n*.o\n");
    write(root, "src/main.cpp", "// {{PROJECT_NAME}}\nint main() { return 0; }\n");
    write(root, "src/main.o", "binary");
    write(root, "docs/guide.md", "# {{PROJECT_NAME}} guide\n");
    write(root, "run.sh", "#!/bin/sh\n./build/{{PROJECT_NAME}}\n");
    write(root, "build/cache.txt", "stale");
    temp_dir
}

#[test]
fn test_local_template_is_walked_with_manifest_rules() {
    let template = custom_template();
    let skeleton = LocalLoader::new(template.path()).load().unwrap();

    assert_eq!(skeleton.directories, vec!["docs", "src"]);
    let paths: Vec<&str> = skeleton.files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(paths, vec!["docs/guide.md", "run.sh", "src/main.cpp"]);

    assert_eq!(skeleton.files[0].required_features, vec!["docs"]);
    assert!(skeleton.files[1].executable);
    assert!(skeleton.files[2].is_mandatory());
    assert_eq!(skeleton.available_features, vec!["docs"]);
}

#[test]
fn test_local_template_is_customized_like_a_builtin() {
    let template = custom_template();
    let options = Options {
        custom_template_path: Some(template.path().to_path_buf()),
        ..Options::named("tool")
    };
    let source = TemplateSource::from_options(&options).unwrap();
    assert!(matches!(source, TemplateSource::LocalPath(_)));

    let skeleton = load_skeleton(&source, &TemplateRegistry::new()).unwrap();
    let date = Date::from_calendar_date(2024, Month::June, 1).unwrap();

    let plain = customize_on(&skeleton, &options, date).unwrap();
    let paths: Vec<&str> = plain.files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(paths, vec!["run.sh", "src/main.cpp"]);
    assert_eq!(plain.files[1].content, "// tool\nint main() { return 0; }\n");

    let with_docs = Options { extra_features: vec!["docs".to_string()], ..options };
    let documented = customize_on(&skeleton, &with_docs, date).unwrap();
    assert_eq!(documented.files[0].path, "docs/guide.md");
    assert_eq!(documented.files[0].content, "# tool guide\n");
}

#[test]
fn test_binary_files_are_copied_verbatim() {
    let template = TempDir::new().unwrap();
    let icon: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0xff, 0xfe, b'{', b'{', 0x00];
    write(template.path(), "assets/{{PROJECT_NAME}}.png", "");
    fs::write(template.path().join("assets/{{PROJECT_NAME}}.png"), &icon).unwrap();
    write(template.path(), "src/main.cpp", "int main() {}\n");

    let skeleton = LocalLoader::new(template.path()).load().unwrap();
    assert_eq!(skeleton.files.len(), 2);
    assert_eq!(skeleton.files[0].binary.as_deref(), Some(icon.as_slice()));
    assert!(skeleton.files[1].binary.is_none());

    let date = Date::from_calendar_date(2024, Month::June, 1).unwrap();
    let project = customize_on(&skeleton, &Options::named("tool"), date).unwrap();
    assert_eq!(project.files[0].path, "assets/tool.png");
    assert!(project.unresolved.is_empty());

    let output = TempDir::new().unwrap();
    let writer = LocalWriter::new(output.path());
    for file in &project.files {
        writer.write_file(&file.path, file.bytes()).unwrap();
    }
    assert_eq!(fs::read(output.path().join("assets/tool.png")).unwrap(), icon);
    assert_eq!(fs::read_to_string(output.path().join("src/main.cpp")).unwrap(), "int main() {}\n");
}

#[test]
fn test_manifest_directories_override_walked_ones() {
    let template = custom_template();
    write(
        template.path(),
        "template.yaml",
        "directories: [src, include, tests]\navailable_features: [docs]\n",
    );
    let skeleton = LocalLoader::new(template.path()).load().unwrap();
    assert_eq!(skeleton.directories, vec!["src", "include", "tests"]);
}

#[test]
fn test_json_manifest() {
    let manifest =
        Manifest::parse(r#"{"default_features": ["x"], "available_features": ["x", "y"]}"#).unwrap();
    assert_eq!(manifest.default_features, vec!["x"]);
    assert!(manifest.directories.is_none());
    assert!(Manifest::parse("files: [not, a, map]").is_err());
}

#[test]
fn test_invalid_templates_are_rejected() {
    let missing = LocalLoader::new("/definitely/not/here").load();
    assert!(matches!(missing, Err(Error::TemplateDoesNotExistsError { .. })));

    let template = custom_template();
    let file = LocalLoader::new(template.path().join("run.sh")).load();
    assert!(matches!(file, Err(Error::TemplateError(_))));

    write(template.path(), "template.yaml", "default_features: [missing]\n");
    let unavailable = LocalLoader::new(template.path()).load();
    assert!(matches!(unavailable, Err(Error::TemplateError(_))));
}

#[test]
fn test_builtin_source_comes_from_the_registry() {
    let registry = TemplateRegistry::with_builtins();
    let skeleton = load_skeleton(&TemplateSource::Builtin(TemplateKind::Network), &registry).unwrap();
    assert!(skeleton.available_features.contains(&"server".to_string()));

    let empty = TemplateRegistry::new();
    assert!(load_skeleton(&TemplateSource::Builtin(TemplateKind::Network), &empty).is_err());
}
