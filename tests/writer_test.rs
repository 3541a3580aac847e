use cpp_scaffold::writer::{DryRunWriter, FileSystemWriter, LocalWriter, WriteOperation};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_local_writer_matches_expected_tree() {
    let expected = TempDir::new().unwrap();
    fs::create_dir_all(expected.path().join("docs")).unwrap();
    fs::create_dir_all(expected.path().join("src/nested")).unwrap();
    fs::write(expected.path().join("src/nested/a.cpp"), "int a;\n").unwrap();
    fs::write(expected.path().join("README.md"), "# demo\n").unwrap();

    let actual = TempDir::new().unwrap();
    let writer = LocalWriter::new(actual.path());
    writer.create_directory("docs").unwrap();
    // Parents are created on demand.
    writer.write_file("src/nested/a.cpp", b"int a;\n").unwrap();
    writer.write_file("README.md", b"# demo\n").unwrap();

    assert_eq!(writer.root(), actual.path());
    assert!(!dir_diff::is_different(expected.path(), actual.path()).unwrap());
}

#[cfg(unix)]
#[test]
fn test_set_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let writer = LocalWriter::new(temp_dir.path());
    writer.write_file("scripts/build.sh", b"#!/bin/sh\n").unwrap();
    writer.set_executable("scripts/build.sh").unwrap();

    let mode = fs::metadata(temp_dir.path().join("scripts/build.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);

    assert!(writer.set_executable("missing.sh").is_err());
}

#[test]
fn test_dry_run_touches_nothing() {
    let writer = DryRunWriter::new();
    writer.create_directory("src").unwrap();
    writer.write_file("src/main.cpp", b"int main() {}\n").unwrap();
    writer.set_executable("src/main.cpp").unwrap();

    assert_eq!(
        writer.operations(),
        vec![
            WriteOperation::CreateDirectory("src".to_string()),
            WriteOperation::WriteFile { path: "src/main.cpp".to_string(), bytes: 14 },
            WriteOperation::SetExecutable("src/main.cpp".to_string()),
        ]
    );
    assert_eq!(writer.operations()[1].to_string(), "write file 'src/main.cpp' (14 bytes)");
}
