use cpp_scaffold::processor::customize;
use cpp_scaffold::options::Options;
use cpp_scaffold::registry::TemplateRegistry;
use cpp_scaffold::tags::{BuildSystem, Tag, TemplateKind};
use cpp_scaffold::template::{TemplateFile, TemplateSkeleton};

#[test]
fn test_every_kind_has_a_consistent_skeleton() {
    let registry = TemplateRegistry::with_builtins();
    assert_eq!(registry.kinds().count(), TemplateKind::ALL.len());

    for kind in TemplateKind::ALL {
        let skeleton = registry.get(*kind).unwrap();
        assert!(skeleton.check().is_ok(), "{kind}");
        assert!(!skeleton.directories.is_empty(), "{kind}");
    }
}

#[test]
fn test_every_kind_and_build_system_produces_a_build_file() {
    let registry = TemplateRegistry::with_builtins();
    for kind in TemplateKind::ALL {
        for build in BuildSystem::ALL {
            let options = Options {
                template_kind: *kind,
                build_system: *build,
                include_tests: true,
                ..Options::named("demo")
            };
            let project = customize(registry.get(*kind).unwrap(), &options).unwrap();
            assert!(project.unresolved.is_empty(), "{kind}/{build}: {:?}", project.unresolved);
            assert!(
                project.files.iter().all(|file| !file.path.contains("{{")),
                "{kind}/{build}"
            );
            let has_build_file = project.files.iter().any(|file| {
                matches!(
                    file.path.as_str(),
                    "CMakeLists.txt"
                        | "meson.build"
                        | "BUILD.bazel"
                        | "xmake.lua"
                        | "premake5.lua"
                        | "Makefile"
                        | "build.ninja"
                )
            });
            assert!(has_build_file, "{kind}/{build}");
        }
    }
}

#[test]
fn test_register_rejects_inconsistent_skeletons() {
    let mut registry = TemplateRegistry::new();
    let broken = TemplateSkeleton {
        default_features: vec!["missing".to_string()],
        ..TemplateSkeleton::default()
    };
    assert!(registry.register(TemplateKind::Console, broken).is_err());
    assert!(registry.get(TemplateKind::Console).is_none());

    let custom = TemplateSkeleton {
        directories: vec!["src".to_string()],
        files: vec![TemplateFile::new("src/main.cpp", "int main() {}\n")],
        ..TemplateSkeleton::default()
    };
    registry.register(TemplateKind::Console, custom).unwrap();
    assert_eq!(registry.get(TemplateKind::Console).unwrap().files.len(), 1);
}
