mod common;

use common::{Answer, ScriptedPrompter};
use cpp_scaffold::options::Options;
use cpp_scaffold::prompt::{choose, choose_many, prompt_project_name, run_wizard};
use cpp_scaffold::tags::{
    BuildSystem, CiSystem, EditorKind, LanguageStandard, PackageManager, Tag, TemplateKind,
    TestFramework,
};
use cpp_scaffold::validator::validate;

fn position<T: Tag + PartialEq>(value: T) -> usize {
    T::ALL.iter().position(|candidate| *candidate == value).unwrap()
}

#[test]
fn test_project_name_is_asked_until_valid() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Line(""),
        Answer::Line("9lives"),
        Answer::Line("  good-name  "),
    ]);

    assert_eq!(prompt_project_name(&prompter, None).unwrap(), "good-name");
    assert_eq!(prompter.asked.borrow().len(), 3);
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn test_choose_preselects_current_value() {
    let prompter = ScriptedPrompter::new(vec![Answer::Default, Answer::Choice(1)]);

    let kept = choose(&prompter, "Build system", BuildSystem::ALL, BuildSystem::Bazel).unwrap();
    assert_eq!(kept, BuildSystem::Bazel);

    let picked = choose(&prompter, "Build system", BuildSystem::ALL, BuildSystem::Bazel).unwrap();
    assert_eq!(picked, BuildSystem::ALL[1]);
}

#[test]
fn test_wizard_applies_every_answer() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Line("engine"),
        Answer::Line("  "),
        Answer::Choice(TemplateKind::ALL.iter().position(|k| *k == TemplateKind::Lib).unwrap()),
        Answer::Choice(BuildSystem::ALL.iter().position(|b| *b == BuildSystem::Meson).unwrap()),
        Answer::Choice(PackageManager::ALL.iter().position(|p| *p == PackageManager::Conan).unwrap()),
        Answer::Choice(
            LanguageStandard::ALL.iter().position(|s| *s == LanguageStandard::Cpp20).unwrap(),
        ),
        Answer::Confirm(true),
        Answer::Choice(1),
        Answer::Confirm(true),
        Answer::Confirm(false),
        Answer::Selections(vec![0, 1]),
        Answer::Confirm(false),
    ]);

    let options = run_wizard(&prompter, Options::default()).unwrap();

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(
        *prompter.asked.borrow(),
        vec![
            "Project name",
            "Description",
            "Project template",
            "Build system",
            "Package manager",
            "C++ standard",
            "Include tests?",
            "Test framework",
            "Include documentation?",
            "Include code style tools?",
            "Editors to configure",
            "Initialize a git repository?",
        ]
    );
    assert_eq!(options.project_name, "engine");
    assert_eq!(options.description, None);
    assert_eq!(options.template_kind, TemplateKind::Lib);
    assert_eq!(options.build_system, BuildSystem::Meson);
    assert_eq!(options.package_manager, PackageManager::Conan);
    assert_eq!(options.language_standard, LanguageStandard::Cpp20);
    assert!(options.include_tests);
    assert_eq!(options.test_framework, TestFramework::Catch2);
    assert!(options.include_documentation);
    assert!(!options.include_code_style_tools);
    assert_eq!(options.editor_options, vec![EditorKind::ALL[0], EditorKind::ALL[1]]);
    assert!(!options.init_repo);
}

#[test]
fn test_wizard_defaults_keep_the_base() {
    let base = Options {
        description: Some("A tool".to_string()),
        build_system: BuildSystem::XMake,
        ..Options::named("tool")
    };
    // Tests stay off, so no framework question follows.
    let prompter = ScriptedPrompter::new(vec![Answer::Default; 12]);

    let options = run_wizard(&prompter, base.clone()).unwrap();

    assert_eq!(prompter.remaining(), 0);
    assert!(!prompter.asked.borrow().contains(&"Test framework".to_string()));
    assert_eq!(prompter.asked.borrow().last().unwrap(), "CI systems");
    assert_eq!(options, base);
}

#[test]
fn test_choose_many_preselects_current_values() {
    let prompter = ScriptedPrompter::new(vec![Answer::Default, Answer::Selections(vec![])]);
    let current = [CiSystem::GitLab, CiSystem::Azure];

    let kept = choose_many(&prompter, "CI systems", CiSystem::ALL, &current).unwrap();
    assert_eq!(kept, vec![CiSystem::GitLab, CiSystem::Azure]);

    let cleared = choose_many(&prompter, "CI systems", CiSystem::ALL, &current).unwrap();
    assert!(cleared.is_empty());
}

#[test]
fn test_wizard_network_project_passes_validation() {
    let prompter = ScriptedPrompter::new(vec![
        Answer::Line("net-app"),
        Answer::Default,
        Answer::Choice(position(TemplateKind::Network)),
        Answer::Choice(2),
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Confirm(false),
        Answer::Confirm(false),
        Answer::Confirm(false),
        Answer::Selections(vec![]),
        Answer::Confirm(true),
        Answer::Selections(vec![position(CiSystem::GitHub)]),
    ]);

    let options = run_wizard(&prompter, Options::default()).unwrap();

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(prompter.asked.borrow()[3], "Network library");
    assert_eq!(options.network_library.as_deref(), Some("poco"));
    assert_eq!(options.ci_options, vec![CiSystem::GitHub]);
    let report = validate(&options);
    assert!(report.errors.is_empty(), "{:?}", report.errors);
}

#[test]
fn test_wizard_qt_app_defaults_to_qt() {
    let mut answers = vec![
        Answer::Line("viewer"),
        Answer::Default,
        Answer::Choice(position(TemplateKind::QtApp)),
    ];
    answers.extend(vec![Answer::Default; 10]);
    let prompter = ScriptedPrompter::new(answers);

    let options = run_wizard(&prompter, Options::default()).unwrap();

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(prompter.asked.borrow()[3], "GUI framework");
    assert_eq!(options.gui_frameworks, vec!["qt".to_string()]);
    assert!(validate(&options).errors.is_empty());
}

#[test]
fn test_wizard_stops_on_prompt_errors() {
    let prompter = ScriptedPrompter::new(vec![Answer::Line("demo")]);
    assert!(run_wizard(&prompter, Options::default()).is_err());
}
