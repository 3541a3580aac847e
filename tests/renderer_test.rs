use cpp_scaffold::options::Options;
use cpp_scaffold::renderer::{
    evaluate_conditionals, substitute, PlaceholderMap, PlaceholderRenderer, TemplateRenderer,
};
use cpp_scaffold::tags::{ExtensionKey, LanguageStandard, LicenseKind, TestFramework};
use time::{Date, Month};

fn map(entries: &[(&'static str, &str)]) -> PlaceholderMap {
    entries.iter().map(|(key, value)| (*key, value.to_string())).collect()
}

fn date() -> Date {
    Date::from_calendar_date(2024, Month::March, 5).unwrap()
}

#[test]
fn test_conditional_block() {
    let template = "A{{#IF X}}B{{/IF}}C";

    assert_eq!(evaluate_conditionals(template, &map(&[("X", "ON")])), "ABC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "true")])), "ABC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "OFF")])), "AC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "false")])), "AC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "0")])), "AC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "")])), "AC");
    assert_eq!(evaluate_conditionals(template, &map(&[])), "AC");
    // Only the exact spellings are falsy.
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "off")])), "ABC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "False")])), "ABC");
    assert_eq!(evaluate_conditionals(template, &map(&[("X", "FALSE")])), "ABC");
}

#[test]
fn test_blocks_do_not_nest() {
    let placeholders = map(&[("A", "ON"), ("B", "OFF")]);
    let text = "{{#IF A}}1{{#IF B}}2{{/IF}}3{{/IF}}";
    // The first close marker ends the outer block.
    assert_eq!(evaluate_conditionals(text, &placeholders), "1{{#IF B}}23{{/IF}}");
}

#[test]
fn test_unclosed_block_is_left_verbatim() {
    let placeholders = map(&[("A", "ON")]);
    assert_eq!(evaluate_conditionals("x{{#IF A}}y", &placeholders), "x{{#IF A}}y");
}

#[test]
fn test_substitute_reports_unknown_keys_once() {
    let placeholders = map(&[("NAME", "demo")]);
    let rendered = substitute("{{NAME}} {{MISSING}} {{MISSING}} {{not a key}}", &placeholders);

    assert_eq!(rendered.text, "demo {{MISSING}} {{MISSING}} {{not a key}}");
    assert_eq!(rendered.unresolved, vec!["MISSING"]);
}

#[test]
fn test_substitution_runs_before_conditionals() {
    let placeholders = map(&[("NAME", "demo"), ("TESTS", "ON")]);
    let rendered = PlaceholderRenderer::new()
        .render("{{#IF TESTS}}test_{{NAME}}{{/IF}}{{#IF DOCS}}docs{{/IF}}", &placeholders)
        .unwrap();
    assert_eq!(rendered.text, "test_demo");
    assert!(rendered.unresolved.is_empty());
}

#[test]
fn test_placeholder_values() {
    let mut options = Options {
        description: Some("   ".to_string()),
        language_standard: LanguageStandard::Latest,
        include_tests: true,
        test_framework: TestFramework::Catch2,
        license_kind: LicenseKind::Apache2,
        user_name: Some("Jane Doe".to_string()),
        ..Options::named("my-cool-app")
    };
    options.extensions.set(ExtensionKey::CMakeMinimumVersion, "3.25");

    let placeholders = PlaceholderMap::build(&options, date());

    assert_eq!(placeholders.get("PROJECT_NAME"), Some("my-cool-app"));
    assert_eq!(placeholders.get("PROJECT_NAME_UPPER"), Some("MY_COOL_APP"));
    let pascal = PlaceholderMap::build(&Options::named("MyApp"), date());
    assert_eq!(pascal.get("PROJECT_NAME_UPPER"), Some("MY_APP"));
    assert_eq!(placeholders.get("PROJECT_NAME_SNAKE"), Some("my_cool_app"));
    assert_eq!(placeholders.get("PROJECT_NAME_PASCAL"), Some("MyCoolApp"));
    assert_ne!(placeholders.get("PROJECT_DESCRIPTION"), Some("   "));
    assert_eq!(placeholders.get("CPP_STANDARD_NUM"), Some("23"));
    assert_eq!(placeholders.get("TEST_FRAMEWORK"), Some("catch2"));
    assert_eq!(placeholders.get("LICENSE_KIND"), Some("APACHE2"));
    assert_eq!(placeholders.get("AUTHOR_NAME"), Some("Jane Doe"));
    assert_eq!(placeholders.get("CMAKE_MINIMUM_VERSION"), Some("3.25"));
    assert_eq!(placeholders.get("CURRENT_YEAR"), Some("2024"));
    assert_eq!(placeholders.get("CURRENT_DATE"), Some("2024-03-05"));
    assert!(placeholders.is_truthy("ENABLE_TESTING"));
    assert!(!placeholders.is_truthy("ENABLE_DOCS"));
    assert!(!placeholders.is_truthy("NETWORK_LIBRARY"));
}

#[test]
fn test_tests_without_framework_are_disabled() {
    let options =
        Options { include_tests: true, test_framework: TestFramework::None, ..Options::named("x") };
    let placeholders = PlaceholderMap::build(&options, date());
    assert_eq!(placeholders.get("ENABLE_TESTING"), Some("OFF"));
    assert_eq!(placeholders.get("TEST_FRAMEWORK"), Some(""));
}
