use clap::Parser;
use cpp_scaffold::cli::Args;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("cpp-scaffold")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(parsed.tokens.is_empty());
    assert!(!parsed.verbose());
}

#[test]
fn test_tokens_are_kept_verbatim() {
    let args = make_args(&["create", "demo", "--template", "lib", "--tests", "-b", "meson"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(
        parsed.tokens,
        vec!["create", "demo", "--template", "lib", "--tests", "-b", "meson"]
    );
}

#[test]
fn test_help_and_version_flags_reach_the_parser() {
    let parsed = Args::try_parse_from(make_args(&["--help"])).unwrap();
    assert_eq!(parsed.tokens, vec!["--help"]);

    let parsed = Args::try_parse_from(make_args(&["--version"])).unwrap();
    assert_eq!(parsed.tokens, vec!["--version"]);
}

#[test]
fn test_unknown_flags_are_not_rejected() {
    let parsed = Args::try_parse_from(make_args(&["create", "demo", "--no-such-flag"])).unwrap();
    assert_eq!(parsed.tokens.last().map(String::as_str), Some("--no-such-flag"));
}

#[test]
fn test_verbose() {
    let parsed = Args::try_parse_from(make_args(&["create", "demo", "--verbose"])).unwrap();
    assert!(parsed.verbose());
}
