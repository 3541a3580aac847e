//! Permissive argument parser.
//!
//! Turns the raw command-line tokens into a command plus a fully populated [`Options`].
//! Parsing never fails: unknown flags, unknown enum values and missing values become
//! [`Diagnostic`]s and the affected fields keep their previous value.

use crate::loader::ArchiveLocation;
use crate::options::{split_list, Options};
use crate::tags::{
    BranchStrategy, BuildSystem, BuildType, CiSystem, EditorKind, ExtensionKey, GitWorkflow,
    Language, LanguageStandard, LicenseKind, PackageManager, ProjectStructure, SourceType, Tag,
    TemplateKind, TestFramework, UnknownTag,
};
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Top level command, always taken from the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Interactive,
    Config,
    ListTemplates,
    ListProfiles,
    ShowProfile,
    Validate,
    ValidateConfig,
    Help,
    Version,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "create" | "new" => Self::Create,
            "interactive" | "-i" => Self::Interactive,
            "config" | "configure" => Self::Config,
            "list" | "list-templates" => Self::ListTemplates,
            "list-profiles" | "profiles" => Self::ListProfiles,
            "show-profile" | "profile-info" => Self::ShowProfile,
            "validate" => Self::Validate,
            "validate-config" => Self::ValidateConfig,
            "help" | "--help" | "-h" => Self::Help,
            "version" | "--version" | "-v" => Self::Version,
            _ => return None,
        };
        Some(command)
    }
}

/// Non-fatal problem found while reading the tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Invalid value for {flag}: {error}")]
    InvalidValue { flag: String, error: UnknownTag },

    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid extension '{value}': {reason}")]
    InvalidExtension { value: String, reason: String },
}

/// Everything the parser extracted from the command line.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub command: Command,
    /// Positional argument of commands that take one (`show-profile`, `validate`)
    pub argument: Option<String>,
    pub options: Options,
    pub show_help: bool,
    pub show_version: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedArgs {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parses `tokens` starting from the default option model.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ParsedArgs {
    parse_with_defaults(tokens, Options::default())
}

/// Parses `tokens` on top of `base`, typically the defaults of the tool configuration file.
pub fn parse_with_defaults<S: AsRef<str>>(tokens: &[S], base: Options) -> ParsedArgs {
    let tokens: Vec<String> = tokens.iter().map(|token| token.as_ref().to_string()).collect();
    let mut state = ParseState { options: base, ..ParseState::default() };
    let mut argument = None;

    let Some(first) = tokens.first() else {
        debug!("No arguments, starting interactive mode");
        return state.finish(Command::Interactive, None);
    };

    let Some(command) = Command::from_token(first) else {
        state.diagnostics.push(Diagnostic::UnknownCommand(first.clone()));
        state.show_help = true;
        return state.finish(Command::Help, None);
    };

    let second = tokens.get(1).filter(|token| !is_flag(token));
    let mut flags_start = 1;
    match command {
        Command::Help => state.show_help = true,
        Command::Version => state.show_version = true,
        Command::Create => {
            if let Some(name) = second {
                state.options.project_name = name.clone();
                flags_start = 2;
            }
        }
        Command::ShowProfile => match second {
            Some(name) => {
                argument = Some(name.clone());
                flags_start = 2;
            }
            None => {
                state.diagnostics.push(Diagnostic::MissingValue { flag: first.clone() });
                state.show_help = true;
            }
        },
        Command::Validate => {
            argument = Some(second.cloned().unwrap_or_else(|| ".".to_string()));
            if second.is_some() {
                flags_start = 2;
            }
        }
        Command::Interactive
        | Command::Config
        | Command::ListTemplates
        | Command::ListProfiles
        | Command::ValidateConfig => {}
    }

    let mut cursor = Cursor { tokens: &tokens, position: flags_start };
    parse_flags(&mut cursor, &mut state);

    state.finish(command, argument)
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

#[derive(Default)]
struct ParseState {
    options: Options,
    show_help: bool,
    show_version: bool,
    diagnostics: Vec<Diagnostic>,
}

impl ParseState {
    fn finish(self, command: Command, argument: Option<String>) -> ParsedArgs {
        ParsedArgs {
            command,
            argument,
            options: self.options,
            show_help: self.show_help,
            show_version: self.show_version,
            diagnostics: self.diagnostics,
        }
    }
}

struct Cursor<'a> {
    tokens: &'a [String],
    position: usize,
}

impl Cursor<'_> {
    fn current(&self) -> Option<&str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Consumes the next token as a value, unless it looks like a flag.
    fn take_value(&mut self) -> Option<String> {
        let next = self.tokens.get(self.position + 1)?;
        if is_flag(next) {
            return None;
        }
        self.position += 1;
        Some(next.clone())
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

type Matcher = fn(&str, &mut Cursor, &mut ParseState) -> bool;

/// Flag matchers, consulted in this order for every token.
const MATCHERS: [(&str, Matcher); 9] = [
    ("basic", match_basic),
    ("project", match_project),
    ("build", match_build),
    ("testing", match_testing),
    ("dev-tools", match_dev_tools),
    ("git", match_git),
    ("documentation", match_documentation),
    ("advanced", match_advanced),
    ("remote-source", match_remote_source),
];

fn parse_flags(cursor: &mut Cursor, state: &mut ParseState) {
    while let Some(token) = cursor.current().map(String::from) {
        let owner = MATCHERS
            .iter()
            .find(|(_, matcher)| matcher(&token, cursor, state))
            .map(|(name, _)| *name);
        match owner {
            Some(name) => debug!("{name} matcher consumed '{token}'"),
            None => state.diagnostics.push(Diagnostic::UnknownArgument(token)),
        }
        cursor.advance();
    }
}

fn enum_value<T: Tag>(
    flag: &str,
    cursor: &mut Cursor,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<T> {
    let raw = string_value(flag, cursor, diagnostics)?;
    lookup(flag, &raw, diagnostics)
}

fn lookup<T: Tag>(flag: &str, raw: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<T> {
    let value = T::from_tag(raw);
    if value.is_none() {
        diagnostics.push(Diagnostic::InvalidValue {
            flag: flag.to_string(),
            error: UnknownTag::of::<T>(raw),
        });
    }
    value
}

fn enum_list<T: Tag>(
    flag: &str,
    cursor: &mut Cursor,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Vec<T>> {
    let items = list_value(flag, cursor, diagnostics)?;
    let values: Vec<T> = items.iter().filter_map(|item| lookup(flag, item, diagnostics)).collect();
    (!values.is_empty()).then_some(values)
}

fn string_value(flag: &str, cursor: &mut Cursor, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    let value = cursor.take_value();
    if value.is_none() {
        diagnostics.push(Diagnostic::MissingValue { flag: flag.to_string() });
    }
    value
}

fn list_value(flag: &str, cursor: &mut Cursor, diagnostics: &mut Vec<Diagnostic>) -> Option<Vec<String>> {
    string_value(flag, cursor, diagnostics).map(|raw| split_list(&raw))
}

fn match_basic(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    match token {
        "-h" | "--help" => state.show_help = true,
        "-v" | "--version" => state.show_version = true,
        "--verbose" => state.options.verbose = true,
        "-l" | "--language" => {
            if let Some(language) = enum_value::<Language>(token, cursor, &mut state.diagnostics) {
                state.options.language = language;
            }
        }
        _ => return false,
    }
    true
}

fn match_project(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "-t" | "--template" => {
            if let Some(kind) = enum_value::<TemplateKind>(token, cursor, diagnostics) {
                options.template_kind = kind;
            }
        }
        "--template-path" => {
            if let Some(path) = string_value(token, cursor, diagnostics) {
                options.custom_template_path = Some(PathBuf::from(path));
                options.source_type = SourceType::LocalPath;
            }
        }
        "--profile" => {
            if let Some(name) = string_value(token, cursor, diagnostics) {
                options.profile_name = Some(name);
            }
        }
        "--profile-file" => {
            if let Some(path) = string_value(token, cursor, diagnostics) {
                options.profile_file = Some(PathBuf::from(path));
            }
        }
        "--description" => {
            if let Some(description) = string_value(token, cursor, diagnostics) {
                options.description = Some(description);
            }
        }
        "-o" | "--output" => {
            if let Some(path) = string_value(token, cursor, diagnostics) {
                options.output_dir = PathBuf::from(path);
            }
        }
        "--force" => options.force = true,
        "--dry-run" => options.dry_run = true,
        "--structure" => {
            if let Some(structure) = enum_value::<ProjectStructure>(token, cursor, diagnostics) {
                options.project_structure = structure;
            }
        }
        "--custom-dirs" => {
            if let Some(dirs) = list_value(token, cursor, diagnostics) {
                options.extensions.set(ExtensionKey::CustomDirectories, dirs.join(","));
                options.project_structure = ProjectStructure::Custom;
            }
        }
        "--set" => {
            if let Some(raw) = string_value(token, cursor, diagnostics) {
                apply_extension(&raw, options, diagnostics);
            }
        }
        _ => return false,
    }
    true
}

fn apply_extension(raw: &str, options: &mut Options, diagnostics: &mut Vec<Diagnostic>) {
    let Some((key, value)) = raw.split_once('=') else {
        diagnostics.push(Diagnostic::InvalidExtension {
            value: raw.to_string(),
            reason: "expected key=value".to_string(),
        });
        return;
    };
    match ExtensionKey::from_tag(key) {
        Some(key) => options.extensions.set(key, value.trim()),
        None => diagnostics.push(Diagnostic::InvalidExtension {
            value: raw.to_string(),
            reason: UnknownTag::of::<ExtensionKey>(key.trim()).to_string(),
        }),
    }
}

fn match_build(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "-b" | "--build" => {
            if let Some(build) = enum_value::<BuildSystem>(token, cursor, diagnostics) {
                options.build_system = build;
            }
        }
        "-p" | "--package" => {
            if let Some(package) = enum_value::<PackageManager>(token, cursor, diagnostics) {
                options.package_manager = package;
            }
        }
        "--std" => {
            if let Some(standard) = enum_value::<LanguageStandard>(token, cursor, diagnostics) {
                options.language_standard = standard;
            }
        }
        "--build-type" => {
            if let Some(build_type) = enum_value::<BuildType>(token, cursor, diagnostics) {
                options.build_type = build_type;
            }
        }
        "--network-lib" => {
            if let Some(library) = string_value(token, cursor, diagnostics) {
                options.network_library = Some(library);
            }
        }
        _ => return false,
    }
    true
}

fn match_testing(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    match token {
        "--tests" => {
            state.options.include_tests = true;
            if let Some(raw) = cursor.take_value() {
                if let Some(framework) = lookup::<TestFramework>(token, &raw, &mut state.diagnostics) {
                    state.options.test_framework = framework;
                }
            }
        }
        "--test-framework" => {
            if let Some(framework) = enum_value::<TestFramework>(token, cursor, &mut state.diagnostics) {
                state.options.test_framework = framework;
            }
        }
        _ => return false,
    }
    true
}

fn match_dev_tools(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "--docs" | "--documentation" => options.include_documentation = true,
        "--code-style" => options.include_code_style_tools = true,
        "--editor" => {
            if let Some(editors) = enum_list::<EditorKind>(token, cursor, diagnostics) {
                options.editor_options = editors;
            }
        }
        "--ci" | "--cicd" => {
            if let Some(systems) = enum_list::<CiSystem>(token, cursor, diagnostics) {
                options.ci_options = systems;
            }
        }
        _ => return false,
    }
    true
}

fn match_git(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "--no-git" => options.init_repo = false,
        "--git-workflow" => {
            if let Some(workflow) = enum_value::<GitWorkflow>(token, cursor, diagnostics) {
                options.workflow = workflow;
            }
        }
        "--git-branch-strategy" => {
            if let Some(strategy) = enum_value::<BranchStrategy>(token, cursor, diagnostics) {
                options.branch_strategy = strategy;
            }
        }
        "--git-branches" => {
            if let Some(branches) = list_value(token, cursor, diagnostics) {
                options.branches = branches;
            }
        }
        "--license" => {
            if let Some(license) = enum_value::<LicenseKind>(token, cursor, diagnostics) {
                options.license_kind = license;
            }
        }
        "--git-remote" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.remote_url = Some(value);
            }
        }
        "--git-user" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.user_name = Some(value);
            }
        }
        "--git-email" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.user_email = Some(value);
            }
        }
        "--git-hooks" => options.setup_hooks = true,
        "--no-initial-commit" => options.create_initial_commit = false,
        _ => return false,
    }
    true
}

fn match_documentation(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "--doc-formats" => {
            if let Some(formats) = list_value(token, cursor, diagnostics) {
                options.doc_formats = formats;
            }
        }
        "--doc-types" => {
            if let Some(types) = list_value(token, cursor, diagnostics) {
                options.doc_types = types;
            }
        }
        "--doxygen" => options.generate_doxygen = true,
        "--doxygen-theme" => {
            if let Some(theme) = string_value(token, cursor, diagnostics) {
                options.doxygen_theme = theme;
            }
        }
        "--no-code-examples" => options.include_code_examples = false,
        "--changelog" => options.generate_changelog = true,
        _ => return false,
    }
    true
}

fn match_advanced(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "--gui-frameworks" => {
            if let Some(frameworks) = list_value(token, cursor, diagnostics) {
                options.gui_frameworks = frameworks;
            }
        }
        "--game-frameworks" => {
            if let Some(frameworks) = list_value(token, cursor, diagnostics) {
                options.game_frameworks = frameworks;
            }
        }
        "--graphics-libs" => {
            if let Some(libraries) = list_value(token, cursor, diagnostics) {
                options.graphics_libraries = libraries;
            }
        }
        "--include-shaders" => options.include_shaders = true,
        "--features" => {
            if let Some(features) = list_value(token, cursor, diagnostics) {
                options.extra_features = features;
            }
        }
        "--validate-config" => options.validate_config = true,
        "--no-validate" => options.validate_config = false,
        "--strict-validation" => options.strict_validation = true,
        _ => return false,
    }
    true
}

fn match_remote_source(token: &str, cursor: &mut Cursor, state: &mut ParseState) -> bool {
    let options = &mut state.options;
    let diagnostics = &mut state.diagnostics;
    match token {
        "--from-git" | "--git-repo" => {
            if let Some(url) = string_value(token, cursor, diagnostics) {
                options.git_repository_url = Some(url);
                options.source_type = SourceType::GitRepository;
            }
        }
        "--from-archive" | "--archive" => {
            if let Some(source) = string_value(token, cursor, diagnostics) {
                match ArchiveLocation::classify(&source) {
                    ArchiveLocation::Remote(url) => options.archive_url = Some(url),
                    ArchiveLocation::Local(path) => options.archive_path = Some(path),
                }
                options.source_type = SourceType::Archive;
            }
        }
        "--branch" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.git_branch = Some(value);
            }
        }
        "--tag" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.git_tag = Some(value);
            }
        }
        "--commit" => {
            if let Some(value) = string_value(token, cursor, diagnostics) {
                options.git_commit = Some(value);
            }
        }
        "--shallow" => options.shallow_clone = true,
        "--no-shallow" => options.shallow_clone = false,
        "--preserve-git" => options.preserve_git_history = true,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_not_taken_from_a_following_flag() {
        let parsed = parse(&["create", "demo", "--build", "--tests"]);
        assert_eq!(parsed.options.build_system, BuildSystem::CMake);
        assert!(parsed.options.include_tests);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::MissingValue { flag: "--build".to_string() }]
        );
    }

    #[test]
    fn command_aliases_resolve_to_the_same_command() {
        assert_eq!(Command::from_token("new"), Some(Command::Create));
        assert_eq!(Command::from_token("profiles"), Some(Command::ListProfiles));
        assert_eq!(Command::from_token("profile-info"), Some(Command::ShowProfile));
        assert_eq!(Command::from_token("generate"), None);
    }
}
