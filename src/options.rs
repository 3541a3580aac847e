//! The option model: one flat record describing everything a generation run needs.
//!
//! Every field has a fixed default, so a partially filled configuration file, profile or
//! command line always yields a complete model.

use crate::tags::{
    BranchStrategy, BuildSystem, BuildType, CiSystem, EditorKind, ExtensionKey, GitWorkflow,
    Language, LanguageStandard, LicenseKind, PackageManager, ProjectStructure, SourceType,
    TemplateKind, TestFramework,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Values attached to the closed set of extension keys (`--set key=value`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(IndexMap<ExtensionKey, String>);

impl Extensions {
    pub fn get(&self, key: ExtensionKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn set<S: Into<String>>(&mut self, key: ExtensionKey, value: S) {
        self.0.insert(key, value.into());
    }

    /// Comma separated value of `key`, trimmed, empty items dropped.
    pub fn list(&self, key: ExtensionKey) -> Option<Vec<String>> {
        self.get(key).map(split_list)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExtensionKey, &String)> {
        self.0.iter()
    }
}

/// Splits a comma separated list, trimming whitespace and dropping empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(String::from).collect()
}

/// The resolved configuration of a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub project_name: String,
    pub description: Option<String>,

    pub template_kind: TemplateKind,
    pub build_system: BuildSystem,
    pub package_manager: PackageManager,
    pub language_standard: LanguageStandard,
    pub build_type: BuildType,
    pub project_structure: ProjectStructure,
    pub network_library: Option<String>,

    pub include_tests: bool,
    pub test_framework: TestFramework,
    pub include_documentation: bool,
    pub doc_formats: Vec<String>,
    pub doc_types: Vec<String>,
    pub generate_doxygen: bool,
    pub doxygen_theme: String,
    pub include_code_examples: bool,
    pub generate_changelog: bool,
    pub include_code_style_tools: bool,
    /// Template features requested explicitly with `--features`
    pub extra_features: Vec<String>,

    pub editor_options: Vec<EditorKind>,
    pub ci_options: Vec<CiSystem>,

    pub gui_frameworks: Vec<String>,
    pub game_frameworks: Vec<String>,
    pub graphics_libraries: Vec<String>,
    pub include_shaders: bool,

    pub init_repo: bool,
    pub workflow: GitWorkflow,
    pub branch_strategy: BranchStrategy,
    pub license_kind: LicenseKind,
    pub remote_url: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub create_initial_commit: bool,
    pub setup_hooks: bool,
    /// Extra branches created after the initial commit
    pub branches: Vec<String>,

    pub source_type: SourceType,
    pub git_repository_url: Option<String>,
    pub archive_url: Option<String>,
    pub archive_path: Option<PathBuf>,
    pub git_branch: Option<String>,
    pub git_tag: Option<String>,
    pub git_commit: Option<String>,
    pub shallow_clone: bool,
    pub preserve_git_history: bool,

    pub verbose: bool,
    pub language: Language,
    pub custom_template_path: Option<PathBuf>,
    pub profile_name: Option<String>,
    pub profile_file: Option<PathBuf>,
    pub validate_config: bool,
    pub strict_validation: bool,
    pub output_dir: PathBuf,
    pub force: bool,
    pub dry_run: bool,

    pub extensions: Extensions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            description: None,
            template_kind: TemplateKind::default(),
            build_system: BuildSystem::default(),
            package_manager: PackageManager::default(),
            language_standard: LanguageStandard::default(),
            build_type: BuildType::default(),
            project_structure: ProjectStructure::default(),
            network_library: None,
            include_tests: false,
            test_framework: TestFramework::default(),
            include_documentation: false,
            doc_formats: vec!["markdown".to_string()],
            doc_types: vec!["readme".to_string(), "api".to_string()],
            generate_doxygen: false,
            doxygen_theme: "default".to_string(),
            include_code_examples: true,
            generate_changelog: false,
            include_code_style_tools: false,
            extra_features: Vec::new(),
            editor_options: Vec::new(),
            ci_options: Vec::new(),
            gui_frameworks: Vec::new(),
            game_frameworks: Vec::new(),
            graphics_libraries: Vec::new(),
            include_shaders: false,
            init_repo: true,
            workflow: GitWorkflow::default(),
            branch_strategy: BranchStrategy::default(),
            license_kind: LicenseKind::default(),
            remote_url: None,
            user_name: None,
            user_email: None,
            create_initial_commit: true,
            setup_hooks: false,
            branches: Vec::new(),
            source_type: SourceType::default(),
            git_repository_url: None,
            archive_url: None,
            archive_path: None,
            git_branch: None,
            git_tag: None,
            git_commit: None,
            shallow_clone: true,
            preserve_git_history: false,
            verbose: false,
            language: Language::default(),
            custom_template_path: None,
            profile_name: None,
            profile_file: None,
            validate_config: true,
            strict_validation: false,
            output_dir: PathBuf::from("."),
            force: false,
            dry_run: false,
            extensions: Extensions::default(),
        }
    }
}

impl Options {
    /// Options for `project_name`, everything else at its default.
    pub fn named<S: Into<String>>(project_name: S) -> Self {
        Self { project_name: project_name.into(), ..Self::default() }
    }

    /// Directory the project is generated into: `<output_dir>/<project_name>`.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    /// Tests are requested with a real framework.
    pub fn testing_enabled(&self) -> bool {
        self.include_tests && self.test_framework != TestFramework::None
    }

    pub fn doxygen_enabled(&self) -> bool {
        self.include_documentation && self.generate_doxygen
    }

    pub fn license_enabled(&self) -> bool {
        self.license_kind != LicenseKind::None
    }

    pub fn uses_package_manager(&self) -> bool {
        self.package_manager != PackageManager::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_plain_console_project() {
        let options = Options::default();
        assert_eq!(options.template_kind, TemplateKind::Console);
        assert_eq!(options.build_system, BuildSystem::CMake);
        assert_eq!(options.package_manager, PackageManager::Vcpkg);
        assert_eq!(options.language_standard, LanguageStandard::Cpp17);
        assert!(options.init_repo);
        assert!(options.create_initial_commit);
        assert_eq!(options.doc_types, vec!["readme", "api"]);
    }

    #[test]
    fn partial_yaml_fills_remaining_fields_with_defaults() {
        let options: Options =
            serde_yaml::from_str("project_name: demo\nbuild_system: meson\n").unwrap();
        assert_eq!(options.project_name, "demo");
        assert_eq!(options.build_system, BuildSystem::Meson);
        assert_eq!(options.test_framework, TestFramework::GTest);
    }

    #[test]
    fn extension_lists_are_split_and_trimmed() {
        let mut extensions = Extensions::default();
        extensions.set(ExtensionKey::CustomDirectories, " src, ,include ,docs");
        assert_eq!(
            extensions.list(ExtensionKey::CustomDirectories),
            Some(vec!["src".to_string(), "include".to_string(), "docs".to_string()])
        );
        assert_eq!(extensions.list(ExtensionKey::CustomFiles), None);
    }
}
