//! Named configuration presets and their merge with command-line overrides.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::tags::{BuildSystem, CiSystem, PackageManager, TemplateKind, TestFramework};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Shipped with the tool rather than imported from a file
    #[serde(skip)]
    pub builtin: bool,
}

fn default_author() -> String {
    "unknown".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// A named preset of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub metadata: ProfileMetadata,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub recommended_dependencies: Vec<String>,
    #[serde(default)]
    pub setup_instructions: Option<String>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let metadata = &self.metadata;
        metadata.name.to_lowercase().contains(&query)
            || metadata.description.to_lowercase().contains(&query)
            || metadata.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Result of [`ProfileStore::apply_profile`]: the merged options and any warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOutcome {
    pub options: Options,
    pub warnings: Vec<String>,
}

/// A profile file holds either one profile or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileDocument {
    Many(Vec<Profile>),
    One(Box<Profile>),
}

impl ProfileDocument {
    fn into_profiles(self) -> Vec<Profile> {
        match self {
            ProfileDocument::Many(profiles) => profiles,
            ProfileDocument::One(profile) => vec![*profile],
        }
    }
}

/// Registry of profiles keyed by name, plus a usage counter per requested name.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: IndexMap<String, Profile>,
    usage: IndexMap<String, u64>,
}

impl ProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the profiles shipped with the tool.
    pub fn with_builtins() -> Self {
        let mut store = Self::new();
        for profile in builtin_profiles() {
            store.profiles.insert(profile.metadata.name.clone(), profile);
        }
        store
    }

    /// Registers a profile.
    ///
    /// # Errors
    /// * `Error::ProfileError` if the name is empty or already registered
    pub fn register(&mut self, profile: Profile) -> Result<()> {
        let name = profile.metadata.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::ProfileError("profile name cannot be empty".to_string()));
        }
        if self.profiles.contains_key(&name) {
            return Err(Error::ProfileError(format!("profile '{name}' is already registered")));
        }
        debug!("Registering profile '{name}'");
        self.profiles.insert(name, profile);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted names of the profiles in `category`, compared case-insensitively.
    pub fn names_by_category(&self, category: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .profiles
            .values()
            .filter(|profile| profile.metadata.category.eq_ignore_ascii_case(category))
            .map(Profile::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Profile metadata grouped by category; categories and members sorted by name.
    pub fn by_category(&self) -> IndexMap<&str, Vec<&ProfileMetadata>> {
        let mut groups: IndexMap<&str, Vec<&ProfileMetadata>> = IndexMap::new();
        for profile in self.profiles.values() {
            groups.entry(profile.metadata.category.as_str()).or_default().push(&profile.metadata);
        }
        groups.sort_keys();
        for members in groups.values_mut() {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }
        groups
    }

    /// Sorted names of profiles whose name, description or tags contain `query`.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .profiles
            .values()
            .filter(|profile| profile.matches(query))
            .map(Profile::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Merges the profile `name` with command-line `overrides`.
    ///
    /// The merge is a coarse field-level override: the profile's options are the base, a
    /// non-empty project name from `overrides` wins, and non-empty editor or CI lists from
    /// `overrides` replace the profile's lists. Everything else keeps the profile's value.
    ///
    /// When `name` is unknown, `overrides` is returned unchanged with a single warning.
    /// The usage counter of `name` is incremented on every call.
    pub fn apply_profile(&mut self, name: &str, overrides: Options) -> ProfileOutcome {
        *self.usage.entry(name.to_string()).or_insert(0) += 1;

        let Some(profile) = self.profiles.get(name) else {
            let warning = format!("Profile '{name}' not found, using the given options unchanged");
            warn!("{warning}");
            return ProfileOutcome { options: overrides, warnings: vec![warning] };
        };

        debug!("Applying profile '{name}'");
        let mut options = profile.options.clone();
        if !overrides.project_name.is_empty() {
            options.project_name = overrides.project_name;
        }
        if !overrides.editor_options.is_empty() {
            options.editor_options = overrides.editor_options;
        }
        if !overrides.ci_options.is_empty() {
            options.ci_options = overrides.ci_options;
        }
        options.profile_name = Some(name.to_string());

        ProfileOutcome { options, warnings: Vec::new() }
    }

    /// Number of times `name` was requested through [`ProfileStore::apply_profile`].
    pub fn usage(&self, name: &str) -> u64 {
        self.usage.get(name).copied().unwrap_or(0)
    }

    /// Usage counters, most used first.
    pub fn usage_stats(&self) -> Vec<(&str, u64)> {
        let mut stats: Vec<(&str, u64)> =
            self.usage.iter().map(|(name, count)| (name.as_str(), *count)).collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stats
    }

    /// Registers the profiles found in `content`, JSON first and YAML as a fallback.
    ///
    /// # Returns
    /// * Names of the imported profiles, in document order
    ///
    /// # Errors
    /// * `Error::ProfileError` if the content is neither valid JSON nor YAML, or a name clashes
    pub fn import_str(&mut self, content: &str) -> Result<Vec<String>> {
        let document: ProfileDocument = match serde_json::from_str(content) {
            Ok(document) => document,
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::ProfileError(format!("invalid profile document: {e}")))?,
        };

        let mut imported = Vec::new();
        for mut profile in document.into_profiles() {
            profile.metadata.builtin = false;
            imported.push(profile.metadata.name.clone());
            self.register(profile)?;
        }
        Ok(imported)
    }

    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        debug!("Importing profiles from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.import_str(&content)
    }

    /// Serializes the profile `name` as YAML.
    pub fn export(&self, name: &str) -> Result<String> {
        let profile = self
            .get(name)
            .ok_or_else(|| Error::ProfileError(format!("profile '{name}' not found")))?;
        Ok(serde_yaml::to_string(profile)?)
    }
}

fn builtin(
    name: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    options: Options,
    dependencies: &[&str],
    setup: &str,
) -> Profile {
    Profile {
        metadata: ProfileMetadata {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            author: "CPP-Scaffold Team".to_string(),
            version: default_version(),
            builtin: true,
        },
        options,
        recommended_dependencies: dependencies.iter().map(|dep| dep.to_string()).collect(),
        setup_instructions: Some(setup.to_string()),
    }
}

fn builtin_profiles() -> Vec<Profile> {
    vec![
        builtin(
            "rest-api",
            "REST API server with JSON handling and a SQL database",
            "Web Development",
            &["web", "api", "rest", "http", "json"],
            Options {
                template_kind: TemplateKind::WebService,
                build_system: BuildSystem::CMake,
                package_manager: PackageManager::Vcpkg,
                include_tests: true,
                test_framework: TestFramework::GTest,
                include_documentation: true,
                include_code_style_tools: true,
                ..Options::default()
            },
            &["nlohmann-json", "spdlog", "fmt", "httplib", "sqlite3"],
            "Run `vcpkg install` before configuring, then start the server from build/.",
        ),
        builtin(
            "microservice",
            "Containerized microservice with metrics and CI pipelines",
            "Web Development",
            &["web", "microservice", "docker", "cloud"],
            Options {
                template_kind: TemplateKind::WebService,
                package_manager: PackageManager::Conan,
                include_tests: true,
                test_framework: TestFramework::Catch2,
                include_documentation: true,
                ci_options: vec![CiSystem::GitHub, CiSystem::GitLab],
                ..Options::default()
            },
            &["boost", "nlohmann-json", "spdlog", "prometheus-cpp"],
            "Run `conan install . --build=missing` and build the docker image from docker/.",
        ),
        builtin(
            "game-engine",
            "Game engine with rendering, asset pipeline and shaders",
            "Game Development",
            &["game", "graphics", "opengl", "vulkan"],
            Options {
                template_kind: TemplateKind::GameEngine,
                package_manager: PackageManager::Vcpkg,
                include_tests: true,
                test_framework: TestFramework::GTest,
                graphics_libraries: vec!["opengl".to_string()],
                include_shaders: true,
                ..Options::default()
            },
            &["glfw3", "glm", "assimp", "opengl", "vulkan"],
            "Install GPU drivers with OpenGL 3.3 or newer; shaders live in shaders/.",
        ),
        builtin(
            "iot-device",
            "Firmware for a connected embedded device",
            "Embedded Systems",
            &["embedded", "iot", "firmware", "rtos"],
            Options {
                template_kind: TemplateKind::Embedded,
                package_manager: PackageManager::None,
                include_tests: true,
                test_framework: TestFramework::GTest,
                ..Options::default()
            },
            &["freertos", "lwip", "mbedtls"],
            "Configure the cross toolchain file in cmake/ before the first build.",
        ),
        builtin(
            "header-only-lib",
            "Header-only library ready for distribution",
            "Libraries",
            &["library", "header-only", "templates"],
            Options {
                template_kind: TemplateKind::HeaderOnlyLib,
                package_manager: PackageManager::Vcpkg,
                include_tests: true,
                test_framework: TestFramework::Catch2,
                include_documentation: true,
                include_code_style_tools: true,
                ..Options::default()
            },
            &[],
            "Add the include/ directory to your include path; no build step is needed.",
        ),
        builtin(
            "research",
            "Numerical research project with plotting and data input",
            "Research & Academic",
            &["research", "science", "numerics", "academic"],
            Options {
                template_kind: TemplateKind::Console,
                package_manager: PackageManager::Vcpkg,
                include_tests: true,
                include_documentation: true,
                ..Options::default()
            },
            &["eigen3", "boost", "matplotlib-cpp", "csv-parser"],
            "Python 3 with matplotlib is required for plotting.",
        ),
        builtin(
            "enterprise",
            "Enterprise application with RPC, storage and full CI",
            "Enterprise",
            &["enterprise", "grpc", "database", "production"],
            Options {
                template_kind: TemplateKind::Console,
                package_manager: PackageManager::Conan,
                include_tests: true,
                test_framework: TestFramework::GTest,
                include_documentation: true,
                include_code_style_tools: true,
                ci_options: vec![CiSystem::GitHub, CiSystem::GitLab],
                ..Options::default()
            },
            &["boost", "protobuf", "grpc", "redis-plus-plus", "postgresql"],
            "Run `conan install . --build=missing`; a PostgreSQL instance is expected for tests.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_are_consistent() {
        let store = ProfileStore::with_builtins();
        assert_eq!(store.len(), 7);
        for name in store.names() {
            let profile = store.get(name).unwrap();
            assert!(profile.metadata.builtin);
            assert!(!profile.metadata.category.is_empty());
        }
    }

    #[test]
    fn usage_stats_are_sorted_by_count() {
        let mut store = ProfileStore::with_builtins();
        store.apply_profile("research", Options::default());
        store.apply_profile("rest-api", Options::default());
        store.apply_profile("rest-api", Options::default());
        assert_eq!(store.usage_stats(), vec![("rest-api", 2), ("research", 1)]);
    }
}
