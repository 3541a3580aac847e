//! Closed enumerations used by the option model.
//!
//! Every enumerated concept has exactly one bidirectional string table, produced by the
//! `closed_tags!` macro. Parsing, serialization, help output and validation messages all
//! read from that table, so a tag can never be spelled two ways.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A closed set of values with canonical string tags.
pub trait Tag: Sized + Copy + 'static {
    /// Every value, in table order
    const ALL: &'static [Self];

    /// Human readable name of the concept, used in diagnostics
    const KIND: &'static str;

    /// Canonical tag of this value
    fn as_str(&self) -> &'static str;

    /// Alternative spellings accepted on input
    fn aliases(&self) -> &'static [&'static str];

    /// Looks a value up by tag or alias, ignoring ASCII case and surrounding whitespace.
    fn from_tag(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL.iter().copied().find(|value| {
            value.as_str().eq_ignore_ascii_case(needle)
                || value.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(needle))
        })
    }

    /// Canonical tags in table order.
    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

/// Returned when a string is not in a tag table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {})", .expected.join(", "))]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

impl UnknownTag {
    pub fn of<T: Tag>(value: &str) -> Self {
        Self { kind: T::KIND, value: value.to_string(), expected: T::tags() }
    }
}

/// Declares a closed enum together with its tag table and the trait impls built on it.
macro_rules! closed_tags {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $tag:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Tag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const KIND: &'static str = $kind;

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($alias),*]),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Tag>::from_tag(s).ok_or_else(|| UnknownTag::of::<Self>(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

closed_tags! {
    /// Kind of project skeleton to generate.
    #[derive(Default)]
    TemplateKind ("template") {
        #[default]
        Console => "console",
        Lib => "lib" | "library",
        HeaderOnlyLib => "header-only-lib" | "header-only",
        MultiExecutable => "multi-executable",
        Gui => "gui",
        Network => "network",
        Embedded => "embedded",
        WebService => "webservice" | "web-service",
        GameEngine => "gameengine" | "game-engine",
        QtApp => "qt-app",
        SfmlApp => "sfml-app",
        BoostApp => "boost-app",
        TestProject => "test-project",
    }
}

closed_tags! {
    #[derive(Default)]
    BuildSystem ("build system") {
        #[default]
        CMake => "cmake",
        Meson => "meson",
        Bazel => "bazel",
        XMake => "xmake",
        Premake => "premake",
        Make => "make",
        Ninja => "ninja",
    }
}

closed_tags! {
    #[derive(Default)]
    PackageManager ("package manager") {
        #[default]
        Vcpkg => "vcpkg",
        Conan => "conan",
        None => "none",
        Spack => "spack",
        Hunter => "hunter",
        Cpm => "cpm",
        FetchContent => "fetchcontent" | "fetch-content",
    }
}

closed_tags! {
    #[derive(Default)]
    TestFramework ("test framework") {
        #[default]
        GTest => "gtest" | "googletest",
        Catch2 => "catch2",
        Doctest => "doctest",
        Boost => "boost",
        None => "none",
    }
}

closed_tags! {
    EditorKind ("editor") {
        VsCode => "vscode",
        CLion => "clion",
        VisualStudio => "vs" | "visual-studio",
        Vim => "vim",
        Emacs => "emacs",
        Sublime => "sublime",
    }
}

closed_tags! {
    CiSystem ("CI system") {
        GitHub => "github",
        GitLab => "gitlab",
        Travis => "travis",
        AppVeyor => "appveyor",
        Azure => "azure",
        CircleCi => "circleci",
    }
}

closed_tags! {
    /// Language of the tool's own messages.
    #[derive(Default)]
    Language ("language") {
        #[default]
        English => "en",
        Chinese => "zh",
        Spanish => "es",
        Japanese => "jp",
        German => "de",
        French => "fr",
    }
}

closed_tags! {
    #[derive(Default)]
    LanguageStandard ("C++ standard") {
        Cpp11 => "c++11" | "cpp11" | "11",
        Cpp14 => "c++14" | "cpp14" | "14",
        #[default]
        Cpp17 => "c++17" | "cpp17" | "17",
        Cpp20 => "c++20" | "cpp20" | "20",
        Cpp23 => "c++23" | "cpp23" | "23",
        Latest => "latest",
    }
}

impl LanguageStandard {
    /// Numeric form used by build scripts, `latest` maps to the newest known standard.
    pub fn number(&self) -> &'static str {
        match self {
            Self::Cpp11 => "11",
            Self::Cpp14 => "14",
            Self::Cpp17 => "17",
            Self::Cpp20 => "20",
            Self::Cpp23 | Self::Latest => "23",
        }
    }
}

closed_tags! {
    #[derive(Default)]
    ProjectStructure ("project structure") {
        Minimal => "minimal",
        #[default]
        Standard => "standard",
        Advanced => "advanced",
        Custom => "custom",
    }
}

closed_tags! {
    #[derive(Default)]
    BuildType ("build type") {
        Debug => "debug",
        #[default]
        Release => "release",
        RelWithDebInfo => "relwithdebinfo",
        MinSizeRel => "minsizerel",
    }
}

impl BuildType {
    /// Spelling expected by CMake's `CMAKE_BUILD_TYPE`.
    pub fn cmake_name(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
            Self::RelWithDebInfo => "RelWithDebInfo",
            Self::MinSizeRel => "MinSizeRel",
        }
    }
}

closed_tags! {
    #[derive(Default)]
    GitWorkflow ("git workflow") {
        #[default]
        None => "none",
        GitFlow => "gitflow",
        GitHubFlow => "github-flow",
        GitLabFlow => "gitlab-flow",
        Custom => "custom",
    }
}

closed_tags! {
    #[derive(Default)]
    BranchStrategy ("branch strategy") {
        #[default]
        SingleBranch => "single",
        FeatureBranches => "feature",
        GitFlow => "gitflow",
        Custom => "custom",
    }
}

closed_tags! {
    #[derive(Default)]
    LicenseKind ("license") {
        #[default]
        Mit => "mit",
        Apache2 => "apache2" | "apache-2.0",
        Gpl3 => "gpl3" | "gpl-3.0",
        Bsd3 => "bsd3",
        Bsd2 => "bsd2",
        Unlicense => "unlicense",
        Custom => "custom",
        None => "none",
    }
}

closed_tags! {
    /// Where the template comes from.
    #[derive(Default)]
    SourceType ("template source") {
        #[default]
        Template => "template" | "builtin",
        GitRepository => "git-repository" | "git",
        Archive => "archive",
        LocalPath => "local-path" | "local",
    }
}

closed_tags! {
    /// Vetted keys accepted by `--set key=value`.
    ExtensionKey ("extension key") {
        CustomDirectories => "custom-directories" | "custom_directories",
        CustomFiles => "custom-files" | "custom_files",
        CMakeMinimumVersion => "cmake-minimum-version" | "cmake_minimum_version",
    }
}
