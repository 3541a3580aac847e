//! Common constants used throughout cpp-scaffold.

pub const APP_NAME: &str = "cpp-scaffold";

pub const APP_VERSION: &str = "1.2.0";

/// Supported tool configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["cpp-scaffold.json", "cpp-scaffold.yml", "cpp-scaffold.yaml"];

/// Manifest file names recognized at the root of a custom template directory
pub const MANIFEST_FILES: [&str; 3] = ["template.json", "template.yml", "template.yaml"];

/// Ignore file name for custom template directories
pub const IGNORE_FILE: &str = ".scaffoldignore";

/// Patterns always skipped when walking a custom template directory
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.git/**", "**/.DS_Store", ".scaffoldignore"];

pub const DEFAULT_DESCRIPTION: &str = "A C++ project created with cpp-scaffold";

pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";

pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";

pub const DEFAULT_CMAKE_MINIMUM_VERSION: &str = "3.16";

pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

pub const MAX_GIT_USER_NAME_LENGTH: usize = 100;

/// Names a project cannot take, compared case-insensitively
pub const RESERVED_NAMES: &[&str] = &[
    "main", "test", "src", "include", "lib", "bin", "build", "cmake", "makefile", "readme",
    "license", "copyright", "version", "config", "con", "prn", "aux", "nul", "com1", "com2",
    "com3", "com4", "com5", "com6", "com7", "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4",
    "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Placeholder values treated as false by conditional blocks
pub const FALSY_VALUES: [&str; 3] = ["false", "0", "OFF"];

pub const PLACEHOLDER_OPEN: &str = "{{";
pub const PLACEHOLDER_CLOSE: &str = "}}";
pub const CONDITIONAL_OPEN: &str = "{{#IF";
pub const CONDITIONAL_CLOSE: &str = "{{/IF}}";

pub const KNOWN_DOC_FORMATS: [&str; 4] = ["markdown", "html", "pdf", "latex"];

pub const KNOWN_DOC_TYPES: [&str; 5] = ["readme", "api", "user", "developer", "tutorial"];

pub const KNOWN_NETWORK_LIBRARIES: [&str; 3] = ["asio", "boost", "poco"];

pub const GUI_FRAMEWORK_CHOICES: [&str; 5] = ["qt", "gtk", "wxwidgets", "fltk", "imgui"];
