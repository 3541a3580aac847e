//! Registry of template skeletons keyed by template kind.

use crate::catalog;
use crate::error::{Error, Result};
use crate::tags::{Tag, TemplateKind};
use crate::template::TemplateSkeleton;
use indexmap::IndexMap;
use log::debug;

/// Skeletons available to the customization engine.
///
/// The registry is built once by the caller and passed down; nothing in the crate keeps a
/// global instance.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    skeletons: IndexMap<TemplateKind, TemplateSkeleton>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in skeleton of every template kind.
    pub fn with_builtins() -> Self {
        let skeletons = TemplateKind::ALL.iter().map(|kind| (*kind, catalog::skeleton(*kind))).collect();
        Self { skeletons }
    }

    /// Registers `skeleton` for `kind`, replacing any previous one.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a default feature is not an available feature
    pub fn register(&mut self, kind: TemplateKind, skeleton: TemplateSkeleton) -> Result<()> {
        skeleton
            .check()
            .map_err(|e| Error::TemplateError(format!("skeleton for '{kind}' rejected: {e}")))?;
        debug!("Registering skeleton for '{kind}'");
        self.skeletons.insert(kind, skeleton);
        Ok(())
    }

    pub fn get(&self, kind: TemplateKind) -> Option<&TemplateSkeleton> {
        self.skeletons.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = TemplateKind> + '_ {
        self.skeletons.keys().copied()
    }
}

/// One-line description of a template kind, used by `list-templates`.
pub fn describe(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Console => "Command-line application",
        TemplateKind::Lib => "Static or shared library",
        TemplateKind::HeaderOnlyLib => "Header-only library",
        TemplateKind::MultiExecutable => "Several executables sharing a core library",
        TemplateKind::Gui => "Desktop GUI application",
        TemplateKind::Network => "Network client/server application",
        TemplateKind::Embedded => "Embedded firmware",
        TemplateKind::WebService => "Web service with REST endpoints",
        TemplateKind::GameEngine => "Game engine with rendering and assets",
        TemplateKind::QtApp => "Qt application",
        TemplateKind::SfmlApp => "SFML game or multimedia application",
        TemplateKind::BoostApp => "Application built on Boost libraries",
        TemplateKind::TestProject => "Library with an emphasis on testing",
    }
}

/// Directory list used by the `minimal` project structure.
pub fn minimal_directories(kind: TemplateKind) -> &'static [&'static str] {
    match kind {
        TemplateKind::Console
        | TemplateKind::Gui
        | TemplateKind::Network
        | TemplateKind::WebService
        | TemplateKind::GameEngine => &["src", "include"],
        TemplateKind::Lib | TemplateKind::HeaderOnlyLib => &["include", "src"],
        _ => &["src"],
    }
}

/// Directory list used by the `advanced` project structure.
pub fn advanced_directories(kind: TemplateKind) -> &'static [&'static str] {
    match kind {
        TemplateKind::Console => &["src", "include", "tests", "docs", "examples", "scripts", "cmake"],
        TemplateKind::Lib => {
            &["include", "src", "tests", "docs", "examples", "benchmarks", "cmake", "tools"]
        }
        TemplateKind::HeaderOnlyLib => {
            &["include", "tests", "docs", "examples", "cmake", "single_include"]
        }
        TemplateKind::Gui => &["src", "include", "resources", "assets", "tests", "docs", "cmake"],
        TemplateKind::Network => &["src", "include", "tests", "examples", "docs", "cmake", "configs"],
        TemplateKind::WebService => {
            &["src", "include", "tests", "docs", "docker", "configs", "migrations", "cmake"]
        }
        TemplateKind::GameEngine => {
            &["src", "include", "assets", "shaders", "tests", "examples", "docs", "tools", "cmake"]
        }
        _ => &["src", "include", "tests", "docs", "cmake"],
    }
}
