//! Template skeleton model: the directories and files a project kind starts from.

use crate::error::{Error, Result};
use crate::options::Options;
use indexmap::IndexSet;
use std::fmt;

/// Extra selection rule evaluated against the resolved options.
pub type FilePredicate = fn(&Options) -> bool;

/// A file of a skeleton, before placeholder substitution.
#[derive(Clone)]
pub struct TemplateFile {
    /// Path relative to the project root, may contain placeholders
    pub path: String,
    pub content: String,
    /// Bytes copied unchanged instead of rendering `content`
    pub binary: Option<Vec<u8>>,
    pub optional: bool,
    pub executable: bool,
    /// Every listed feature must be enabled for the file to be generated
    pub required_features: Vec<String>,
    pub predicate: Option<FilePredicate>,
}

impl fmt::Debug for TemplateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFile")
            .field("path", &self.path)
            .field("binary", &self.binary.as_ref().map(Vec::len))
            .field("optional", &self.optional)
            .field("executable", &self.executable)
            .field("required_features", &self.required_features)
            .field("predicate", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

impl TemplateFile {
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            binary: None,
            optional: false,
            executable: false,
            required_features: Vec::new(),
            predicate: None,
        }
    }

    /// A file whose bytes are not text, written as is.
    pub fn from_bytes<P: Into<String>>(path: P, bytes: Vec<u8>) -> Self {
        Self { binary: Some(bytes), ..Self::new(path, "") }
    }

    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn as_executable(mut self) -> Self {
        self.executable = true;
        self
    }

    /// Adds `feature` to the features this file needs.
    pub fn requires<S: Into<String>>(mut self, feature: S) -> Self {
        self.required_features.push(feature.into());
        self
    }

    pub fn when(mut self, predicate: FilePredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// A file without features or predicate is always generated.
    pub fn is_mandatory(&self) -> bool {
        self.required_features.is_empty() && self.predicate.is_none()
    }

    /// All required features are enabled and the predicate, if any, holds.
    pub fn is_selected(&self, features: &IndexSet<String>, options: &Options) -> bool {
        self.required_features.iter().all(|feature| features.contains(feature))
            && self.predicate.is_none_or(|predicate| predicate(options))
    }
}

/// Directories, files and features of one project kind.
#[derive(Debug, Clone, Default)]
pub struct TemplateSkeleton {
    pub directories: Vec<String>,
    pub files: Vec<TemplateFile>,
    pub available_features: Vec<String>,
    pub default_features: Vec<String>,
}

impl TemplateSkeleton {
    /// Verifies that every default feature is also an available feature.
    ///
    /// # Errors
    /// * `Error::TemplateError` naming the first default feature that is not available
    pub fn check(&self) -> Result<()> {
        match self
            .default_features
            .iter()
            .find(|feature| !self.available_features.contains(feature))
        {
            Some(feature) => Err(Error::TemplateError(format!(
                "default feature '{feature}' is not in the available features"
            ))),
            None => Ok(()),
        }
    }
}

/// A file after customization, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: String,
    pub content: String,
    pub binary: Option<Vec<u8>>,
    pub executable: bool,
}

impl ResolvedFile {
    /// What ends up on disk: the binary payload if any, the rendered text otherwise.
    pub fn bytes(&self) -> &[u8] {
        self.binary.as_deref().unwrap_or(self.content.as_bytes())
    }
}
