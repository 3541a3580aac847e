//! Loader for custom templates kept in a local directory.

use crate::constants::{IGNORE_FILE, MANIFEST_FILES};
use crate::error::{Error, Result};
use crate::ignore::parse_ignore_file;
use crate::loader::TemplateLoader;
use crate::template::{TemplateFile, TemplateSkeleton};
use globset::GlobSet;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Selection rule for one file of a custom template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRule {
    pub required_features: Vec<String>,
    pub optional: bool,
    pub executable: bool,
}

/// Optional `template.json` / `template.yml` at the root of a custom template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to create; when absent, the directories found on disk are used
    pub directories: Option<Vec<String>>,
    pub available_features: Vec<String>,
    pub default_features: Vec<String>,
    /// Rules keyed by path relative to the template root
    pub files: IndexMap<String, FileRule>,
}

impl Manifest {
    /// Parses a manifest, trying JSON first and YAML second.
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(manifest) => Ok(manifest),
            Err(json_error) => serde_yaml::from_str(content).map_err(|yaml_error| {
                Error::TemplateError(format!(
                    "invalid template manifest (JSON: {json_error}; YAML: {yaml_error})"
                ))
            }),
        }
    }

    /// Reads the first manifest file present in `root`, if any.
    pub fn find<P: AsRef<Path>>(root: P) -> Result<Option<(String, Self)>> {
        for file in MANIFEST_FILES {
            let path = root.as_ref().join(file);
            if path.is_file() {
                debug!("Loading template manifest from {}", path.display());
                let content = fs::read_to_string(&path)?;
                return Ok(Some((file.to_string(), Self::parse(&content)?)));
            }
        }
        Ok(None)
    }
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> =
        relative.components().map(|part| part.as_os_str().to_string_lossy().into_owned()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn is_ignored(ignored: &GlobSet, relative: &str, is_dir: bool) -> bool {
    ignored.is_match(relative) || (is_dir && ignored.is_match(format!("{relative}/")))
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Builds a skeleton from the files of a local template directory.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path doesn't exist
    /// * `Error::TemplateError` if the path is not a directory or the manifest is invalid
    /// * `Error::IgnoreError` if `.scaffoldignore` holds an invalid pattern
    fn load(&self) -> Result<TemplateSkeleton> {
        let root = self.path.as_ref();
        if !root.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }

        let ignored = parse_ignore_file(root.join(IGNORE_FILE))?;
        let (manifest_name, mut manifest) = Manifest::find(root)?.unwrap_or_default();

        let mut directories = Vec::new();
        let mut files = Vec::new();

        let walker = WalkDir::new(root).min_depth(1).sort_by_file_name().into_iter();
        for entry in walker.filter_entry(|entry| {
            relative_path(root, entry.path())
                .is_some_and(|rel| !is_ignored(&ignored, &rel, entry.file_type().is_dir()))
        }) {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            let Some(relative) = relative_path(root, entry.path()) else {
                continue;
            };

            if entry.file_type().is_dir() {
                directories.push(relative);
                continue;
            }
            if relative == manifest_name {
                continue;
            }

            let rule = manifest.files.shift_remove(&relative).unwrap_or_default();
            let mut file = match String::from_utf8(fs::read(entry.path())?) {
                Ok(content) => TemplateFile::new(relative, content),
                Err(e) => {
                    debug!("Copying '{relative}' verbatim: not UTF-8 text");
                    TemplateFile::from_bytes(relative, e.into_bytes())
                }
            };
            file.optional = rule.optional;
            file.executable = rule.executable;
            file.required_features = rule.required_features;
            files.push(file);
        }

        for path in manifest.files.keys() {
            warn!("Manifest rule for '{path}' matches no file");
        }

        let skeleton = TemplateSkeleton {
            directories: manifest.directories.unwrap_or(directories),
            files,
            available_features: manifest.available_features,
            default_features: manifest.default_features,
        };
        skeleton.check()?;

        debug!(
            "Loaded {} files and {} directories from {}",
            skeleton.files.len(),
            skeleton.directories.len(),
            root.display()
        );
        Ok(skeleton)
    }
}
