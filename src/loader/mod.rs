//! Template sources: where the skeleton of a run comes from.
//! Built-in skeletons come from the registry, custom ones from a local directory.
//! Git repositories and archives are recognized but not fetched.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::registry::TemplateRegistry;
use crate::tags::{SourceType, TemplateKind};
use crate::template::TemplateSkeleton;
use log::debug;
use std::path::PathBuf;
use url::Url;

pub mod local;

pub use local::{FileRule, LocalLoader, Manifest};

/// Location of a template archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveLocation {
    /// Archive reachable over http, https or ftp
    Remote(String),
    /// Archive on the local filesystem
    Local(PathBuf),
}

impl ArchiveLocation {
    /// Classifies an archive argument as a remote URL or a local path.
    pub fn classify(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https" | "ftp") => {
                Self::Remote(source.to_string())
            }
            _ => Self::Local(PathBuf::from(source)),
        }
    }
}

/// Represents the source location of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Skeleton shipped with the tool
    Builtin(TemplateKind),
    /// Local filesystem template path
    LocalPath(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    GitRepository(String),
    Archive(ArchiveLocation),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Builtin(kind) => write!(f, "built-in template: '{kind}'"),
            TemplateSource::LocalPath(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::GitRepository(repo) => write!(f, "git repository: '{repo}'"),
            TemplateSource::Archive(ArchiveLocation::Remote(url)) => {
                write!(f, "remote archive: '{url}'")
            }
            TemplateSource::Archive(ArchiveLocation::Local(path)) => {
                write!(f, "local archive: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Determines the template source selected by `options`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the source type needs a location that was not given
    pub fn from_options(options: &Options) -> Result<Self> {
        let missing = |what: &str| {
            Error::ConfigError(format!("template source '{}' needs {what}", options.source_type))
        };

        match options.source_type {
            SourceType::Template => match &options.custom_template_path {
                Some(path) => Ok(Self::LocalPath(path.clone())),
                None => Ok(Self::Builtin(options.template_kind)),
            },
            SourceType::LocalPath => options
                .custom_template_path
                .clone()
                .map(Self::LocalPath)
                .ok_or_else(|| missing("a path (--template-path)")),
            SourceType::GitRepository => options
                .git_repository_url
                .clone()
                .map(Self::GitRepository)
                .ok_or_else(|| missing("a repository URL (--from-git)")),
            SourceType::Archive => {
                if let Some(url) = &options.archive_url {
                    Ok(Self::Archive(ArchiveLocation::Remote(url.clone())))
                } else if let Some(path) = &options.archive_path {
                    Ok(Self::Archive(ArchiveLocation::Local(path.clone())))
                } else {
                    Err(missing("an archive location (--archive)"))
                }
            }
        }
    }
}

/// Trait for loading template skeletons from different sources.
pub trait TemplateLoader {
    /// Loads the skeleton.
    ///
    /// # Returns
    /// * `Result<TemplateSkeleton>` - Directories, files and features of the template
    fn load(&self) -> Result<TemplateSkeleton>;
}

/// Returns the skeleton for `source`.
///
/// # Errors
/// * `Error::TemplateError` if no built-in skeleton is registered for the kind
/// * `Error::UnsupportedSourceError` for git repositories and archives
/// * Any error of [`LocalLoader::load`]
pub fn load_skeleton(source: &TemplateSource, registry: &TemplateRegistry) -> Result<TemplateSkeleton> {
    debug!("Loading template from the {source}");
    match source {
        TemplateSource::Builtin(kind) => registry
            .get(*kind)
            .cloned()
            .ok_or_else(|| Error::TemplateError(format!("no skeleton registered for '{kind}'"))),
        TemplateSource::LocalPath(path) => LocalLoader::new(path).load(),
        TemplateSource::GitRepository(_) | TemplateSource::Archive(_) => {
            Err(Error::UnsupportedSourceError { source_kind: source.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_display() {
        let fs_source = TemplateSource::LocalPath(PathBuf::from("/path/to/template"));
        assert_eq!(format!("{}", fs_source), "local path: '/path/to/template'");

        let git_source = TemplateSource::GitRepository("git@github.com:user/repo".to_string());
        assert_eq!(
            format!("{}", git_source),
            "git repository: 'git@github.com:user/repo'"
        );

        let builtin = TemplateSource::Builtin(TemplateKind::Lib);
        assert_eq!(format!("{}", builtin), "built-in template: 'lib'");
    }

    #[test]
    fn test_archive_classification() {
        assert_eq!(
            ArchiveLocation::classify("https://example.com/t.zip"),
            ArchiveLocation::Remote("https://example.com/t.zip".to_string())
        );
        assert_eq!(
            ArchiveLocation::classify("ftp://mirror.example.com/t.tar.gz"),
            ArchiveLocation::Remote("ftp://mirror.example.com/t.tar.gz".to_string())
        );
        assert_eq!(
            ArchiveLocation::classify("templates/t.zip"),
            ArchiveLocation::Local(PathBuf::from("templates/t.zip"))
        );
        assert_eq!(
            ArchiveLocation::classify("file:///tmp/t.zip"),
            ArchiveLocation::Local(PathBuf::from("file:///tmp/t.zip"))
        );
    }

    #[test]
    fn test_source_from_options() {
        let options = Options::default();
        assert_eq!(
            TemplateSource::from_options(&options).unwrap(),
            TemplateSource::Builtin(TemplateKind::Console)
        );

        let options = Options { source_type: SourceType::GitRepository, ..Options::default() };
        assert!(matches!(TemplateSource::from_options(&options), Err(Error::ConfigError(_))));
    }
}
