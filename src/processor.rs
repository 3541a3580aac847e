//! Template customization: turns a skeleton and resolved options into the concrete
//! directories and files of a project.
//!
//! The engine touches no filesystem and keeps no state between calls; writing the result
//! is left to a [`crate::writer::FileSystemWriter`].

use crate::error::Result;
use crate::options::Options;
use crate::registry::{advanced_directories, minimal_directories};
use crate::renderer::{today, PlaceholderMap, PlaceholderRenderer, TemplateRenderer};
use crate::tags::{ExtensionKey, ProjectStructure, Tag};
use crate::template::{ResolvedFile, TemplateFile, TemplateSkeleton};
use indexmap::IndexSet;
use log::{debug, warn};
use time::Date;

/// Directories and files of a customized project, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizedProject {
    pub directories: Vec<String>,
    pub files: Vec<ResolvedFile>,
    /// Features that were enabled for this run
    pub features: IndexSet<String>,
    /// Placeholder keys referenced by the template but not known to the engine
    pub unresolved: Vec<String>,
}

/// Customizes `skeleton` for `options`, dated today.
pub fn customize(skeleton: &TemplateSkeleton, options: &Options) -> Result<CustomizedProject> {
    customize_on(skeleton, options, today())
}

/// Customizes `skeleton` for `options` with an explicit date for the calendar placeholders.
pub fn customize_on(
    skeleton: &TemplateSkeleton,
    options: &Options,
    date: Date,
) -> Result<CustomizedProject> {
    Processor::new(&PlaceholderRenderer, PlaceholderMap::build(options, date)).process(skeleton, options)
}

/// Resolves the enabled feature set.
///
/// Order: the skeleton's default features, requested extra features the skeleton offers,
/// then the features implied by the options.
pub fn resolve_features(skeleton: &TemplateSkeleton, options: &Options) -> IndexSet<String> {
    let mut features: IndexSet<String> = skeleton.default_features.iter().cloned().collect();

    for feature in &options.extra_features {
        if skeleton.available_features.contains(feature) {
            features.insert(feature.clone());
        } else {
            warn!("Feature '{feature}' is not offered by this template, ignoring it");
        }
    }

    if options.testing_enabled() {
        features.insert("testing".to_string());
        features.insert(format!("test-{}", options.test_framework.as_str()));
    }
    if options.include_documentation {
        features.insert("documentation".to_string());
        if options.generate_doxygen {
            features.insert("doxygen".to_string());
        }
    }
    if options.include_code_style_tools {
        for feature in ["code-style", "clang-format", "clang-tidy"] {
            features.insert(feature.to_string());
        }
    }
    for system in &options.ci_options {
        features.insert(format!("ci-{}", system.as_str()));
    }
    for editor in &options.editor_options {
        features.insert(format!("editor-{}", editor.as_str()));
    }

    features
}

/// Picks the directory list for the configured project structure.
pub fn select_directories(skeleton: &TemplateSkeleton, options: &Options) -> Vec<String> {
    let owned = |dirs: &[&str]| -> Vec<String> { dirs.iter().map(|dir| dir.to_string()).collect() };
    match options.project_structure {
        ProjectStructure::Minimal => owned(minimal_directories(options.template_kind)),
        ProjectStructure::Advanced => owned(advanced_directories(options.template_kind)),
        ProjectStructure::Custom => options
            .extensions
            .list(ExtensionKey::CustomDirectories)
            .unwrap_or_else(|| skeleton.directories.clone()),
        ProjectStructure::Standard => skeleton.directories.clone(),
    }
}

/// Runs the customization steps with a given renderer and placeholder set.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    placeholders: PlaceholderMap,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, placeholders: PlaceholderMap) -> Self {
        Self { renderer, placeholders }
    }

    pub fn placeholders(&self) -> &PlaceholderMap {
        &self.placeholders
    }

    pub fn process(&self, skeleton: &TemplateSkeleton, options: &Options) -> Result<CustomizedProject> {
        let features = resolve_features(skeleton, options);
        debug!("Enabled features: {:?}", features);

        let mut unresolved = IndexSet::new();

        let mut directories = Vec::new();
        for directory in select_directories(skeleton, options) {
            if let Some(path) = self.render_path(&directory, &mut unresolved)? {
                if !directories.contains(&path) {
                    directories.push(path);
                }
            }
        }

        let custom_files: Vec<TemplateFile> = options
            .extensions
            .list(ExtensionKey::CustomFiles)
            .unwrap_or_default()
            .into_iter()
            .map(|path| TemplateFile::new(path, "").as_optional())
            .collect();

        let mut files: Vec<ResolvedFile> = Vec::new();
        for file in skeleton.files.iter().chain(custom_files.iter()) {
            if !file.is_selected(&features, options) {
                continue;
            }
            let Some(path) = self.render_path(&file.path, &mut unresolved)? else {
                continue;
            };
            if files.iter().any(|existing| existing.path == path) {
                debug!("Skipping duplicate file {path}");
                continue;
            }
            if let Some(bytes) = &file.binary {
                files.push(ResolvedFile {
                    path,
                    content: String::new(),
                    binary: Some(bytes.clone()),
                    executable: file.executable,
                });
                continue;
            }
            let content = self.renderer.render(&file.content, &self.placeholders)?;
            unresolved.extend(content.unresolved);
            files.push(ResolvedFile {
                path,
                content: content.text,
                binary: None,
                executable: file.executable,
            });
        }

        if !unresolved.is_empty() {
            warn!("Unresolved placeholders: {}", unresolved.iter().cloned().collect::<Vec<_>>().join(", "));
        }

        Ok(CustomizedProject {
            directories,
            files,
            features,
            unresolved: unresolved.into_iter().collect(),
        })
    }

    /// Renders a relative path; an empty result means the entry is dropped.
    fn render_path(&self, raw: &str, unresolved: &mut IndexSet<String>) -> Result<Option<String>> {
        let rendered = self.renderer.render(raw, &self.placeholders)?;
        unresolved.extend(rendered.unresolved);
        let path = rendered.text.trim().trim_matches('/').to_string();
        if path.is_empty() {
            debug!("Skipping '{raw}' as its rendered path is empty");
            return Ok(None);
        }
        Ok(Some(path))
    }
}
