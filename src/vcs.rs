//! Version control setup for generated projects: repository, ignore file, license,
//! hooks, first commit and workflow branches.

use crate::constants::{APP_NAME, DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
use crate::error::Result;
use crate::options::Options;
use crate::tags::{
    BuildSystem, EditorKind, GitWorkflow, LicenseKind, PackageManager, TemplateKind,
};
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use log::debug;
use std::fs;
use std::path::Path;

/// Operations run on the project root after the files are written.
pub trait VersionControl {
    fn init_repository(&self, root: &Path, options: &Options) -> Result<()>;

    fn create_ignore_file(&self, root: &Path, options: &Options) -> Result<()>;

    /// Writes `LICENSE`; nothing happens for `none` and `custom` licenses.
    fn create_license_file(&self, root: &Path, options: &Options) -> Result<()>;

    fn install_hooks(&self, root: &Path, options: &Options) -> Result<()>;

    fn initial_commit(&self, root: &Path, options: &Options) -> Result<()>;

    /// Creates the workflow branches; needs a commit to branch from.
    fn create_branches(&self, root: &Path, options: &Options) -> Result<()>;
}

/// Name of the branch HEAD points to in a new repository.
pub fn initial_branch(options: &Options) -> &'static str {
    match options.workflow {
        GitWorkflow::GitFlow => "develop",
        _ => "main",
    }
}

/// Branches to create next to the initial one.
///
/// Branches given explicitly win over the ones implied by the workflow.
pub fn workflow_branches(options: &Options) -> Vec<String> {
    let branches: Vec<String> = if options.branches.is_empty() {
        let implied: &[&str] = match options.workflow {
            GitWorkflow::GitFlow => &["main"],
            GitWorkflow::GitLabFlow => &["staging", "production"],
            _ => &[],
        };
        implied.iter().map(|branch| branch.to_string()).collect()
    } else {
        options.branches.clone()
    };

    let head = initial_branch(options);
    let mut unique: Vec<String> = Vec::new();
    for branch in branches {
        let branch = branch.trim().to_string();
        if !branch.is_empty() && branch != head && !unique.contains(&branch) {
            unique.push(branch);
        }
    }
    unique
}

fn ignore_section(title: &str, lines: &[&str]) -> String {
    format!("### {title} ###\n{}\n", lines.join("\n"))
}

/// Content of the `.gitignore` file, assembled from sections matching the options.
pub fn gitignore_content(options: &Options) -> String {
    let mut sections = vec![ignore_section(
        "C++",
        &["*.o", "*.obj", "*.a", "*.lib", "*.so", "*.dylib", "*.dll", "*.exe", "*.out", "*.pdb"],
    )];

    sections.push(match options.build_system {
        BuildSystem::CMake => ignore_section(
            "CMake",
            &["build/", "cmake-build-*/", "CMakeCache.txt", "CMakeFiles/", "compile_commands.json"],
        ),
        BuildSystem::Meson => ignore_section("Meson", &["builddir/", "build/", "meson-logs/"]),
        BuildSystem::Bazel => ignore_section("Bazel", &["bazel-*", "MODULE.bazel.lock"]),
        BuildSystem::XMake => ignore_section("XMake", &[".xmake/", "build/"]),
        BuildSystem::Premake => {
            ignore_section("Premake", &["bin/", "obj/", "*.sln", "*.vcxproj*", "Makefile"])
        }
        BuildSystem::Make => ignore_section("Make", &["build/", "*.d"]),
        BuildSystem::Ninja => ignore_section("Ninja", &["build/", ".ninja_deps", ".ninja_log"]),
    });

    match options.package_manager {
        PackageManager::Vcpkg => {
            sections.push(ignore_section("vcpkg", &["vcpkg_installed/", "vcpkg/"]))
        }
        PackageManager::Conan => sections.push(ignore_section(
            "Conan",
            &["conan.lock", "conanbuildinfo.*", "conaninfo.txt", "graph_info.json"],
        )),
        PackageManager::Spack => sections.push(ignore_section("Spack", &[".spack-env/", "spack.lock"])),
        PackageManager::Hunter => sections.push(ignore_section("Hunter", &["_3rdParty/"])),
        PackageManager::Cpm => sections.push(ignore_section("CPM", &[".cpm-cache/"])),
        PackageManager::FetchContent | PackageManager::None => {}
    }

    for editor in &options.editor_options {
        let section = match editor {
            EditorKind::VsCode => ignore_section(
                "VS Code",
                &[".vscode/*", "!.vscode/settings.json", "!.vscode/tasks.json", "!.vscode/launch.json"],
            ),
            EditorKind::CLion => ignore_section("CLion", &[".idea/", "cmake-build-*/"]),
            EditorKind::VisualStudio => ignore_section("Visual Studio", &[".vs/", "*.user", "*.suo"]),
            EditorKind::Vim => ignore_section("Vim", &["*.swp", "*.swo", "Session.vim"]),
            EditorKind::Emacs => ignore_section("Emacs", &["*~", "\\#*\\#", ".#*"]),
            EditorKind::Sublime => {
                ignore_section("Sublime Text", &["*.sublime-workspace", "*.sublime-project"])
            }
        };
        sections.push(section);
    }

    match options.template_kind {
        TemplateKind::QtApp => {
            sections.push(ignore_section("Qt", &["*.pro.user", "moc_*.cpp", "ui_*.h", "qrc_*.cpp"]))
        }
        TemplateKind::GameEngine | TemplateKind::SfmlApp => {
            sections.push(ignore_section("Game assets", &["*.blend1", "imgui.ini"]))
        }
        TemplateKind::WebService => sections.push(ignore_section("Web service", &["*.log", ".env"])),
        TemplateKind::Embedded => {
            sections.push(ignore_section("Embedded", &["*.elf", "*.hex", "*.bin", "*.map"]))
        }
        _ => {}
    }

    if options.include_documentation {
        sections.push(ignore_section("Documentation", &["docs/html/", "docs/latex/"]));
    }

    sections.push(ignore_section("OS", &[".DS_Store", "Thumbs.db"]));
    sections.join("\n")
}

/// Short license text for `kind`, `None` when no file should be written.
pub fn license_text(kind: LicenseKind, year: i32, author: &str) -> Option<String> {
    let text = match kind {
        LicenseKind::Mit => format!(
            "MIT License\n\n\
             Copyright (c) {year} {author}\n\n\
             Permission is hereby granted, free of charge, to any person obtaining a copy\n\
             of this software and associated documentation files (the \"Software\"), to deal\n\
             in the Software without restriction, including without limitation the rights\n\
             to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
             copies of the Software, and to permit persons to whom the Software is\n\
             furnished to do so, subject to the following conditions:\n\n\
             The above copyright notice and this permission notice shall be included in all\n\
             copies or substantial portions of the Software.\n\n\
             THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
             IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
             FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
             AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
             LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
             OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE\n\
             SOFTWARE.\n"
        ),
        LicenseKind::Apache2 => format!(
            "Copyright {year} {author}\n\n\
             Licensed under the Apache License, Version 2.0 (the \"License\");\n\
             you may not use this file except in compliance with the License.\n\
             You may obtain a copy of the License at\n\n\
             \x20   http://www.apache.org/licenses/LICENSE-2.0\n\n\
             Unless required by applicable law or agreed to in writing, software\n\
             distributed under the License is distributed on an \"AS IS\" BASIS,\n\
             WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n"
        ),
        LicenseKind::Gpl3 => format!(
            "Copyright (C) {year} {author}\n\n\
             This program is free software: you can redistribute it and/or modify\n\
             it under the terms of the GNU General Public License as published by\n\
             the Free Software Foundation, either version 3 of the License, or\n\
             (at your option) any later version.\n\n\
             See <https://www.gnu.org/licenses/> for the full text.\n"
        ),
        LicenseKind::Bsd3 | LicenseKind::Bsd2 => {
            let clauses = if kind == LicenseKind::Bsd3 { 3 } else { 2 };
            let mut text = format!(
                "BSD {clauses}-Clause License\n\n\
                 Copyright (c) {year}, {author}\n\n\
                 Redistribution and use in source and binary forms, with or without\n\
                 modification, are permitted provided that the following conditions are met:\n\n\
                 1. Redistributions of source code must retain the above copyright notice.\n\
                 2. Redistributions in binary form must reproduce the above copyright notice\n\
                 \x20  in the documentation and/or other materials provided with the distribution.\n"
            );
            if kind == LicenseKind::Bsd3 {
                text.push_str(
                    "3. Neither the name of the copyright holder nor the names of its contributors\n\
                     \x20  may be used to endorse or promote products derived from this software\n\
                     \x20  without specific prior written permission.\n",
                );
            }
            text
        }
        LicenseKind::Unlicense => "This is free and unencumbered software released into the public domain.\n\n\
             For more information, please refer to <https://unlicense.org>\n"
            .to_string(),
        LicenseKind::Custom | LicenseKind::None => return None,
    };
    Some(text)
}

/// Pre-commit hook checking staged C++ sources with clang-format.
pub const PRE_COMMIT_HOOK: &str = r#"#!/bin/sh
# Installed by cpp-scaffold: rejects commits with unformatted C++ sources.
command -v clang-format >/dev/null 2>&1 || exit 0

files=$(git diff --cached --name-only --diff-filter=ACM | grep -E '\.(c|cc|cpp|cxx|h|hh|hpp|hxx)$')
[ -z "$files" ] && exit 0

status=0
for file in $files; do
    if ! clang-format --dry-run --Werror "$file" >/dev/null 2>&1; then
        echo "clang-format: $file is not formatted"
        status=1
    fi
done
exit $status
"#;

fn non_blank<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.map(str::trim).filter(|value| !value.is_empty()).unwrap_or(fallback)
}

fn author(options: &Options) -> (String, String) {
    (
        non_blank(options.user_name.as_deref(), DEFAULT_AUTHOR_NAME).to_string(),
        non_blank(options.user_email.as_deref(), DEFAULT_AUTHOR_EMAIL).to_string(),
    )
}

/// [`VersionControl`] backed by libgit2.
#[derive(Debug, Default)]
pub struct GitVcs {
    /// Year written into license files
    year: Option<i32>,
}

impl GitVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `year` for license files instead of the current one.
    pub fn with_year(year: i32) -> Self {
        Self { year: Some(year) }
    }

    fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| crate::renderer::today().year())
    }
}

impl VersionControl for GitVcs {
    fn init_repository(&self, root: &Path, options: &Options) -> Result<()> {
        let mut init = RepositoryInitOptions::new();
        init.initial_head(initial_branch(options));
        let repo = Repository::init_opts(root, &init)?;
        debug!("Initialized git repository in {}", root.display());

        let mut config = repo.config()?;
        if let Some(name) = options.user_name.as_deref().filter(|name| !name.trim().is_empty()) {
            config.set_str("user.name", name)?;
        }
        if let Some(email) = options.user_email.as_deref().filter(|email| !email.trim().is_empty()) {
            config.set_str("user.email", email)?;
        }
        if let Some(url) = options.remote_url.as_deref().filter(|url| !url.trim().is_empty()) {
            repo.remote("origin", url)?;
            debug!("Added remote 'origin' -> {url}");
        }
        Ok(())
    }

    fn create_ignore_file(&self, root: &Path, options: &Options) -> Result<()> {
        fs::write(root.join(".gitignore"), gitignore_content(options))?;
        Ok(())
    }

    fn create_license_file(&self, root: &Path, options: &Options) -> Result<()> {
        let (name, _) = author(options);
        match license_text(options.license_kind, self.year(), &name) {
            Some(text) => fs::write(root.join("LICENSE"), text)?,
            None => debug!("No license file for '{}'", options.license_kind),
        }
        Ok(())
    }

    fn install_hooks(&self, root: &Path, _options: &Options) -> Result<()> {
        let repo = Repository::open(root)?;
        let hooks = repo.path().join("hooks");
        fs::create_dir_all(&hooks)?;
        let hook = hooks.join("pre-commit");
        fs::write(&hook, PRE_COMMIT_HOOK)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&hook, fs::Permissions::from_mode(0o755))?;
        }
        debug!("Installed {}", hook.display());
        Ok(())
    }

    fn initial_commit(&self, root: &Path, options: &Options) -> Result<()> {
        let repo = Repository::open(root)?;
        let mut index = repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.write()?;
        let tree = repo.find_tree(index.write_tree()?)?;

        let (name, email) = author(options);
        let signature = Signature::now(&name, &email)?;
        let message = format!("Initial commit\n\nGenerated by {APP_NAME}.");
        repo.commit(Some("HEAD"), &signature, &signature, &message, &tree, &[])?;
        debug!("Created initial commit in {}", root.display());
        Ok(())
    }

    fn create_branches(&self, root: &Path, options: &Options) -> Result<()> {
        let repo = Repository::open(root)?;
        let head = repo.head()?.peel_to_commit()?;
        for branch in workflow_branches(options) {
            repo.branch(&branch, &head, false)?;
            debug!("Created branch '{branch}'");
        }
        Ok(())
    }
}
