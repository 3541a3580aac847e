//! User interaction: the prompter seam and the interactive wizard.

use crate::constants::{DEFAULT_DESCRIPTION, GUI_FRAMEWORK_CHOICES, KNOWN_NETWORK_LIBRARIES};
use crate::error::Result;
use crate::options::Options;
use crate::tags::{
    BuildSystem, CiSystem, EditorKind, LanguageStandard, PackageManager, Tag, TemplateKind,
    TestFramework,
};
use crate::validator::check_project_name;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use log::debug;

/// Source of answers for interactive questions.
pub trait Prompter {
    /// Reads a line of text, returning `default` when the answer is empty.
    fn read_line(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Lets the user pick one of `choices`, returning its index.
    fn read_choice(&self, prompt: &str, choices: &[&str], default: usize) -> Result<usize>;

    fn read_confirmation(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Lets the user pick any number of `choices`, returning their indices in order.
    fn read_selections(
        &self,
        prompt: &str,
        choices: &[&str],
        defaults: &[bool],
    ) -> Result<Vec<usize>>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn read_line(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn read_choice(&self, prompt: &str, choices: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(choices)
            .interact()?)
    }

    fn read_confirmation(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn read_selections(
        &self,
        prompt: &str,
        choices: &[&str],
        defaults: &[bool],
    ) -> Result<Vec<usize>> {
        Ok(MultiSelect::new()
            .with_prompt(prompt)
            .items(choices)
            .defaults(defaults)
            .interact()?)
    }
}

/// Asks for one value of a closed tag set, `current` preselected.
pub fn choose<T: Tag + PartialEq>(
    prompter: &dyn Prompter,
    prompt: &str,
    choices: &[T],
    current: T,
) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(|choice| choice.as_str()).collect();
    let default = choices.iter().position(|choice| *choice == current).unwrap_or(0);
    let index = prompter.read_choice(prompt, &labels, default)?;
    Ok(choices.get(index).copied().unwrap_or(current))
}

/// Asks for any subset of a closed tag set, `current` preselected.
pub fn choose_many<T: Tag + PartialEq>(
    prompter: &dyn Prompter,
    prompt: &str,
    choices: &[T],
    current: &[T],
) -> Result<Vec<T>> {
    let labels: Vec<&str> = choices.iter().map(|choice| choice.as_str()).collect();
    let defaults: Vec<bool> = choices.iter().map(|choice| current.contains(choice)).collect();
    let picked = prompter.read_selections(prompt, &labels, &defaults)?;
    Ok(picked.into_iter().filter_map(|index| choices.get(index).copied()).collect())
}

/// Asks for one of a fixed list of names, preselecting `current` when it is listed.
fn choose_name(
    prompter: &dyn Prompter,
    prompt: &str,
    choices: &[&str],
    current: Option<&str>,
) -> Result<String> {
    let default = current
        .and_then(|current| {
            choices.iter().position(|choice| choice.eq_ignore_ascii_case(current.trim()))
        })
        .unwrap_or(0);
    let index = prompter.read_choice(prompt, choices, default)?;
    Ok(choices.get(index).or(choices.get(default)).copied().unwrap_or_default().to_string())
}

/// Asks for a project name until a valid one is given.
pub fn prompt_project_name(prompter: &dyn Prompter, default: Option<&str>) -> Result<String> {
    loop {
        let name = prompter.read_line("Project name", default)?.trim().to_string();
        match check_project_name(&name) {
            None => return Ok(name),
            Some(problem) => eprintln!("{problem}"),
        }
    }
}

/// Walks the user through the main options, starting from `base`.
///
/// # Arguments
/// * `prompter` - Source of the answers
/// * `base` - Options shown as defaults; fields not asked about are kept
///
/// # Returns
/// * `Result<Options>` - Options with the answers applied
pub fn run_wizard(prompter: &dyn Prompter, base: Options) -> Result<Options> {
    let mut options = base;

    let current_name = (!options.project_name.is_empty()).then(|| options.project_name.clone());
    options.project_name = prompt_project_name(prompter, current_name.as_deref())?;

    let description = prompter.read_line(
        "Description",
        Some(options.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)),
    )?;
    options.description = Some(description.trim().to_string()).filter(|text| !text.is_empty());

    options.template_kind =
        choose(prompter, "Project template", TemplateKind::ALL, options.template_kind)?;
    match options.template_kind {
        TemplateKind::Network => {
            options.network_library = Some(choose_name(
                prompter,
                "Network library",
                &KNOWN_NETWORK_LIBRARIES,
                options.network_library.as_deref(),
            )?);
        }
        TemplateKind::Gui | TemplateKind::QtApp => {
            let current = options
                .gui_frameworks
                .first()
                .map(String::as_str)
                .or((options.template_kind == TemplateKind::QtApp).then_some("qt"));
            let framework = choose_name(prompter, "GUI framework", &GUI_FRAMEWORK_CHOICES, current)?;
            options.gui_frameworks.retain(|existing| !existing.eq_ignore_ascii_case(&framework));
            options.gui_frameworks.insert(0, framework);
        }
        _ => {}
    }
    options.build_system = choose(prompter, "Build system", BuildSystem::ALL, options.build_system)?;
    options.package_manager =
        choose(prompter, "Package manager", PackageManager::ALL, options.package_manager)?;
    options.language_standard =
        choose(prompter, "C++ standard", LanguageStandard::ALL, options.language_standard)?;

    options.include_tests = prompter.read_confirmation("Include tests?", options.include_tests)?;
    if options.include_tests {
        let frameworks: Vec<TestFramework> = TestFramework::ALL
            .iter()
            .copied()
            .filter(|framework| *framework != TestFramework::None)
            .collect();
        options.test_framework =
            choose(prompter, "Test framework", &frameworks, options.test_framework)?;
    }

    options.include_documentation =
        prompter.read_confirmation("Include documentation?", options.include_documentation)?;
    options.include_code_style_tools = prompter
        .read_confirmation("Include code style tools?", options.include_code_style_tools)?;
    options.editor_options =
        choose_many(prompter, "Editors to configure", EditorKind::ALL, &options.editor_options)?;
    options.init_repo = prompter.read_confirmation("Initialize a git repository?", options.init_repo)?;
    if options.init_repo {
        options.ci_options = choose_many(prompter, "CI systems", CiSystem::ALL, &options.ci_options)?;
    }

    debug!("Wizard finished for project '{}'", options.project_name);
    Ok(options)
}
