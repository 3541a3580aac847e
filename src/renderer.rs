//! Placeholder substitution and conditional blocks.
//!
//! Two passes run over every path and file content:
//! 1. `{{KEY}}` is replaced by its value in a single left-to-right scan. Inserted values are
//!    never scanned again, and unknown keys stay in the text untouched.
//! 2. `{{#IF KEY}} ... {{/IF}}` keeps its body when `KEY` is truthy and drops the whole block
//!    otherwise. Blocks do not nest: a body ends at the first `{{/IF}}`.

use crate::constants::{
    CONDITIONAL_CLOSE, CONDITIONAL_OPEN, DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME,
    DEFAULT_CMAKE_MINIMUM_VERSION, DEFAULT_DESCRIPTION, FALSY_VALUES, PLACEHOLDER_CLOSE,
    PLACEHOLDER_OPEN,
};
use crate::error::Result;
use crate::options::Options;
use crate::tags::{ExtensionKey, LicenseKind, Tag};
use cruet::Inflector;
use indexmap::IndexMap;
use time::{Date, OffsetDateTime};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given placeholders.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `placeholders` - Values for `{{KEY}}` references and conditional blocks
    ///
    /// # Returns
    /// * `Result<Rendered>` - Rendered text and the unknown keys it referenced
    fn render(&self, template: &str, placeholders: &PlaceholderMap) -> Result<Rendered>;
}

/// Output of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Identifier-shaped keys that had no value, in order of appearance
    pub unresolved: Vec<String>,
}

/// Renderer for the `{{KEY}}` / `{{#IF KEY}}` template syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, placeholders: &PlaceholderMap) -> Result<Rendered> {
        let substituted = substitute(template, placeholders);
        Ok(Rendered {
            text: evaluate_conditionals(&substituted.text, placeholders),
            unresolved: substituted.unresolved,
        })
    }
}

/// Values available to templates, built once per run from the resolved options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap(IndexMap<&'static str, String>);

fn on_off(flag: bool) -> String {
    let value = if flag { "ON" } else { "OFF" };
    value.to_string()
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).map(str::trim).filter(|value| !value.is_empty())
}

/// Today's date in the local time zone, UTC when the local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()).date()
}

impl PlaceholderMap {
    /// Builds the placeholder values for `options`, dated `date`.
    ///
    /// `PROJECT_NAME_UPPER` is the screaming snake case of the name (`MyApp` gives `MY_APP`,
    /// `my-app` gives `MY_APP`), not a plain uppercase, so it is always a valid macro name.
    pub fn build(options: &Options, date: Date) -> Self {
        let name = options.project_name.as_str();
        let mut map = IndexMap::new();

        map.insert("PROJECT_NAME", name.to_string());
        map.insert("PROJECT_NAME_UPPER", name.to_screaming_snake_case());
        map.insert("PROJECT_NAME_SNAKE", name.to_snake_case());
        map.insert("PROJECT_NAME_PASCAL", name.to_pascal_case());
        map.insert(
            "PROJECT_DESCRIPTION",
            non_empty(options.description.as_ref()).unwrap_or(DEFAULT_DESCRIPTION).to_string(),
        );

        map.insert("TEMPLATE_KIND", options.template_kind.as_str().to_string());
        map.insert("BUILD_SYSTEM", options.build_system.as_str().to_string());
        map.insert("PACKAGE_MANAGER", options.package_manager.as_str().to_string());
        map.insert("CPP_STANDARD", options.language_standard.as_str().to_string());
        map.insert("CPP_STANDARD_NUM", options.language_standard.number().to_string());
        map.insert("BUILD_TYPE", options.build_type.cmake_name().to_string());
        map.insert(
            "TEST_FRAMEWORK",
            if options.testing_enabled() {
                options.test_framework.as_str().to_string()
            } else {
                String::new()
            },
        );
        map.insert(
            "LICENSE_KIND",
            match options.license_kind {
                LicenseKind::None => String::new(),
                kind => kind.as_str().to_uppercase(),
            },
        );

        map.insert("ENABLE_TESTING", on_off(options.testing_enabled()));
        map.insert("ENABLE_DOCS", on_off(options.include_documentation));
        map.insert("ENABLE_DOXYGEN", on_off(options.doxygen_enabled()));
        map.insert("ENABLE_CODE_STYLE", on_off(options.include_code_style_tools));
        map.insert("ENABLE_LICENSE", on_off(options.license_enabled()));
        map.insert("ENABLE_SHADERS", on_off(options.include_shaders));
        map.insert("ENABLE_CODE_EXAMPLES", on_off(options.include_code_examples));
        map.insert("ENABLE_CHANGELOG", on_off(options.generate_changelog));
        map.insert("ENABLE_GIT", on_off(options.init_repo));

        map.insert(
            "NETWORK_LIBRARY",
            non_empty(options.network_library.as_ref()).unwrap_or_default().to_string(),
        );
        map.insert("GUI_FRAMEWORK", options.gui_frameworks.first().cloned().unwrap_or_default());
        map.insert("GAME_FRAMEWORK", options.game_frameworks.first().cloned().unwrap_or_default());

        map.insert(
            "AUTHOR_NAME",
            non_empty(options.user_name.as_ref()).unwrap_or(DEFAULT_AUTHOR_NAME).to_string(),
        );
        map.insert(
            "AUTHOR_EMAIL",
            non_empty(options.user_email.as_ref()).unwrap_or(DEFAULT_AUTHOR_EMAIL).to_string(),
        );
        map.insert(
            "CMAKE_MINIMUM_VERSION",
            options
                .extensions
                .get(ExtensionKey::CMakeMinimumVersion)
                .unwrap_or(DEFAULT_CMAKE_MINIMUM_VERSION)
                .to_string(),
        );

        map.insert("CURRENT_YEAR", date.year().to_string());
        map.insert(
            "CURRENT_DATE",
            format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()),
        );

        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// A key is truthy when it has a non-empty value other than exactly `false`, `0` or `OFF`.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty() && !FALSY_VALUES.contains(&value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(&'static str, String)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replaces every known `{{KEY}}` in one left-to-right pass.
pub fn substitute(template: &str, placeholders: &PlaceholderMap) -> Rendered {
    let mut text = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        text.push_str(&rest[..start]);
        let after_open = &rest[start + PLACEHOLDER_OPEN.len()..];
        let Some(end) = after_open.find(PLACEHOLDER_CLOSE) else {
            rest = &rest[start..];
            break;
        };

        let key = &after_open[..end];
        if key.contains(PLACEHOLDER_OPEN) {
            text.push_str(PLACEHOLDER_OPEN);
            rest = after_open;
            continue;
        }

        match placeholders.get(key) {
            Some(value) => text.push_str(value),
            None => {
                if is_identifier(key) && !unresolved.iter().any(|seen| seen == key) {
                    unresolved.push(key.to_string());
                }
                text.push_str(&rest[start..start + PLACEHOLDER_OPEN.len() + end + PLACEHOLDER_CLOSE.len()]);
            }
        }
        rest = &after_open[end + PLACEHOLDER_CLOSE.len()..];
    }
    text.push_str(rest);

    Rendered { text, unresolved }
}

/// Keeps or removes `{{#IF KEY}} ... {{/IF}}` blocks.
///
/// Malformed opening markers and blocks without a closing marker are left verbatim.
pub fn evaluate_conditionals(text: &str, placeholders: &PlaceholderMap) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(CONDITIONAL_OPEN) {
        output.push_str(&rest[..start]);
        let block = &rest[start..];
        let after_open = &block[CONDITIONAL_OPEN.len()..];

        let key = after_open
            .find(PLACEHOLDER_CLOSE)
            .filter(|_| after_open.starts_with(char::is_whitespace))
            .map(|end| (after_open[..end].trim(), end))
            .filter(|(key, _)| is_identifier(key));
        let Some((key, key_end)) = key else {
            output.push_str(CONDITIONAL_OPEN);
            rest = after_open;
            continue;
        };

        let body = &after_open[key_end + PLACEHOLDER_CLOSE.len()..];
        let Some(body_end) = body.find(CONDITIONAL_CLOSE) else {
            output.push_str(block);
            return output;
        };

        if placeholders.is_truthy(key) {
            output.push_str(&body[..body_end]);
        }
        rest = &body[body_end + CONDITIONAL_CLOSE.len()..];
    }
    output.push_str(rest);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&'static str, &str)]) -> PlaceholderMap {
        entries.iter().map(|(key, value)| (*key, value.to_string())).collect()
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let placeholders = map(&[("A", "{{B}}"), ("B", "b")]);
        let rendered = substitute("{{A}}", &placeholders);
        assert_eq!(rendered.text, "{{B}}");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let placeholders = map(&[("A", "a")]);
        assert_eq!(substitute("x {{A}} {{A", &placeholders).text, "x a {{A");
    }

    #[test]
    fn malformed_open_marker_is_kept() {
        let placeholders = map(&[("X", "ON")]);
        assert_eq!(evaluate_conditionals("{{#IFX}}a{{/IF}}", &placeholders), "{{#IFX}}a{{/IF}}");
        assert_eq!(evaluate_conditionals("{{#IF }}a{{/IF}}", &placeholders), "{{#IF }}a{{/IF}}");
    }
}
