// ABOUTME: MiniJinja-backed template environment and standalone template
// ABOUTME: Translates option mappings into engine settings and renders LaTeX templates

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

use super::backend::{Backend, FilterRegistry};
use super::error::{Result, TemplateError};
use super::filters::FilterFn;
use super::options::Options;

/// Resolves a template name to its source; `Ok(None)` means "not found".
pub type Loader =
    Box<dyn Fn(&str) -> std::result::Result<Option<String>, minijinja::Error> + Send + Sync>;

/// Name a standalone template is stored under inside its private environment
const TEMPLATE_NAME: &str = "<template>";

/// Backend that builds MiniJinja environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaBackend;

impl Backend for MiniJinjaBackend {
    type Loader = Loader;
    type Environment = LatexEnvironment;
    type Template = LatexTemplate;
    type Error = TemplateError;

    fn environment(&self, loader: Loader, options: &Options) -> Result<LatexEnvironment> {
        let mut env = Environment::new();
        apply_options(&mut env, options)?;
        env.set_loader(loader);

        Ok(LatexEnvironment {
            env,
            filters: BTreeSet::new(),
        })
    }

    fn template(&self, source: &str, options: &Options) -> Result<LatexTemplate> {
        let mut env = Environment::new();
        apply_options(&mut env, options)?;
        env.add_template_owned(TEMPLATE_NAME, source.to_string())?;

        Ok(LatexTemplate {
            inner: LatexEnvironment {
                env,
                filters: BTreeSet::new(),
            },
            source: source.to_string(),
        })
    }
}

/// A configured MiniJinja environment that loads templates by name.
#[derive(Debug, Clone)]
pub struct LatexEnvironment {
    env: Environment<'static>,
    filters: BTreeSet<&'static str>,
}

impl LatexEnvironment {
    /// Load template `name` through the loader and render it with `context`
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }

    /// Render a template string with the environment's syntax and filters
    pub fn render_str<S: Serialize>(&self, source: &str, context: S) -> Result<String> {
        Ok(self.env.render_str(source, context)?)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, source: &str) -> Result<()> {
        self.env.template_from_str(source)?;
        Ok(())
    }

    /// Names of the filters registered through [`FilterRegistry`]
    pub fn filter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.iter().copied()
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains(name)
    }

    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    pub fn into_inner(self) -> Environment<'static> {
        self.env
    }
}

impl FilterRegistry for LatexEnvironment {
    fn register_filter(&mut self, name: &'static str, filter: FilterFn) {
        // Non-string values (numbers, none, ...) are stringified before filtering
        self.env
            .add_filter(name, move |value: Value| filter(&value.to_string()));
        self.filters.insert(name);
    }
}

/// A single compiled template with its own configured environment.
#[derive(Debug, Clone)]
pub struct LatexTemplate {
    inner: LatexEnvironment,
    source: String,
}

impl LatexTemplate {
    pub fn render<S: Serialize>(&self, context: S) -> Result<String> {
        self.inner.render(TEMPLATE_NAME, context)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.filter_names()
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.inner.has_filter(name)
    }

    pub fn environment(&self) -> &Environment<'static> {
        self.inner.environment()
    }
}

impl FilterRegistry for LatexTemplate {
    fn register_filter(&mut self, name: &'static str, filter: FilterFn) {
        self.inner.register_filter(name, filter);
    }
}

/// Delimiters and line prefixes collected from the options before the
/// syntax is built. Unset delimiters keep Jinja's stock values.
struct SyntaxOptions {
    block: (String, String),
    variable: (String, String),
    comment: (String, String),
    line_statement_prefix: Option<String>,
    line_comment_prefix: Option<String>,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self {
            block: ("{%".to_string(), "%}".to_string()),
            variable: ("{{".to_string(), "}}".to_string()),
            comment: ("{#".to_string(), "#}".to_string()),
            line_statement_prefix: None,
            line_comment_prefix: None,
        }
    }
}

impl SyntaxOptions {
    fn build(self) -> Result<SyntaxConfig> {
        let mut builder = SyntaxConfig::builder();
        builder
            .block_delimiters(self.block.0, self.block.1)
            .variable_delimiters(self.variable.0, self.variable.1)
            .comment_delimiters(self.comment.0, self.comment.1);

        if let Some(prefix) = self.line_statement_prefix {
            builder.line_statement_prefix(prefix);
        }
        if let Some(prefix) = self.line_comment_prefix {
            builder.line_comment_prefix(prefix);
        }

        Ok(builder.build()?)
    }
}

/// Apply every option to `env`, rejecting names the engine does not know
fn apply_options(env: &mut Environment<'static>, options: &Options) -> Result<()> {
    let mut syntax = SyntaxOptions::default();

    for (key, value) in options {
        match key.as_str() {
            "block_start_string" => syntax.block.0 = string_option(key, value)?,
            "block_end_string" => syntax.block.1 = string_option(key, value)?,
            "variable_start_string" => syntax.variable.0 = string_option(key, value)?,
            "variable_end_string" => syntax.variable.1 = string_option(key, value)?,
            "comment_start_string" => syntax.comment.0 = string_option(key, value)?,
            "comment_end_string" => syntax.comment.1 = string_option(key, value)?,
            "line_statement_prefix" => {
                syntax.line_statement_prefix = optional_string_option(key, value)?
            }
            "line_comment_prefix" => {
                syntax.line_comment_prefix = optional_string_option(key, value)?
            }
            "trim_blocks" => env.set_trim_blocks(bool_option(key, value)?),
            "lstrip_blocks" => env.set_lstrip_blocks(bool_option(key, value)?),
            "keep_trailing_newline" => env.set_keep_trailing_newline(bool_option(key, value)?),
            "autoescape" => {
                let auto_escape = if bool_option(key, value)? {
                    AutoEscape::Html
                } else {
                    AutoEscape::None
                };
                env.set_auto_escape_callback(move |_| auto_escape.clone());
            }
            "undefined" => env.set_undefined_behavior(undefined_option(key, value)?),
            unknown => return Err(TemplateError::UnknownOption(unknown.to_string())),
        }
    }

    env.set_syntax(syntax.build()?);
    Ok(())
}

fn string_option(key: &str, value: &JsonValue) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(key, "a string"))
}

fn optional_string_option(key: &str, value: &JsonValue) -> Result<Option<String>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) => Ok(Some(s.clone())),
        _ => Err(invalid(key, "a string or null")),
    }
}

fn bool_option(key: &str, value: &JsonValue) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, "a boolean"))
}

fn undefined_option(key: &str, value: &JsonValue) -> Result<UndefinedBehavior> {
    match value.as_str() {
        Some("lenient") => Ok(UndefinedBehavior::Lenient),
        Some("chainable") => Ok(UndefinedBehavior::Chainable),
        Some("strict") => Ok(UndefinedBehavior::Strict),
        _ => Err(invalid(key, "one of \"lenient\", \"chainable\" or \"strict\"")),
    }
}

fn invalid(key: &str, expected: &'static str) -> TemplateError {
    TemplateError::InvalidOption {
        option: key.to_string(),
        expected,
    }
}
