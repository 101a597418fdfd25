// ABOUTME: Constructors for LaTeX-ready template environments and templates
// ABOUTME: Merges caller overrides onto the defaults and installs the default filters

use tracing::debug;

use super::backend::Backend;
use super::engine::{LatexEnvironment, LatexTemplate, MiniJinjaBackend};
use super::error::Result;
use super::filters::register_filters;
use super::options::{default_options, Options};

/// Build an environment through `backend`.
///
/// The backend receives the default options with `overrides` merged on top,
/// and the filters from [`default_filters`](super::filters::default_filters)
/// replace any same-named filters on the environment it returns.
pub fn build_environment_with<B: Backend>(
    backend: &B,
    loader: B::Loader,
    overrides: Options,
) -> std::result::Result<B::Environment, B::Error> {
    debug!("Building template environment with {} overridden options", overrides.len());
    let options = default_options().merged(overrides);

    let mut environment = backend.environment(loader, &options)?;
    register_filters(&mut environment);
    Ok(environment)
}

/// Build a standalone template from `source` through `backend`
pub fn build_template_with<B: Backend>(
    backend: &B,
    source: &str,
    overrides: Options,
) -> std::result::Result<B::Template, B::Error> {
    debug!(
        "Building template from {} bytes of source with {} overridden options",
        source.len(),
        overrides.len()
    );
    let options = default_options().merged(overrides);

    let mut template = backend.template(source, &options)?;
    register_filters(&mut template);
    Ok(template)
}

/// Build a MiniJinja environment that resolves template names with `loader`.
///
/// ```
/// use templatex::{build_environment, Options};
///
/// let env = build_environment(
///     |name: &str| Ok((name == "doc.tex").then(|| r"\section{@= title | escape_latex =@}".into())),
///     Options::new(),
/// )
/// .unwrap();
///
/// let rendered = env
///     .render("doc.tex", serde_json::json!({ "title": "R&D" }))
///     .unwrap();
/// assert_eq!(rendered, r"\section{R\&D}");
/// ```
pub fn build_environment<F>(loader: F, overrides: Options) -> Result<LatexEnvironment>
where
    F: Fn(&str) -> std::result::Result<Option<String>, minijinja::Error> + Send + Sync + 'static,
{
    build_environment_with(&MiniJinjaBackend, Box::new(loader), overrides)
}

/// Build a MiniJinja template from `source`
pub fn build_template(source: &str, overrides: Options) -> Result<LatexTemplate> {
    build_template_with(&MiniJinjaBackend, source, overrides)
}
