// ABOUTME: Seam between the environment builder and the template engine it configures
// ABOUTME: Defines the engine constructor and filter registry traits

use super::filters::FilterFn;
use super::options::Options;

/// Anything that holds named filters callable from template source.
pub trait FilterRegistry {
    /// Register `filter` under `name`, replacing any filter of the same name
    fn register_filter(&mut self, name: &'static str, filter: FilterFn);
}

/// A template engine that can be constructed from an option mapping.
///
/// The builder merges defaults and overrides, hands the result to the
/// backend and installs the default filters on whatever comes back. Option
/// validation belongs entirely to the backend, and its errors reach the
/// caller untouched.
pub trait Backend {
    /// Resolves template names to template source
    type Loader;
    type Environment: FilterRegistry;
    type Template: FilterRegistry;
    type Error;

    fn environment(
        &self,
        loader: Self::Loader,
        options: &Options,
    ) -> Result<Self::Environment, Self::Error>;

    fn template(&self, source: &str, options: &Options) -> Result<Self::Template, Self::Error>;
}
