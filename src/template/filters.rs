// ABOUTME: Default filter functions registered on every LaTeX template environment
// ABOUTME: Maps filter names to callables and installs them into a filter registry

use std::collections::BTreeMap;
use tracing::trace;

use super::backend::FilterRegistry;
use crate::latex::escape_latex;

/// A filter callable: text in, text out.
pub type FilterFn = fn(&str) -> String;

/// Filter name to callable.
pub type Filters = BTreeMap<&'static str, FilterFn>;

const DEFAULT_FILTERS: &[(&str, FilterFn)] = &[("escape_latex", escape_latex)];

/// Return a fresh mapping of the default filters.
pub fn default_filters() -> Filters {
    DEFAULT_FILTERS.iter().copied().collect()
}

/// Register all default filters, replacing any filter already registered
/// under the same name
pub fn register_filters<R>(registry: &mut R)
where
    R: FilterRegistry + ?Sized,
{
    for (name, filter) in default_filters() {
        trace!("Registering template filter: {}", name);
        registry.register_filter(name, filter);
    }
}
