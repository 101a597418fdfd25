// ABOUTME: Template environment module for templatex
// ABOUTME: Provides LaTeX-friendly defaults, engine construction and filter registration

pub mod backend;
pub mod builder;
pub mod engine;
pub mod error;
pub mod filters;
pub mod options;

pub use backend::{Backend, FilterRegistry};
pub use builder::{build_environment, build_environment_with, build_template, build_template_with};
pub use engine::{LatexEnvironment, LatexTemplate, Loader, MiniJinjaBackend};
pub use error::{Result, TemplateError};
pub use filters::{default_filters, register_filters, FilterFn, Filters};
pub use options::{default_options, Options};
