// ABOUTME: Main library module for templatex
// ABOUTME: LaTeX escaping plus a MiniJinja environment with LaTeX-friendly delimiters

pub mod latex;
pub mod template;

// Re-export commonly used types
pub use latex::escape_latex;
pub use template::{
    build_environment, build_template, default_filters, default_options, LatexEnvironment,
    LatexTemplate, Options, Result, TemplateError,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
