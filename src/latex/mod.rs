// ABOUTME: LaTeX text handling for templatex
// ABOUTME: Exports the character escaper used directly and as a template filter

pub mod escape;

pub use escape::{escape_latex, substitution_table};
