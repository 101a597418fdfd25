// ABOUTME: LaTeX special character escaping
// ABOUTME: Applies a fixed substitution table to text in a single longest-match-first pass

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Special characters and the LaTeX sequences that typeset them literally.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("&", r"\&"),
    ("%", r"\%"),
    ("$", r"\$"),
    ("#", r"\#"),
    ("_", r"\_"),
    ("{", r"\{"),
    ("}", r"\}"),
    ("~", r"\textasciitilde{}"),
    ("^", r"\^{}"),
    ("\\", r"\textbackslash{}"),
    ("<", r"\textless{}"),
    (">", r"\textgreater{}"),
];

struct Escaper {
    pattern: Regex,
    replacements: HashMap<&'static str, &'static str>,
}

static ESCAPER: Lazy<Escaper> = Lazy::new(|| Escaper::from_table(substitution_table()));

impl Escaper {
    fn from_table(mut table: Vec<(&'static str, &'static str)>) -> Self {
        // Longer keys must come first so they are never shadowed by one of their prefixes
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let alternation = table
            .iter()
            .map(|(key, _)| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern =
            Regex::new(&alternation).expect("escaped literals always form a valid pattern");

        Self {
            pattern,
            replacements: table.into_iter().collect(),
        }
    }

    fn escape(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, |caps: &Captures| {
                let matched = &caps[0];
                match self.replacements.get(matched) {
                    Some(replacement) => (*replacement).to_string(),
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }
}

/// Return a fresh copy of the substitution table, in declaration order.
pub fn substitution_table() -> Vec<(&'static str, &'static str)> {
    SUBSTITUTIONS.to_vec()
}

/// Escape every LaTeX special character in `content`.
///
/// Characters outside the substitution table pass through unchanged, and
/// replacements are never rescanned, so the function is total and
/// `escape_latex(a + b) == escape_latex(a) + escape_latex(b)`.
///
/// ```
/// use templatex::escape_latex;
///
/// assert_eq!(escape_latex("50% off_sale"), r"50\% off\_sale");
/// ```
pub fn escape_latex(content: &str) -> String {
    ESCAPER.escape(content)
}
