// ABOUTME: Error types for template environment construction and rendering
// ABOUTME: Defines errors raised while applying options to the engine and rendering templates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for template option '{option}': expected {expected}")]
    InvalidOption {
        option: String,
        expected: &'static str,
    },

    #[error("Template engine error: {0}")]
    Engine(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
