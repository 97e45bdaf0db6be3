//! Error types

use thiserror::Error;

/// Errors raised while parsing a CSS gradient.
///
/// These are the only two hard failures of the parse direction. Every other
/// irregularity (unreadable color fragment, missing header, empty stop list)
/// degrades to partial output instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// Input does not start with `linear-gradient`, `radial-gradient` or
    /// `conic-gradient` (optionally prefixed by `repeating-`)
    #[error("Not a valid gradient: '{0}'")]
    InvalidGradientKind(String),

    /// No `( ... )` argument span was found
    #[error("Invalid gradient format: missing parentheses in '{0}'")]
    MalformedSyntax(String),
}

/// Errors raised while loading a [`ConverterConfig`](crate::ConverterConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid brightness scale '{name}': {reason}")]
    InvalidScale { name: &'static str, reason: String },
}

/// Result type for gradient parsing
pub type Result<T> = std::result::Result<T, GradientError>;
