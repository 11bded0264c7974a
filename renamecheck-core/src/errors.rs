//! errors.rs - Custom error types for the renamecheck-core library.
//!
//! Configuration problems are fatal to a run, while pattern and substitution
//! problems are recovered per rule and end up in the sample's record list.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a rename configuration document.
///
/// Marked `#[non_exhaustive]` so new config formats can add variants without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Failed to convert configuration document: {0}")]
    Document(#[from] serde_json::Error),
}

/// A pattern that could not be turned into a matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The minimal engine is active and the pattern needs the rich one.
    #[error(
        "pattern '{pattern}' uses PCRE/Unicode escapes (\\x{{...}} or \\p{{...}}) that the '{engine}' engine does not accept; \
         enable the fancy-regex engine or run with --require-rich"
    )]
    Capability { pattern: String, engine: String },

    #[error("{message}")]
    Compile { pattern: String, message: String },
}

impl PatternError {
    /// Builds a compile error with the engine message folded onto one line.
    ///
    /// The `regex` crate renders syntax errors over several lines with a
    /// caret marker under the pattern; only the text lines are kept.
    pub fn compile(pattern: &str, message: &str) -> Self {
        let message = message
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.chars().all(|c| matches!(c, '^' | '~' | '-')))
            .collect::<Vec<_>>()
            .join(" ");
        PatternError::Compile {
            pattern: pattern.to_string(),
            message,
        }
    }

    /// The pattern text as written in the configuration.
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Capability { pattern, .. } | PatternError::Compile { pattern, .. } => pattern,
        }
    }
}

/// A substitution that failed after its pattern compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstituteError {
    #[error("invalid group reference {group} (pattern defines {defined} group(s))")]
    InvalidGroupReference { group: usize, defined: usize },

    #[error("unknown group name '{0}' in replacement")]
    UnknownGroupName(String),

    #[error("{0}")]
    Engine(String),
}

/// The requested regex engine is not compiled into this build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("regex engine '{0}' is not available in this build (rebuild with the `fancy` feature)")]
pub struct EngineUnavailable(pub String);
