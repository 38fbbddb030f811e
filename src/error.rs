//! Error types for configuration loading and tool dispatch

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the host configuration.
///
/// All of these are fatal at startup: no partially initialized
/// configuration is ever returned alongside them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("agent registry not found: {}", path.display())]
    RegistryNotFound { path: PathBuf },

    #[error("failed to read agent registry {}", path.display())]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed registry record on line {line} ({content:?}): {reason}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("invalid base URL on line {line} ({url:?}): {reason}")]
    InvalidBaseUrl {
        line: usize,
        url: String,
        reason: String,
    },

    #[error("duplicate agent name {name:?} on line {line}")]
    DuplicateName { line: usize, name: String },
}

/// Errors raised when invoking a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid params for {tool}: {reason}")]
    InvalidParams { tool: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
