use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for quickreply
#[derive(Debug, Error)]
pub enum QuickReplyError {
    #[error("Failed to parse templates file {}: {message}", path.display())]
    TemplateParse { path: PathBuf, message: String },

    #[error("Duplicate template id '{0}'. Template ids must be unique.")]
    DuplicateTemplateId(String),

    #[error("Invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Content is required")]
    ContentRequired,

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
