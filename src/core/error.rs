//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitTreeStatusError`], the single error type of the crate. It uses
//! `thiserror` for ergonomic error definitions and provides constructors for the common
//! failure scenarios.
//!
//! # Public API
//! - [`GitTreeStatusError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitTreeStatusError>`
//!
//! # Error Categories
//! - **Git invocation**: binary could not be spawned, command exited non-zero
//! - **Configuration**: unreadable or unparsable config file, invalid indicator table
//! - **File operations**: missing paths, I/O and directory walk errors
//!
//! Git invocation errors never leave the indicator core: the root resolver and the
//! status cache turn them into "no information". They only exist as values so the
//! degradation can be logged with its cause.

use crate::core::indicator::IndicatorCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-tree-status
#[derive(Error, Debug)]
pub enum GitTreeStatusError {
    // Git invocation errors
    #[error("Failed to run git: {source}")]
    GitSpawnFailed { source: std::io::Error },

    #[error("git {args} failed: {stderr}")]
    GitCommandFailed { args: String, stderr: String },

    // Configuration errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Indicator glyph for {category} must not be empty")]
    EmptyGlyph { category: IndicatorCategory },

    #[error("Indicator glyph for {category} is {width} characters wide but the column is {column_length}")]
    GlyphTooWide {
        category: IndicatorCategory,
        width: usize,
        column_length: usize,
    },

    #[error("Unknown color '{color}' for {category}")]
    InvalidColor {
        category: IndicatorCategory,
        color: String,
    },

    // File operation errors
    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitTreeStatusError
pub type Result<T> = std::result::Result<T, GitTreeStatusError>;

impl GitTreeStatusError {
    /// Create a git spawn failure error
    pub fn git_spawn_failed(source: std::io::Error) -> Self {
        Self::GitSpawnFailed { source }
    }

    /// Create a git command failure error from the invoked arguments and its stderr
    pub fn git_command_failed(args: &[&str], stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            args: args.join(" "),
            stderr: stderr.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a glyph too wide error
    pub fn glyph_too_wide(category: IndicatorCategory, width: usize, column_length: usize) -> Self {
        Self::GlyphTooWide {
            category,
            width,
            column_length,
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(category: IndicatorCategory, color: impl Into<String>) -> Self {
        Self::InvalidColor {
            category,
            color: color.into(),
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}
