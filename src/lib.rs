//! git-tree-status - per-path git status indicators for file tree views.
//!
//! This library computes a status indicator (Modified, Staged, Renamed, Unmerged,
//! Untracked, Ignored, Unknown) for each entry of a directory tree under git, caching
//! one `git status --porcelain` snapshot per repository root so that a tree with many
//! entries costs a single git invocation.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`IndicatorCategory`] and its classifier
//! - [`StatusCache`], [`RepoRootResolver`] and [`IndicatorResolver`]
//! - [`IndicatorColumn`] producing fixed-width labels
//! - [`Config`] and error types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Resolution
    Candidate,
    // Configuration
    Config,
    // Error handling
    GitTreeStatusError,
    // Git invocation
    GitRunner,
    // Status codes
    IndicatorCategory,
    IndicatorColumn,
    IndicatorResolver,
    IndicatorStyle,
    Indicators,
    Label,
    RepoRoot,
    RepoRootResolver,
    Result,
    // Repository state
    StatusCache,
    StatusLine,
    StatusSnapshot,
    SystemGit,
};
