//! Core functionality for git-tree-status.
//!
//! This module provides the status indicator pipeline (classification, status snapshot,
//! repository root discovery, resolution) along with configuration, error handling and
//! output helpers.

pub mod cache;
pub mod colors;
pub mod column;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod indicator;
pub mod output;
pub mod resolver;
pub mod root;
pub mod status_line;

// === Error handling ===
pub use error::{GitTreeStatusError, Result};

// === Git invocation ===
// Seam over the git binary; SystemGit spawns processes
pub use git::{GitRunner, SystemGit};

// === Status codes ===
// Two-letter porcelain code -> indicator category
pub use indicator::IndicatorCategory;
pub use status_line::{StatusLine, StatusSnapshot};

// === Repository state ===
pub use cache::StatusCache;
pub use root::{RepoRoot, RepoRootResolver};

// === Resolution ===
// Repository root state machine and the rendered column on top of it
pub use column::{IndicatorColumn, Label};
pub use resolver::{Candidate, IndicatorResolver};

// === Configuration ===
pub use config::{Config, IndicatorStyle, Indicators};

// === Output formatting ===
pub use colors::{paint, parse_color};
pub use output::print_error;
