//! Indicator categories derived from porcelain status codes.
//!
//! This module defines [`IndicatorCategory`], the closed set of statuses a file tree entry
//! can be annotated with, and the classifier that maps a two-character short-format status
//! code (index status, worktree status) to exactly one category.
//!
//! # Public API
//! - [`IndicatorCategory`]: The seven indicator categories
//! - [`IndicatorCategory::classify`]: Total mapping from a status code pair to a category
//!
//! # Precedence
//! Checks are evaluated in order and the first match wins:
//! 1. `??` is Untracked
//! 2. ` M` is Modified
//! 3. index `M`, `A` or `C` is Staged
//! 4. index `R` is Renamed
//! 5. index `!` is Ignored
//! 6. either side `U`, or `AA`, or `DD` is Unmerged
//! 7. anything else is Unknown
//!
//! Rule 3 runs before rule 6, so `AA` and `AU` are reported as Staged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status category shown next to a file tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    /// Not tracked by git (??)
    Untracked,
    /// Changed in the worktree only ( M)
    Modified,
    /// Added, modified or copied in the index (M, A, C)
    Staged,
    /// Renamed in the index (R)
    Renamed,
    /// Merge conflict (U on either side, AA, DD)
    Unmerged,
    /// Ignored by git (!!)
    Ignored,
    /// Any other combination
    Unknown,
}

impl IndicatorCategory {
    /// All categories in declaration order
    pub const ALL: [IndicatorCategory; 7] = [
        IndicatorCategory::Untracked,
        IndicatorCategory::Modified,
        IndicatorCategory::Staged,
        IndicatorCategory::Renamed,
        IndicatorCategory::Unmerged,
        IndicatorCategory::Ignored,
        IndicatorCategory::Unknown,
    ];

    /// Classify a short-format status code pair
    pub fn classify(index: char, worktree: char) -> Self {
        match (index, worktree) {
            ('?', '?') => IndicatorCategory::Untracked,
            (' ', 'M') => IndicatorCategory::Modified,
            ('M' | 'A' | 'C', _) => IndicatorCategory::Staged,
            ('R', _) => IndicatorCategory::Renamed,
            ('!', _) => IndicatorCategory::Ignored,
            ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D') => IndicatorCategory::Unmerged,
            _ => IndicatorCategory::Unknown,
        }
    }

    /// Category name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorCategory::Untracked => "Untracked",
            IndicatorCategory::Modified => "Modified",
            IndicatorCategory::Staged => "Staged",
            IndicatorCategory::Renamed => "Renamed",
            IndicatorCategory::Unmerged => "Unmerged",
            IndicatorCategory::Ignored => "Ignored",
            IndicatorCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndicatorCategory {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        IndicatorCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| format!("unknown indicator category: {name}"))
    }
}
