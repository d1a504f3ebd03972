//! Porcelain status lines and the sorted snapshot built from them.
//!
//! # Public API
//! - [`StatusLine`]: One parsed `XY path` record from `git status --porcelain`
//! - [`StatusSnapshot`]: All status lines of a repository, in scan priority order
//!
//! # Scan priority
//! A directory entry in a file tree matches every changed file below it, and the first
//! match in the snapshot decides its indicator. The snapshot is therefore stable-sorted by
//! [`StatusLine::priority`]: conflicts first, then modifications, then everything else.
//! Lines of the same tier keep the order git printed them in.

use crate::core::indicator::IndicatorCategory;
use chrono::{DateTime, Utc};

const RENAME_SEPARATOR: &str = " -> ";

/// A single line of short-format status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub index: char,
    pub worktree: char,
    /// Repository-relative path; a trailing `/` marks a directory
    pub path: String,
    /// Source path of a rename or copy
    pub original_path: Option<String>,
}

impl StatusLine {
    /// Parse one line of porcelain output.
    ///
    /// The first two characters are the status codes, the third is a single space and
    /// the remainder is the path. Git wraps paths containing spaces, quotes, control or
    /// non-ASCII characters in double quotes with C-style escapes; those are decoded here.
    /// Lines too short to carry a path, without the separator, or with a broken quoted
    /// path yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        let mut chars = line.char_indices();
        let (_, index) = chars.next()?;
        let (_, worktree) = chars.next()?;
        let (separator_at, separator) = chars.next()?;
        if separator != ' ' {
            return None;
        }

        let rest = &line[separator_at + 1..];
        if rest.is_empty() {
            return None;
        }

        let (path, original_path) = parse_paths(matches!(index, 'R' | 'C'), rest)?;
        if path.is_empty() {
            return None;
        }

        Some(StatusLine {
            index,
            worktree,
            path,
            original_path,
        })
    }

    /// Scan priority tier: 0 for conflicts, 1 for modifications, 2 for the rest
    pub fn priority(&self) -> u8 {
        if self.index == 'U' || self.worktree == 'U' {
            0
        } else if self.index == 'M' || self.worktree == 'M' {
            1
        } else {
            2
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        IndicatorCategory::classify(self.index, self.worktree)
    }

    /// Whether git reported this entry as a whole directory
    pub fn is_directory(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Whether this line carries the status of `relative`.
    ///
    /// `relative` is a repository-relative path without a trailing separator. A directory
    /// matches any line below it; a file only matches its own line. Either kind matches a
    /// directory line that contains it.
    pub fn matches(&self, relative: &str, is_directory: bool) -> bool {
        let own = if is_directory {
            self.path
                .strip_prefix(relative)
                .is_some_and(|rest| rest.starts_with('/'))
        } else {
            self.path == relative
        };

        own || (self.is_directory() && relative.starts_with(self.path.as_str()))
    }
}

/// Path and rename source of the text after the status codes
fn parse_paths(renamed: bool, rest: &str) -> Option<(String, Option<String>)> {
    let (first, remainder) = match rest.strip_prefix('"') {
        Some(quoted) => unquote(quoted)?,
        None if renamed => match rest.find(RENAME_SEPARATOR) {
            Some(at) => (rest[..at].to_string(), &rest[at..]),
            None => (rest.to_string(), ""),
        },
        None => (rest.to_string(), ""),
    };

    if remainder.is_empty() {
        return Some((first, None));
    }

    // Only a rename or copy may carry a second path
    let destination = remainder
        .strip_prefix(RENAME_SEPARATOR)
        .filter(|_| renamed)?;
    let destination = match destination.strip_prefix('"') {
        Some(quoted) => match unquote(quoted)? {
            (path, "") => path,
            _ => return None,
        },
        None => destination.to_string(),
    };

    Some((destination, Some(first)))
}

/// Decode a C-quoted path whose opening quote is already consumed.
///
/// Returns the decoded path and the text after the closing quote. Octal escapes are raw
/// bytes, so multi-byte characters arrive as several of them and are reassembled as UTF-8.
fn unquote(quoted: &str) -> Option<(String, &str)> {
    let mut bytes = Vec::with_capacity(quoted.len());
    let mut iter = quoted.bytes().enumerate();

    while let Some((at, byte)) = iter.next() {
        match byte {
            b'"' => {
                let path = String::from_utf8_lossy(&bytes).into_owned();
                return Some((path, &quoted[at + 1..]));
            }
            b'\\' => {
                let (_, escaped) = iter.next()?;
                let decoded = match escaped {
                    b'0'..=b'7' => {
                        let mut value = u32::from(escaped - b'0');
                        for _ in 0..2 {
                            let (_, digit) = iter.next()?;
                            if !(b'0'..=b'7').contains(&digit) {
                                return None;
                            }
                            value = value * 8 + u32::from(digit - b'0');
                        }
                        u8::try_from(value).ok()?
                    }
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b'f' => 0x0c,
                    b'n' => b'\n',
                    b'r' => b'\r',
                    b't' => b'\t',
                    b'v' => 0x0b,
                    b'"' | b'\\' => escaped,
                    _ => return None,
                };
                bytes.push(decoded);
            }
            _ => bytes.push(byte),
        }
    }

    // No closing quote
    None
}

/// Sorted status lines of one repository at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    lines: Vec<StatusLine>,
    taken_at: Option<DateTime<Utc>>,
}

impl StatusSnapshot {
    /// Build a snapshot from raw porcelain output
    pub fn from_porcelain(output: &str) -> Self {
        let mut lines: Vec<StatusLine> = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let parsed = StatusLine::parse(line);
                if parsed.is_none() {
                    log::debug!("Skipping malformed status line: {line:?}");
                }
                parsed
            })
            .collect();

        // Stable, so equal tiers keep git's output order
        lines.sort_by_key(StatusLine::priority);

        StatusSnapshot {
            lines,
            taken_at: Some(Utc::now()),
        }
    }

    pub fn lines(&self) -> &[StatusLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the snapshot was taken, `None` for the initial empty snapshot
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        self.taken_at
    }

    /// First line in scan priority order that carries the status of `relative`
    pub fn find(&self, relative: &str, is_directory: bool) -> Option<&StatusLine> {
        self.lines
            .iter()
            .find(|line| line.matches(relative, is_directory))
    }
}
