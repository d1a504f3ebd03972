//! Repository root discovery.
//!
//! # Public API
//! - [`RepoRoot`]: Top-level directory of a working tree
//! - [`RepoRootResolver`]: Finds the repository enclosing a path via `git rev-parse`

use crate::core::git::GitRunner;
use std::fmt;
use std::path::{Path, PathBuf};

const SHOW_TOPLEVEL: [&str; 2] = ["rev-parse", "--show-toplevel"];

/// Absolute path of a working tree top, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRoot(PathBuf);

impl RepoRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RepoRoot(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Whether `path` is this root or lies below it, compared component-wise
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.0)
    }

    /// `path` relative to this root with `/` separators, `None` when outside the root
    pub fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.0).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}

impl fmt::Display for RepoRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Finds the nearest enclosing repository root. Nothing is cached here.
#[derive(Debug, Clone)]
pub struct RepoRootResolver<G> {
    git: G,
}

impl<G: GitRunner> RepoRootResolver<G> {
    pub fn new(git: G) -> Self {
        RepoRootResolver { git }
    }

    /// Root of the repository containing `path`.
    ///
    /// `None` when git fails or prints nothing, which is what happens outside a
    /// repository. The failure is logged, never returned.
    pub fn find_root(&self, path: &Path) -> Option<RepoRoot> {
        let output = match self.git.run(path, &SHOW_TOPLEVEL) {
            Ok(output) => output,
            Err(e) => {
                log::debug!("No repository root for {}: {e}", path.display());
                return None;
            }
        };

        let root = output.trim_end_matches(['\n', '\r']);
        if root.is_empty() {
            return None;
        }

        Some(RepoRoot::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::testing::ScriptedGit;

    #[test]
    fn test_find_root_trims_newline() {
        let git = ScriptedGit::new();
        git.toplevel("/work/repo/src", "/work/repo");

        let resolver = RepoRootResolver::new(&git);
        assert_eq!(
            resolver.find_root(Path::new("/work/repo/src")),
            Some(RepoRoot::new("/work/repo"))
        );
    }

    #[test]
    fn test_find_root_outside_repository() {
        let git = ScriptedGit::new();
        let resolver = RepoRootResolver::new(&git);

        assert_eq!(resolver.find_root(Path::new("/tmp/plain")), None);
    }

    #[test]
    fn test_find_root_empty_output() {
        let git = ScriptedGit::new();
        git.toplevel_output("/tmp/odd", "");
        let resolver = RepoRootResolver::new(&git);

        assert_eq!(resolver.find_root(Path::new("/tmp/odd")), None);
    }

    #[test]
    fn test_find_root_does_not_cache() {
        let git = ScriptedGit::new();
        git.toplevel("/work/repo", "/work/repo");
        let resolver = RepoRootResolver::new(&git);

        resolver.find_root(Path::new("/work/repo"));
        resolver.find_root(Path::new("/work/repo"));
        assert_eq!(git.calls_to("rev-parse").len(), 2);
    }

    #[test]
    fn test_contains_is_component_wise() {
        let root = RepoRoot::new("/work/repo");
        assert!(root.contains(Path::new("/work/repo")));
        assert!(root.contains(Path::new("/work/repo/src/lib.rs")));
        assert!(!root.contains(Path::new("/work/repo2/src")));
    }

    #[test]
    fn test_relative_path() {
        let root = RepoRoot::new("/work/repo");
        assert_eq!(
            root.relative(Path::new("/work/repo/src/lib.rs")).as_deref(),
            Some("src/lib.rs")
        );
        assert_eq!(root.relative(Path::new("/work/repo")).as_deref(), Some(""));
        assert_eq!(root.relative(Path::new("/work/other/lib.rs")), None);
    }
}
