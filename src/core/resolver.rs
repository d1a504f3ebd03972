//! Indicator resolution for file tree entries.
//!
//! [`IndicatorResolver`] answers "which indicator does this entry get" for a stream of
//! [`Candidate`]s coming from a file tree. Only the entry marked as the tree root may
//! change the repository: when it lies outside the cached root, the enclosing repository
//! is looked up again and, if it differs, the status cache is rebuilt. Every other entry
//! is a read against the cached snapshot.
//!
//! The tree root itself never carries an indicator.

use crate::core::cache::StatusCache;
use crate::core::git::{GitRunner, SystemGit};
use crate::core::indicator::IndicatorCategory;
use crate::core::root::{RepoRoot, RepoRootResolver};
use std::path::PathBuf;

/// One entry of a file tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute path of the entry
    pub path: PathBuf,
    pub is_directory: bool,
    /// Set only for the node displayed at the top of the tree
    pub is_root: bool,
}

impl Candidate {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Candidate {
            path: path.into(),
            is_directory: false,
            is_root: false,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Candidate {
            path: path.into(),
            is_directory: true,
            is_root: false,
        }
    }

    pub fn root(path: impl Into<PathBuf>) -> Self {
        Candidate {
            path: path.into(),
            is_directory: true,
            is_root: true,
        }
    }
}

pub struct IndicatorResolver<G = SystemGit> {
    roots: RepoRootResolver<G>,
    cache: StatusCache<G>,
}

impl<G: GitRunner + Clone> IndicatorResolver<G> {
    pub fn new(git: G, include_ignored: bool) -> Self {
        IndicatorResolver {
            roots: RepoRootResolver::new(git.clone()),
            cache: StatusCache::new(git, include_ignored),
        }
    }
}

impl<G: GitRunner> IndicatorResolver<G> {
    pub fn cache(&self) -> &StatusCache<G> {
        &self.cache
    }

    pub fn current_root(&self) -> Option<&RepoRoot> {
        self.cache.root()
    }

    /// Indicator category for `candidate`, `None` when it shows no indicator
    pub fn resolve(&mut self, candidate: &Candidate) -> Option<IndicatorCategory> {
        if candidate.is_root {
            self.switch_root(candidate);
            return None;
        }

        let root = self.cache.root()?;
        self.cache
            .lookup(root, &candidate.path, candidate.is_directory)
            .map(|line| line.category())
    }

    fn switch_root(&mut self, candidate: &Candidate) {
        if self
            .cache
            .root()
            .is_some_and(|root| root.contains(&candidate.path))
        {
            return;
        }

        match self.roots.find_root(&candidate.path) {
            None => {
                log::debug!("{} is not inside a repository", candidate.path.display());
                self.cache.clear();
            }
            Some(root) if self.cache.root() == Some(&root) => {}
            Some(root) => {
                log::debug!("Repository root changed to {root}");
                self.cache.refresh(root);
            }
        }
    }
}
