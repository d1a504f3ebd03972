//! Per-repository status cache.
//!
//! [`StatusCache`] keeps the current repository root and a sorted [`StatusSnapshot`] of
//! its `git status --porcelain` output, so a file tree can query many entries against a
//! single git invocation.
//!
//! # Cache Strategy
//! - **Wholesale refresh**: a refresh replaces the snapshot, nothing is merged
//! - **Single root**: a new root discards the previous snapshot entirely
//! - **Silent degradation**: a failing status query leaves an empty snapshot

use crate::core::git::GitRunner;
use crate::core::root::RepoRoot;
use crate::core::status_line::{StatusLine, StatusSnapshot};
use std::path::Path;

pub struct StatusCache<G> {
    git: G,
    include_ignored: bool,
    root: Option<RepoRoot>,
    snapshot: StatusSnapshot,
}

impl<G: GitRunner> StatusCache<G> {
    pub fn new(git: G, include_ignored: bool) -> Self {
        StatusCache {
            git,
            include_ignored,
            root: None,
            snapshot: StatusSnapshot::default(),
        }
    }

    pub fn root(&self) -> Option<&RepoRoot> {
        self.root.as_ref()
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Forget the current root and its snapshot
    pub fn clear(&mut self) {
        self.root = None;
        self.snapshot = StatusSnapshot::default();
    }

    /// Make `root` the current root and rebuild its snapshot from git.
    ///
    /// When the status query fails the snapshot is left empty; the failure is logged.
    pub fn refresh(&mut self, root: RepoRoot) {
        let mut args = vec!["status", "--porcelain", "-u"];
        if self.include_ignored {
            args.push("--ignored");
        }

        let snapshot = match self.git.run(root.as_path(), &args) {
            Ok(output) => StatusSnapshot::from_porcelain(&output),
            Err(e) => {
                log::debug!("Status unavailable for {root}: {e}");
                StatusSnapshot::default()
            }
        };

        match snapshot.taken_at() {
            Some(taken_at) => log::debug!(
                "Cached {} status lines for {root} at {}",
                snapshot.len(),
                taken_at.to_rfc3339()
            ),
            None => log::debug!("Cached no status lines for {root}"),
        }
        self.root = Some(root);
        self.snapshot = snapshot;
    }

    /// First status line, in scan priority order, that applies to `path`.
    ///
    /// `path` is made relative to `root`; paths outside `root` never match.
    pub fn lookup(&self, root: &RepoRoot, path: &Path, is_directory: bool) -> Option<&StatusLine> {
        if self.snapshot.is_empty() {
            return None;
        }

        let relative = root.relative(path)?;
        if relative.is_empty() {
            return None;
        }

        self.snapshot.find(&relative, is_directory)
    }
}
