//! Invocation of the external `git` binary.
//!
//! All status information comes from two git queries, `rev-parse --show-toplevel` and
//! `status --porcelain`. They run through the [`GitRunner`] trait so the indicator core
//! can be driven by a scripted runner in tests.
//!
//! # Public API
//! - [`GitRunner`]: Run a git command in a working directory and capture stdout
//! - [`SystemGit`]: Runner backed by `std::process::Command`

use crate::core::error::{GitTreeStatusError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs git commands and returns their standard output
pub trait GitRunner {
    /// Run `git <args>` with `cwd` as working directory.
    ///
    /// A non-zero exit status is an error; stderr is never part of the returned text.
    fn run(&self, cwd: &Path, args: &[&str]) -> Result<String>;
}

impl<G: GitRunner + ?Sized> GitRunner for &G {
    fn run(&self, cwd: &Path, args: &[&str]) -> Result<String> {
        (**self).run(cwd, args)
    }
}

/// Runner spawning the git binary found on `PATH`, or an explicit program
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        SystemGit {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, cwd: &Path, args: &[&str]) -> Result<String> {
        log::debug!("Running {} {} in {}", self.program.display(), args.join(" "), cwd.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(GitTreeStatusError::git_spawn_failed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitTreeStatusError::git_command_failed(args, stderr.trim()));
        }

        if !output.stderr.is_empty() {
            log::debug!("git stderr: {}", String::from_utf8_lossy(&output.stderr).trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
