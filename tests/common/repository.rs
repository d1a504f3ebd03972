//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories and driving git in them, so tests
//! run against the real porcelain output of the installed git.

#![allow(dead_code)]

use git_tree_status::core::error::{GitTreeStatusError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the canonical repository path. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of an entry inside the repository
    pub fn join(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

/// Creates a temporary directory that is not a git repository
pub fn setup_plain_dir() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().canonicalize()?;
    Ok(TestRepo { temp_dir, path })
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up local git configuration to avoid user prompts and signing.
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;

    git(&repo.path, &["init", "-q"])?;
    git(&repo.path, &["config", "user.name", "Test User"])?;
    git(&repo.path, &["config", "user.email", "test@example.com"])?;
    git(&repo.path, &["config", "commit.gpgsign", "false"])?;

    Ok(repo)
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Runs git with the given arguments in `repo_path`, ignoring its exit status
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitTreeStatusError::Io)?;
    Ok(())
}

/// Creates a file with specified content, creating parent directories as needed
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-q", "-m", message])
}

/// Writes a config file with single-character ASCII glyphs and returns its path
pub fn write_ascii_config(dir: &Path, show_ignored: bool) -> Result<PathBuf> {
    let path = dir.join("indicators.json");
    let content = format!(
        r#"{{
  "indicators": {{
    "Modified": {{ "glyph": "M" }},
    "Staged": {{ "glyph": "S" }},
    "Untracked": {{ "glyph": "?" }},
    "Renamed": {{ "glyph": "R" }},
    "Unmerged": {{ "glyph": "U" }},
    "Ignored": {{ "glyph": "I" }},
    "Unknown": {{ "glyph": "X" }}
  }},
  "column_length": 1,
  "show_ignored": {show_ignored}
}}"#
    );
    fs::write(&path, content)?;
    Ok(path)
}
