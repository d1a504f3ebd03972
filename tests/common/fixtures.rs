//! Predefined repository scenarios
//!
//! Each fixture leaves the working tree in a known porcelain state so tests can check
//! indicators against it.

#![allow(dead_code)]

use super::repository::*;
use git_tree_status::core::error::Result;

/// Scenario: one file of every common state
///
/// ```text
/// ?? dir/sub/file.txt
///  M initial.txt
/// A  staged.txt
/// ?? untracked.txt
/// !! debug.log        (only with --ignored)
/// ```
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    create_file(&repo.path, ".gitignore", "*.log\n")?;
    create_file(&repo.path, "dirty.txt", "clean\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    // Nothing below is committed
    create_file(&repo.path, "initial.txt", "modified content\n")?;
    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "untracked.txt", "untracked\n")?;
    create_file(&repo.path, "dir/sub/file.txt", "nested\n")?;
    create_file(&repo.path, "debug.log", "noise\n")?;

    Ok(repo)
}

/// Scenario: `conflict.txt` left unmerged by a failed merge (`UU conflict.txt`)
pub fn create_conflicted_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "conflict.txt", "base\n")?;
    git_add(&repo.path, "conflict.txt")?;
    git_commit(&repo.path, "Add conflict.txt")?;

    git(&repo.path, &["checkout", "-q", "-b", "feature"])?;
    create_file(&repo.path, "conflict.txt", "feature\n")?;
    git_add(&repo.path, "conflict.txt")?;
    git_commit(&repo.path, "Feature change")?;

    git(&repo.path, &["checkout", "-q", "-"])?;
    create_file(&repo.path, "conflict.txt", "mainline\n")?;
    git_add(&repo.path, "conflict.txt")?;
    git_commit(&repo.path, "Mainline change")?;

    git(&repo.path, &["merge", "feature"])?;
    create_file(&repo.path, "notes.txt", "notes\n")?;

    Ok(repo)
}

/// Scenario: paths git prints C-quoted
///
/// ```text
///  M "spaced name.txt"
/// ?? "caf\303\251.txt"
/// ?? "my dir/inner file.txt"
/// ?? "my notes.txt"
/// ?? plain.txt
/// ```
pub fn create_quoted_names_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "spaced name.txt", "committed\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "spaced name.txt", "changed\n")?;
    create_file(&repo.path, "plain.txt", "plain\n")?;
    create_file(&repo.path, "my notes.txt", "notes\n")?;
    create_file(&repo.path, "café.txt", "unicode\n")?;
    create_file(&repo.path, "my dir/inner file.txt", "nested\n")?;

    Ok(repo)
}

/// Scenario: `initial.txt` staged as renamed to `renamed.txt`
pub fn create_renamed_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["mv", "initial.txt", "renamed.txt"])?;
    Ok(repo)
}
