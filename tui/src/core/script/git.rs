// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, InlineString, ItemsOwned, Run, command};
use std::path::PathBuf;
use tokio::process::Command;

/// This is a type alias for the result of a git command. The tuple contains:
/// 1. The result of the command.
/// 2. The command itself.
pub type ResultAndCommand<T> = (CommonResult<T>, Command);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoStatus {
    Dirty,
    Clean,
}

/// Runs `git status --porcelain` and reports whether the git repo is clean or not. It is
/// not clean if files exist that aren't committed yet, and are staged, unstaged,
/// untracked.
pub async fn try_is_working_directory_clean() -> ResultAndCommand<RepoStatus> {
    let mut cmd = command!(
        program => "git",
        args => "status", "--porcelain"
    );

    let res_output = cmd.run().await;
    let Ok(output) = res_output else {
        let report = res_output.unwrap_err();
        let err = Err(report);
        return (err, cmd);
    };

    let status = if output.is_empty() {
        RepoStatus::Clean
    } else {
        RepoStatus::Dirty
    };

    (Ok(status), cmd)
}

pub async fn try_get_current_branch_name() -> ResultAndCommand<InlineString> {
    let mut cmd = command!(
        program => "git",
        args => "branch", "--show-current",
    );

    let res_output = cmd.run().await;
    let Ok(output) = res_output else {
        let report = res_output.unwrap_err();
        let err = Err(report);
        return (err, cmd);
    };

    let current_branch = String::from_utf8_lossy(&output)
        .trim_end_matches('\n')
        .to_string();

    (Ok(current_branch.into()), cmd)
}

pub async fn try_checkout_existing_local_branch(
    branch_name: &str,
) -> ResultAndCommand<()> {
    let mut cmd = command!(
        program => "git",
        args => "checkout", branch_name
    );

    let res_output = cmd.run().await;
    let Ok(_) = res_output else {
        let report = res_output.unwrap_err();
        let err = Err(report);
        return (err, cmd);
    };

    (Ok(()), cmd)
}

pub async fn try_create_and_switch_to_branch(branch_name: &str) -> ResultAndCommand<()> {
    let mut cmd = command!(
        program => "git",
        args => "checkout", "-b", branch_name
    );

    let res_output = cmd.run().await;
    let Ok(_) = res_output else {
        let report = res_output.unwrap_err();
        let err = Err(report);
        return (err, cmd);
    };

    (Ok(()), cmd)
}

pub async fn try_delete_branches(branches: &ItemsOwned) -> ResultAndCommand<()> {
    let mut cmd = command!(
        program => "git",
        args => "branch", "-D",
        + items => branches
    );

    let res_output = cmd.run().await;
    let Ok(_) = res_output else {
        let report = res_output.unwrap_err();
        let err = Err(report);
        return (err, cmd);
    };

    (Ok(()), cmd)
}

/// This is a wrapper over `git branch` functionality.
pub mod local_branch_ops {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Information about local git branches:
    /// - The currently checked out branch.
    /// - List of other local branches (excluding the current one).
    #[derive(Debug, PartialEq, Eq, Clone)]
    pub struct LocalBranchInfo {
        pub current_branch: InlineString,
        pub other_branches: ItemsOwned,
    }

    #[derive(Debug, PartialEq, Eq, Clone)]
    pub enum BranchExists {
        Yes,
        No,
    }

    /// Get all the local branches as a tuple.
    ///
    /// 1. The first item in the tuple contains the current branch is prefixed with
    ///    `CURRENT_BRANCH_PREFIX`.
    ///
    ///   ```text
    ///   [
    ///     "(◕‿◕) main",
    ///     "tuifyasync",
    ///   ]
    ///   ```
    ///
    /// 2. The second item in the tuple contains [`LocalBranchInfo`].
    pub async fn try_get_local_branches()
    -> ResultAndCommand<(ItemsOwned, LocalBranchInfo)> {
        let (res, cmd) = try_get_branch_info().await;
        let Ok(info) = res else {
            let report = res.unwrap_err();
            return (Err(report), cmd);
        };

        let mut items_owned = ItemsOwned::with_capacity(info.other_branches.len() + 1);

        // Add current branch with prefix.
        items_owned.push(LocalBranchInfo::mark_branch_current(&info.current_branch));

        // Add other branches as is.
        items_owned.extend(info.other_branches.clone());

        let tuple = (items_owned, info);

        (Ok(tuple), cmd)
    }

    impl LocalBranchInfo {
        #[must_use]
        pub fn exists_locally(&self, branch_name: &str) -> BranchExists {
            if branch_name == self.current_branch.as_str()
                || self.other_branches.iter().any(|b| b == branch_name)
            {
                BranchExists::Yes
            } else {
                BranchExists::No
            }
        }

        /// ### Input
        /// ```text
        /// "main"
        /// ```
        ///
        /// ### Output
        /// ```text
        /// "(◕‿◕) main"
        /// ```
        #[must_use]
        pub fn mark_branch_current(branch_name: &str) -> InlineString {
            use std::fmt::Write;
            const CURRENT_BRANCH_PREFIX: &str = "(◕‿◕)";
            let mut acc = InlineString::new();
            // We don't care about the result of this operation.
            write!(acc, "{CURRENT_BRANCH_PREFIX} {branch_name}").ok();
            acc
        }

        /// ### Input
        /// ```text
        /// "(◕‿◕) main"
        /// ```
        ///
        /// ### Output
        /// ```text
        /// "main"
        /// ```
        #[must_use]
        pub fn trim_current_prefix_from_branch(branch: &str) -> &str {
            const CURRENT_BRANCH_PREFIX: &str = "(◕‿◕)";
            branch.trim_start_matches(CURRENT_BRANCH_PREFIX).trim()
        }
    }

    /// Returns information about local git branches:
    /// 1. The currently checked out branch.
    /// 2. List of other local branches (excluding the current one).
    async fn try_get_branch_info() -> ResultAndCommand<LocalBranchInfo> {
        // Get all branches first.
        let (res, cmd) = try_execute_git_command_to_get_branches().await;
        let Ok(all_branches) = res else {
            let report = res.unwrap_err();
            return (Err(report), cmd);
        };

        // Get current branch.
        let (res, cmd) = try_get_current_branch_name().await;
        let Ok(current_branch) = res else {
            let report = res.unwrap_err();
            return (Err(report), cmd);
        };

        // Filter out current branch from all branches to get other branches.
        let other_branches = all_branches
            .into_iter()
            .filter(|branch| branch != &current_branch)
            .collect();

        let info = LocalBranchInfo {
            current_branch,
            other_branches,
        };

        (Ok(info), cmd)
    }

    pub(super) async fn try_execute_git_command_to_get_branches()
    -> ResultAndCommand<ItemsOwned> {
        let mut cmd = command!(
            program => "git",
            args => "branch", "--format", "%(refname:short)",
        );

        let res_output = cmd.run().await;
        let Ok(output) = res_output else {
            let report = res_output.unwrap_err();
            let err = Err(report);
            return (err, cmd);
        };

        let output_string = String::from_utf8_lossy(&output);
        let mut branches = ItemsOwned::with_capacity(output_string.lines().count());
        for line in output_string.lines() {
            branches.push(line.into());
        }
        (Ok(branches), cmd)
    }
}

// ╔═══════════════════════════════════════════════════════════════════════════╗
// ║ Git file utilities (converted from r3bl-build-infra/src/common/git_utils.rs)
// ╚═══════════════════════════════════════════════════════════════════════════╝

/// Get list of changed files matching any of the provided extensions.
///
/// Priority:
/// 1. If there are staged or unstaged changes, return those files
/// 2. If working tree is clean, return files from most recent commit
///
/// # Arguments
///
/// * `extensions` - File extensions to filter by. If empty, returns all changed files.
///
/// # Examples
///
/// ```rust,no_run
/// use r3bl_tui::core::script::git::try_get_changed_files_by_ext;
///
/// # async fn example() {
/// // Get ALL changed files (no filtering)
/// let (files, _cmd) = try_get_changed_files_by_ext(&[]).await;
///
/// // Get changed Rust files only
/// let (files, _cmd) = try_get_changed_files_by_ext(&["rs"]).await;
///
/// // Get changed Rust and TOML files
/// let (files, _cmd) = try_get_changed_files_by_ext(&["rs", "toml"]).await;
/// # }
/// ```
pub async fn try_get_changed_files_by_ext(
    extensions: &[&str],
) -> ResultAndCommand<Vec<PathBuf>> {
    // First check for staged and unstaged files
    let (res_changed_files, cmd) = get_working_tree_changes(extensions).await;
    let Ok(changed_files) = res_changed_files else {
        let report = res_changed_files.unwrap_err();
        return (Err(report), cmd);
    };

    if !changed_files.is_empty() {
        return (Ok(changed_files), cmd);
    }

    // Working tree is clean, check most recent commit
    get_files_from_last_commit(extensions).await
}

/// Get files with staged or unstaged changes matching the extensions.
async fn get_working_tree_changes(extensions: &[&str]) -> ResultAndCommand<Vec<PathBuf>> {
    let mut cmd = command!(
        program => "git",
        args => "diff", "--name-only", "HEAD"
    );

    let res_output = cmd.run().await;
    let Ok(output) = res_output else {
        let report = res_output.unwrap_err();
        return (Err(report), cmd);
    };

    let files: Vec<PathBuf> = String::from_utf8_lossy(&output)
        .lines()
        .filter(|line| {
            // If extensions is empty, include all files
            if extensions.is_empty() {
                return true;
            }

            // Otherwise, filter by extension
            std::path::Path::new(line)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    extensions.iter().any(|&e| ext.eq_ignore_ascii_case(e))
                })
        })
        .map(PathBuf::from)
        .collect();

    (Ok(files), cmd)
}

/// Get files from the most recent commit matching the extensions.
async fn get_files_from_last_commit(
    extensions: &[&str],
) -> ResultAndCommand<Vec<PathBuf>> {
    let mut cmd = command!(
        program => "git",
        args => "diff-tree", "--no-commit-id", "--name-only", "-r", "HEAD"
    );

    let res_output = cmd.run().await;
    let Ok(output) = res_output else {
        let report = res_output.unwrap_err();
        return (Err(report), cmd);
    };

    let files: Vec<PathBuf> = String::from_utf8_lossy(&output)
        .lines()
        .filter(|line| {
            // If extensions is empty, include all files
            if extensions.is_empty() {
                return true;
            }

            // Otherwise, filter by extension
            std::path::Path::new(line)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    extensions.iter().any(|&e| ext.eq_ignore_ascii_case(e))
                })
        })
        .map(PathBuf::from)
        .collect();

    (Ok(files), cmd)
}

/// Check if we're in a git repository.
pub async fn try_is_git_repo() -> ResultAndCommand<bool> {
    let mut cmd = command!(
        program => "git",
        args => "rev-parse", "--git-dir"
    );

    let res_output = cmd.run().await;
    let is_repo = res_output.map(|_output| true).unwrap_or(false);

    (Ok(is_repo), cmd)
}
