//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application: the
//! pager adapter for long command output and the modeled user-facing error
//! type every porcelain command reports through.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};
use thiserror::Error;

/// Expected, modeled outcomes of porcelain commands
///
/// Each variant carries its exact user-facing message. The binary downcasts
/// `anyhow::Error` to this type and prints the message as a normal line —
/// these are not failures of the process, and persisted state is untouched
/// beyond what the command explicitly intended. Anything that is not a
/// `UserError` (I/O failures, corrupt state) is fatal and propagates as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("A gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("Not in an initialized gitlet directory.")]
    NotARepository,
    #[error("Incorrect operands.")]
    IncorrectOperands,
    #[error("File does not exist!")]
    FileNotFound,
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,
    #[error("No changes added to the commit.")]
    NoChanges,
    #[error("No reason to remove the file.")]
    NothingToRemove,
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,
    #[error("File does not exist in that commit.")]
    PathNotTracked,
    #[error("No commit with that id exists.")]
    UnknownCommit,
    #[error("No such branch exists.")]
    UnknownBranch,
    #[error("A branch with that name does not exist.")]
    NoSuchBranch,
    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,
    #[error("A branch with that name already exists.")]
    BranchExists,
    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,
    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedInTheWay,
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("Cannot merge a branch with itself.")]
    SelfMerge,
}

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this
/// wrapper adapts it to be compatible with Rust's standard I/O traits. Log
/// commands use it as a drop-in replacement for stdout on a terminal.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
