//! Repository-state record
//!
//! The small mutable counterpart of the append-only object store: the
//! branch table, the active branch, the staging index and the set of all
//! known commit hashes. One record per repository, stored as a single JSON
//! file under the repository directory.
//!
//! Lifecycle contract: a command loads the record once when it starts,
//! mutates it in memory and persists it once at the end. The save is an
//! atomic temp-write/fsync/rename under an advisory exclusive lock, so a
//! crash mid-command leaves the previously persisted record intact.
//! Concurrent commands against the same repository directory are the
//! caller's responsibility to serialize.

use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::index::StagingIndex;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use file_guard::Lock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

/// Name of the state record file inside the repository directory
pub const STATE_FILE_NAME: &str = "state";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    current_branch: BranchName,
    branches: BTreeMap<BranchName, ObjectId>,
    staging: StagingIndex,
    commits: BTreeSet<ObjectId>,
}

impl RepositoryState {
    /// The state a freshly initialized repository starts with: the default
    /// branch pointing at the root commit
    pub fn bootstrap(root_commit_oid: ObjectId) -> anyhow::Result<Self> {
        let current_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;

        Ok(RepositoryState {
            branches: BTreeMap::from([(current_branch.clone(), root_commit_oid.clone())]),
            current_branch,
            staging: StagingIndex::default(),
            commits: BTreeSet::from([root_commit_oid]),
        })
    }

    pub fn load(state_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(state_path).context(format!(
            "Unable to read repository state {}",
            state_path.display()
        ))?;

        serde_json::from_str(&content).context(format!(
            "Corrupt repository state {}",
            state_path.display()
        ))
    }

    pub fn save(&self, state_path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(self).context("Unable to encode repository state")?;

        // hold an advisory lock on the published record for the whole
        // write-then-rename sequence
        let mut state_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(state_path)
            .context(format!(
                "Unable to open repository state {}",
                state_path.display()
            ))?;
        let _lock = file_guard::lock(&mut state_file, Lock::Exclusive, 0, 1)?;

        let temp_path = state_path.with_file_name(Self::generate_temp_name());
        let mut temp_file = std::fs::File::create(&temp_path).context(format!(
            "Unable to create temporary state file {}",
            temp_path.display()
        ))?;
        temp_file
            .write_all(&content)
            .context("Unable to write repository state")?;
        temp_file
            .sync_all()
            .context("Unable to sync repository state")?;

        std::fs::rename(&temp_path, state_path).context(format!(
            "Unable to publish repository state {}",
            state_path.display()
        ))?;

        Ok(())
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn set_current_branch(&mut self, branch: BranchName) {
        self.current_branch = branch;
    }

    pub fn branches(&self) -> &BTreeMap<BranchName, ObjectId> {
        &self.branches
    }

    pub fn branch_target(&self, branch: &BranchName) -> Option<&ObjectId> {
        self.branches.get(branch)
    }

    /// Commit the active branch points at
    ///
    /// A branch table without an entry for the active branch is corruption,
    /// not a modeled outcome.
    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        self.branches
            .get(&self.current_branch)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Corrupt repository state: active branch '{}' has no target commit",
                    self.current_branch
                )
            })
    }

    pub fn has_branch(&self, branch: &BranchName) -> bool {
        self.branches.contains_key(branch)
    }

    pub fn create_branch(&mut self, branch: BranchName, target: ObjectId) {
        self.branches.insert(branch, target);
    }

    pub fn remove_branch(&mut self, branch: &BranchName) -> bool {
        self.branches.remove(branch).is_some()
    }

    /// Move a branch pointer to a new commit
    pub fn advance_branch(&mut self, branch: &BranchName, target: ObjectId) {
        self.branches.insert(branch.clone(), target);
    }

    pub fn staging(&self) -> &StagingIndex {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut StagingIndex {
        &mut self.staging
    }

    pub fn record_commit(&mut self, oid: ObjectId) {
        self.commits.insert(oid);
    }

    pub fn commits(&self) -> &BTreeSet<ObjectId> {
        &self.commits
    }

    /// Resolve a commit-id prefix against the known-commit set
    ///
    /// Returns the id only for a unique match; an unknown or ambiguous
    /// prefix resolves to nothing.
    pub fn resolve_commit_prefix(&self, prefix: &str) -> Option<ObjectId> {
        let mut matches = self.commits.iter().filter(|oid| oid.has_prefix(prefix));

        match (matches.next(), matches.next()) {
            (Some(oid), None) => Some(oid.clone()),
            _ => None,
        }
    }

    fn generate_temp_name() -> String {
        format!("tmp-state-{}", fake::rand::random::<u32>())
    }
}
