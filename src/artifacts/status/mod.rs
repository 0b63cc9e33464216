//! Repository status report
//!
//! The data `status` exposes, separated from its rendering: branch names
//! with the active one marked, staged additions and staged removals, each
//! section in name order.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::index::StagingIndex;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    current_branch: BranchName,
    branches: Vec<BranchName>,
    staged: Vec<PathBuf>,
    removed: Vec<PathBuf>,
}

impl StatusReport {
    pub fn gather(
        branches: &BTreeMap<BranchName, ObjectId>,
        current_branch: &BranchName,
        staging: &StagingIndex,
    ) -> Self {
        StatusReport {
            current_branch: current_branch.clone(),
            branches: branches.keys().cloned().collect(),
            staged: staging.additions().keys().cloned().collect(),
            removed: staging.removals().iter().cloned().collect(),
        }
    }

    /// Branch names in lexicographic order, paired with the active flag
    pub fn branches(&self) -> impl Iterator<Item = (&BranchName, bool)> {
        self.branches
            .iter()
            .map(|branch| (branch, branch == &self.current_branch))
    }

    pub fn staged(&self) -> &[PathBuf] {
        &self.staged
    }

    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }
}
