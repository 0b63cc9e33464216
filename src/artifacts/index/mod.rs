//! Staging index
//!
//! The pending-change set accumulated between commits: blob ids staged for
//! addition plus paths staged for removal. A path is never present in both
//! sets at once; every mutator restores that invariant. The whole index is
//! cleared atomically when a commit succeeds.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingIndex {
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
}

impl StagingIndex {
    /// Record a pending addition, clearing any removal mark for the path
    pub fn stage_addition(&mut self, path: PathBuf, oid: ObjectId) {
        self.removals.remove(&path);
        self.additions.insert(path, oid);
    }

    /// Record a pending removal, clearing any staged addition for the path
    pub fn stage_removal(&mut self, path: PathBuf) {
        self.additions.remove(&path);
        self.removals.insert(path);
    }

    /// Drop a staged addition; returns whether one was present
    pub fn unstage(&mut self, path: &Path) -> bool {
        self.additions.remove(path).is_some()
    }

    /// Drop a removal mark; returns whether one was present
    pub fn clear_removal(&mut self, path: &Path) -> bool {
        self.removals.remove(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.additions.contains_key(path)
    }

    pub fn is_pending_removal(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    pub fn staged_oid(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }

    /// True when there is nothing to commit: no additions and no removals
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    /// Build the snapshot of the next commit: the given base overlaid with
    /// the staged additions, minus the staged removals.
    ///
    /// Always allocates a fresh mapping so the resulting commit never
    /// aliases its parent's snapshot.
    pub fn apply_to(&self, base: &BTreeMap<PathBuf, ObjectId>) -> BTreeMap<PathBuf, ObjectId> {
        let mut tracked = base.clone();

        for (path, oid) in &self.additions {
            tracked.insert(path.clone(), oid.clone());
        }
        for path in &self.removals {
            tracked.remove(path);
        }

        tracked
    }
}
