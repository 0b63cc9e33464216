//! Working-tree migration planning
//!
//! A `Migration` is the full plan for moving the working directory from the
//! snapshot it currently reflects to a target snapshot. The plan is computed
//! up front so the untracked-file guard can inspect it before a single file
//! is touched: either the whole migration applies or nothing does.

use crate::artifacts::index::StagingIndex;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Planned working-tree transition between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    /// Every path the target snapshot tracks, written or overwritten
    writes: BTreeMap<PathBuf, ObjectId>,
    /// Paths tracked by the current snapshot but not by the target
    deletes: BTreeSet<PathBuf>,
}

impl Migration {
    /// Plan the move from `current` to `target`
    ///
    /// Deletes every path only the current snapshot tracks and writes every
    /// path the target tracks, dirty working copies included — checkout
    /// restores the target snapshot verbatim.
    pub fn between(
        current: &BTreeMap<PathBuf, ObjectId>,
        target: &BTreeMap<PathBuf, ObjectId>,
    ) -> Self {
        let deletes = current
            .keys()
            .filter(|path| !target.contains_key(*path))
            .cloned()
            .collect();

        Migration {
            writes: target.clone(),
            deletes,
        }
    }

    pub fn writes(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.writes
    }

    pub fn deletes(&self) -> &BTreeSet<PathBuf> {
        &self.deletes
    }

    /// Working-directory files this migration would overwrite even though
    /// the current snapshot does not own them
    ///
    /// A file collides when it exists in the workspace, is neither tracked
    /// by the current snapshot nor staged, and the plan writes to its path.
    /// Any collision aborts the whole operation before mutation starts.
    pub fn untracked_collisions(
        &self,
        workspace_files: &[PathBuf],
        current: &BTreeMap<PathBuf, ObjectId>,
        staging: &StagingIndex,
    ) -> Vec<PathBuf> {
        workspace_files
            .iter()
            .filter(|path| {
                !current.contains_key(*path)
                    && !staging.is_staged(path)
                    && self.writes.contains_key(*path)
            })
            .cloned()
            .collect()
    }
}
