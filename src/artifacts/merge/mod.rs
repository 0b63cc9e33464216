//! Three-way merge resolution
//!
//! The per-path decision table of the merge engine plus conflict
//! materialization. Given the blob ids a path has in the head, base and
//! target snapshots, `resolve_path` classifies it into one of the three-way
//! outcomes; conflicting paths are rendered with `conflict_content` so both
//! divergent versions survive for manual resolution.
//!
//! The table is pure — it never touches the workspace — so the merge
//! porcelain can compute the full plan, run the untracked-file guard
//! against it, and only then start mutating anything.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Result of a merge operation, rendered to text by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The target branch is already part of the current history; nothing to do
    AlreadyAncestor,
    /// No divergent history existed: the branch pointer was moved, no commit
    /// object was created
    FastForwarded,
    /// Clean three-way merge, auto-committed
    Merged(ObjectId),
    /// One or more paths conflicted: the working tree and staging index hold
    /// the materialized conflicts, no commit was created
    Conflicts(Vec<PathBuf>),
}

/// Per-path verdict of the decision table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Make the path match the target snapshot: write the blob and stage it,
    /// or delete the file and stage the removal when `None`
    TakeTarget(Option<ObjectId>),
    /// Both sides changed the path in incompatible ways; materialize a
    /// conflict-marked file from the two versions
    Conflict {
        head: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Classify one path by its blob ids in the head, base and target snapshots
///
/// `None` for an id means the snapshot does not track the path. Rows are
/// evaluated top to bottom, first match wins; `None` as the overall result
/// means the path needs no action (the sides already agree, or only head
/// changed it).
pub fn resolve_path(
    head: Option<&ObjectId>,
    base: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> Option<Resolution> {
    // head kept the base version, target changed it (or dropped it)
    if head == base && target != base {
        return Some(Resolution::TakeTarget(target.cloned()));
    }
    // the path only ever existed in target
    if head.is_none() && base.is_none() && target.is_some() {
        return Some(Resolution::TakeTarget(target.cloned()));
    }
    // head kept the base version, target deleted the path
    if base.is_some() && head == base && target.is_none() {
        return Some(Resolution::TakeTarget(None));
    }
    // both sides agree, including both absent
    if head == target {
        return None;
    }
    // only head changed the path; keep it
    if target == base && head != base {
        return None;
    }

    Some(Resolution::Conflict {
        head: head.cloned(),
        target: target.cloned(),
    })
}

/// Render the conflict-marked file content for a path
///
/// An absent side contributes nothing between its markers; present content
/// is newline-terminated so the next marker starts on its own line.
pub fn conflict_content(head: Option<&str>, target: Option<&str>) -> String {
    let mut content = String::from("<<<<<<< HEAD\n");
    if let Some(head) = head {
        content.push_str(head);
        if !head.is_empty() && !head.ends_with('\n') {
            content.push('\n');
        }
    }
    content.push_str("=======\n");
    if let Some(target) = target {
        content.push_str(target);
        if !target.is_empty() && !target.ends_with('\n') {
            content.push('\n');
        }
    }
    content.push_str(">>>>>>>\n");
    content
}
