//! Commit history iteration
//!
//! `History` walks first-parent links from a tip commit back to the root:
//! a lazy, finite sequence that can be restarted by cloning the iterator.
//! Merge commits contribute only the lineage of the branch they were
//! created on, which is exactly what `log` prints.
//!
//! `is_ancestor` answers reachability over *all* parent links, so a commit
//! merged in from another branch still counts as an ancestor.

use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Lazy first-parent walk from a tip commit to the root
#[derive(Debug, Clone)]
pub struct History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    commit_loader: CommitLoaderFn,
    next_oid: Option<ObjectId>,
}

impl<CommitLoaderFn> History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    pub fn new(commit_loader: CommitLoaderFn, tip: Option<ObjectId>) -> Self {
        Self {
            commit_loader,
            next_oid: tip,
        }
    }
}

impl<CommitLoaderFn> Iterator for History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Commit>,
{
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next_oid.take()?;

        match (self.commit_loader)(&oid) {
            Ok(commit) => {
                self.next_oid = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            // stop after a load failure instead of retrying it forever
            Err(error) => Some(Err(error)),
        }
    }
}

/// Check whether `ancestor` is reachable from `descendant` via parent links
///
/// Breadth-first over all parents, so merge commits connect both of their
/// lineages. A commit is considered its own ancestor.
pub fn is_ancestor<SlimLoaderFn>(
    commit_loader: SlimLoaderFn,
    ancestor: &ObjectId,
    descendant: &ObjectId,
) -> anyhow::Result<bool>
where
    SlimLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    if ancestor == descendant {
        return Ok(true);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(descendant.clone());

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }

        if &current == ancestor {
            return Ok(true);
        }

        let slim_commit = commit_loader(&current)?;
        for parent in slim_commit.parents {
            queue.push_back(parent);
        }
    }

    Ok(false)
}
