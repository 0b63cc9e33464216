//! Merge base computation
//!
//! Finds the best common ancestor of two branch tips, the base of every
//! three-way merge. The base is derived purely from the parent links inside
//! the commits themselves.
//!
//! ## Algorithm
//!
//! Two phases:
//!
//! 1. **Find all common ancestors.** A bidirectional traversal explores the
//!    history of both tips, processing commits newest-first via a priority
//!    queue keyed on the commit timestamp. Each commit is marked with the
//!    side(s) it was reached from; a commit reached from both sides is a
//!    common ancestor, and its parents are marked stale to prune the walk.
//! 2. **Filter to best common ancestors.** A common ancestor is *best* when
//!    it is not an ancestor of any other common ancestor. Each candidate is
//!    checked against the others with the same traversal and redundant ones
//!    are dropped.
//!
//! Because merge commits record both parents, repeated merges of the same
//! branch pair (criss-cross histories) can leave several best common
//! ancestors; the finder then picks the newest one so merges stay
//! deterministic.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{BinaryHeap, HashMap, HashSet};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b0000;
        const VISITED_FROM_SOURCE = 0b0001;
        const VISITED_FROM_TARGET = 0b0010;
        const VISITED_FROM_BOTH =
            Self::VISITED_FROM_SOURCE.bits() | Self::VISITED_FROM_TARGET.bits();
        // commits whose ancestors no longer need processing
        const STALE = 0b0100;
        // commits identified as common ancestors
        const RESULT = 0b1000;
    }
}

/// Finds the best common ancestor between two commits
///
/// Generic over a loader function so the algorithm works against any
/// backing store — the object database in production, an in-memory graph in
/// tests. The loader must return a `SlimCommit` with an empty parents
/// vector for root commits.
pub struct MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find the best common ancestor of `source` and `target`
    ///
    /// # Returns
    ///
    /// - `Some(oid)` — the merge base; when a criss-cross history leaves
    ///   several candidates, the newest one
    /// - `None` — no common ancestor (disjoint histories)
    pub fn find(&self, source: &ObjectId, target: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        let target_ids = HashSet::from([target]);
        let common_ancestors = self
            .common_ancestors(source, &target_ids)?
            .into_keys()
            .collect::<HashSet<_>>();

        if common_ancestors.is_empty() {
            return Ok(None);
        }

        // TODO: remove cloning and optimize to avoid unnecessary iterations
        let mut redundant_ancestors = HashSet::<ObjectId>::new();
        for commit in &common_ancestors {
            if redundant_ancestors.contains(commit) {
                continue;
            }

            let others = common_ancestors
                .iter()
                .filter(|other| *other != commit && !redundant_ancestors.contains(*other))
                .collect::<HashSet<_>>();
            if others.is_empty() {
                continue;
            }

            let common_states = self.common_ancestors(commit, &others)?;

            if common_states
                .get(commit)
                .unwrap_or(&VisitState::NONE)
                .contains(VisitState::VISITED_FROM_TARGET)
            {
                redundant_ancestors.insert(commit.clone());
            }

            for other in others {
                if common_states
                    .get(other)
                    .unwrap_or(&VisitState::NONE)
                    .contains(VisitState::VISITED_FROM_SOURCE)
                {
                    redundant_ancestors.insert(other.clone());
                }
            }
        }

        let best_common_ancestors = common_ancestors
            .into_iter()
            .filter(|commit| !redundant_ancestors.contains(commit))
            .collect::<Vec<_>>();

        self.pick_newest(best_common_ancestors)
    }

    /// Deterministic choice among equally good candidates: newest first,
    /// ties broken by id order
    fn pick_newest(&self, candidates: Vec<ObjectId>) -> anyhow::Result<Option<ObjectId>> {
        let mut best: Option<SlimCommit> = None;

        for candidate in candidates {
            let commit = (self.commit_loader)(&candidate)?;
            let newer = match &best {
                Some(current) => {
                    (commit.timestamp, &commit.oid) > (current.timestamp, &current.oid)
                }
                None => true,
            };
            if newer {
                best = Some(commit);
            }
        }

        Ok(best.map(|commit| commit.oid))
    }

    /// Find all common ancestors of a source commit and a set of targets
    ///
    /// Returns commit ids mapped to their visit states, filtered down to
    /// non-stale commits that were reached from both sides.
    fn common_ancestors(
        &self,
        source: &ObjectId,
        targets: &HashSet<&ObjectId>,
    ) -> anyhow::Result<HashMap<ObjectId, VisitState>> {
        if targets.contains(source) {
            // the source commit itself is the common ancestor
            return Ok(HashMap::from([(source.clone(), VisitState::RESULT)]));
        }

        let mut ancestors_states = HashMap::<ObjectId, VisitState>::new();
        let mut priority_queue = BinaryHeap::new();

        // seed both sides; the queue processes newest commits first
        let source_commit = (self.commit_loader)(source)?;
        ancestors_states.insert(source.clone(), VisitState::VISITED_FROM_SOURCE);
        priority_queue.push((source_commit.timestamp, source.clone()));

        for &target in targets {
            let target_commit = (self.commit_loader)(target)?;
            ancestors_states.insert(target.clone(), VisitState::VISITED_FROM_TARGET);
            priority_queue.push((target_commit.timestamp, target.clone()));
        }

        while let Some((_, commit_id)) = priority_queue.pop() {
            let current_state = ancestors_states
                .get(&commit_id)
                .copied()
                .unwrap_or(VisitState::NONE);

            if current_state.contains(VisitState::STALE) {
                continue;
            }

            let is_common_ancestor = current_state.contains(VisitState::VISITED_FROM_BOTH);
            if is_common_ancestor {
                ancestors_states
                    .entry(commit_id.clone())
                    .and_modify(|state| *state |= VisitState::RESULT);
            }

            let current_commit = (self.commit_loader)(&commit_id)?;

            for parent_id in current_commit.parents {
                let parent_commit = (self.commit_loader)(&parent_id)?;
                let parent_state = ancestors_states
                    .get(&parent_id)
                    .copied()
                    .unwrap_or(VisitState::NONE);

                // parents inherit the sides their child was reached from
                let mut new_state = parent_state | current_state;
                if is_common_ancestor {
                    new_state |= VisitState::STALE;
                }

                if !parent_state.contains(current_state) {
                    ancestors_states.insert(parent_id.clone(), new_state);
                    priority_queue.push((parent_commit.timestamp, parent_id));
                }
            }
        }

        Ok(ancestors_states
            .into_iter()
            .filter(|(_, state)| {
                !state.contains(VisitState::STALE) && state.contains(VisitState::RESULT)
            })
            .collect())
    }
}
