use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::UserError;
use crate::artifacts::graph::merge_base::MergeBaseFinder;
use crate::artifacts::merge::{MergeOutcome, Resolution, conflict_content, resolve_path};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Merge another branch into the active one
    ///
    /// Flow: preconditions, merge-base computation, then either the trivial
    /// outcomes (already-ancestor, fast-forward) or the full three-way
    /// resolution. The three-way path plans every per-path resolution
    /// first, runs the untracked-file guard against the plan, and only then
    /// mutates the workspace — so a refused merge changes nothing.
    pub fn merge(&mut self, target_branch: &str) -> anyhow::Result<MergeOutcome> {
        if !self.state().staging().is_empty() {
            anyhow::bail!(UserError::UncommittedChanges);
        }

        let Ok(branch_name) = BranchName::try_parse(target_branch.to_string()) else {
            anyhow::bail!(UserError::NoSuchBranch);
        };
        let target_oid = self
            .state()
            .branch_target(&branch_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!(UserError::NoSuchBranch))?;

        if &branch_name == self.state().current_branch() {
            anyhow::bail!(UserError::SelfMerge);
        }

        let (head_oid, head) = self.head_commit()?;

        let base_oid = {
            let finder =
                MergeBaseFinder::new(|oid: &ObjectId| self.database().load_slim_commit(oid));
            finder.find(&head_oid, &target_oid)?.ok_or_else(|| {
                anyhow::anyhow!(
                    "No common ancestor between {} and {}",
                    head_oid,
                    target_oid
                )
            })?
        };

        if base_oid == target_oid {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(MergeOutcome::AlreadyAncestor);
        }

        if base_oid == head_oid {
            return self.fast_forward(target_oid, &head);
        }

        self.three_way_merge(&branch_name, head_oid, &head, base_oid, target_oid)
    }

    /// No divergent history: move the branch pointer and sync the tree
    fn fast_forward(
        &mut self,
        target_oid: ObjectId,
        head: &Commit,
    ) -> anyhow::Result<MergeOutcome> {
        let target = self.load_commit(&target_oid)?;
        self.switch_snapshot(head, &target)?;

        let current_branch = self.state().current_branch().clone();
        self.state_mut().advance_branch(&current_branch, target_oid);
        self.state_mut().staging_mut().clear();
        self.save_state()?;

        writeln!(self.writer(), "Current branch fast-forwarded.")?;

        Ok(MergeOutcome::FastForwarded)
    }

    fn three_way_merge(
        &mut self,
        branch_name: &BranchName,
        head_oid: ObjectId,
        head: &Commit,
        base_oid: ObjectId,
        target_oid: ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let base = self.load_commit(&base_oid)?;
        let target = self.load_commit(&target_oid)?;

        // classify every path tracked by any of the three snapshots
        let paths = head
            .tracked()
            .keys()
            .chain(base.tracked().keys())
            .chain(target.tracked().keys())
            .cloned()
            .collect::<BTreeSet<PathBuf>>();

        let mut resolutions = BTreeMap::new();
        for path in paths {
            if let Some(resolution) = resolve_path(
                head.tracked_oid(&path),
                base.tracked_oid(&path),
                target.tracked_oid(&path),
            ) {
                resolutions.insert(path, resolution);
            }
        }

        // guard: an untracked, unstaged working file the plan would
        // overwrite aborts the whole merge before anything mutates
        let workspace_files = self.workspace().list_files()?;
        let collides = workspace_files.iter().any(|file| {
            !head.is_tracked(file)
                && !self.state().staging().is_staged(file)
                && matches!(
                    resolutions.get(file),
                    Some(Resolution::TakeTarget(Some(_))) | Some(Resolution::Conflict { .. })
                )
        });
        if collides {
            anyhow::bail!(UserError::UntrackedInTheWay);
        }

        // apply the plan: object and workspace writes first, then the
        // staging mutations in one sweep
        let mut staged = Vec::new();
        let mut conflicts = Vec::new();
        for (path, resolution) in &resolutions {
            match resolution {
                Resolution::TakeTarget(Some(oid)) => {
                    let blob = self
                        .database()
                        .parse_object_as_blob(oid)?
                        .ok_or_else(|| anyhow::anyhow!("Object is not a blob: {}", oid))?;
                    self.workspace().write_file(path, blob.content())?;
                    staged.push((path.clone(), Some(oid.clone())));
                }
                Resolution::TakeTarget(None) => {
                    self.workspace().remove_file(path)?;
                    staged.push((path.clone(), None));
                }
                Resolution::Conflict {
                    head: ours,
                    target: theirs,
                } => {
                    let our_content = self.load_optional_blob(ours.as_ref())?;
                    let their_content = self.load_optional_blob(theirs.as_ref())?;
                    let content =
                        conflict_content(our_content.as_deref(), their_content.as_deref());

                    let blob = Blob::new(content.clone());
                    let blob_oid = blob.object_id()?;
                    self.database().store(blob)?;
                    self.workspace().write_file(path, &content)?;

                    staged.push((path.clone(), Some(blob_oid)));
                    conflicts.push(path.clone());
                }
            }
        }

        let staging = self.state_mut().staging_mut();
        for (path, oid) in staged {
            match oid {
                Some(oid) => staging.stage_addition(path, oid),
                None => staging.stage_removal(path),
            }
        }

        if conflicts.is_empty() {
            let current_branch = self.state().current_branch().clone();
            let message = format!("Merged {} into {}.", branch_name, current_branch);
            let merge_oid = self.write_commit(vec![head_oid, target_oid], message)?;

            Ok(MergeOutcome::Merged(merge_oid))
        } else {
            // leave the conflicts staged for an explicit commit
            self.save_state()?;
            writeln!(self.writer(), "Encountered a merge conflict.")?;

            Ok(MergeOutcome::Conflicts(conflicts))
        }
    }

    fn load_optional_blob(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<String>> {
        match oid {
            Some(oid) => {
                let blob = self
                    .database()
                    .parse_object_as_blob(oid)?
                    .ok_or_else(|| anyhow::anyhow!("Object is not a blob: {}", oid))?;
                Ok(Some(blob.into_content()))
            }
            None => Ok(None),
        }
    }
}
