use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::UserError;
use crate::artifacts::objects::commit::Commit;
use std::path::Path;

impl Repository {
    /// Restore one file to the version the head commit tracks
    pub fn checkout_file_from_head(&mut self, path: &str) -> anyhow::Result<()> {
        let (_, head) = self.head_commit()?;

        self.restore_file(&head, Path::new(path))
    }

    /// Restore one file to the version a given commit tracks
    ///
    /// The commit id may be any unambiguous prefix.
    pub fn checkout_file(&mut self, commit_id: &str, path: &str) -> anyhow::Result<()> {
        let commit_oid = self
            .state()
            .resolve_commit_prefix(commit_id)
            .ok_or_else(|| anyhow::anyhow!(UserError::UnknownCommit))?;
        let commit = self.load_commit(&commit_oid)?;

        self.restore_file(&commit, Path::new(path))
    }

    /// Switch the working directory to another branch
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(UserError::UnknownBranch);
        };

        let target_oid = self
            .state()
            .branch_target(&branch_name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!(UserError::UnknownBranch))?;

        if &branch_name == self.state().current_branch() {
            anyhow::bail!(UserError::AlreadyOnBranch);
        }

        let (_, head) = self.head_commit()?;
        let target = self.load_commit(&target_oid)?;

        self.switch_snapshot(&head, &target)?;

        self.state_mut().set_current_branch(branch_name);
        self.state_mut().staging_mut().clear();

        self.save_state()
    }

    /// Move the working tree from one snapshot to another
    ///
    /// Shared by branch switch, reset and the fast-forward merge. The
    /// untracked-file guard runs against the planned migration before any
    /// file is touched, so a refusal leaves the workspace untouched.
    pub(crate) fn switch_snapshot(&self, head: &Commit, target: &Commit) -> anyhow::Result<()> {
        let migration = Migration::between(head.tracked(), target.tracked());

        let workspace_files = self.workspace().list_files()?;
        let collisions = migration.untracked_collisions(
            &workspace_files,
            head.tracked(),
            self.state().staging(),
        );
        if !collisions.is_empty() {
            anyhow::bail!(UserError::UntrackedInTheWay);
        }

        self.workspace().apply_migration(&migration, self.database())
    }

    fn restore_file(&self, commit: &Commit, path: &Path) -> anyhow::Result<()> {
        let blob_oid = commit
            .tracked_oid(path)
            .ok_or_else(|| anyhow::anyhow!(UserError::PathNotTracked))?;
        let blob = self
            .database()
            .parse_object_as_blob(blob_oid)?
            .ok_or_else(|| anyhow::anyhow!("Object is not a blob: {}", blob_oid))?;

        self.workspace().write_file(path, blob.content())
    }
}
