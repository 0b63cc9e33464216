use crate::areas::repository::Repository;
use crate::artifacts::core::UserError;

impl Repository {
    /// Move the current branch to an arbitrary commit and sync the tree
    ///
    /// Same untracked-file guard and working-directory sync as a branch
    /// switch, but the branch keeps its name — only its pointer moves.
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        let target_oid = self
            .state()
            .resolve_commit_prefix(commit_id)
            .ok_or_else(|| anyhow::anyhow!(UserError::UnknownCommit))?;

        let (_, head) = self.head_commit()?;
        let target = self.load_commit(&target_oid)?;

        self.switch_snapshot(&head, &target)?;

        let current_branch = self.state().current_branch().clone();
        self.state_mut().advance_branch(&current_branch, target_oid);
        self.state_mut().staging_mut().clear();

        self.save_state()
    }
}
