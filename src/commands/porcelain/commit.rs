use crate::areas::repository::Repository;
use crate::artifacts::core::UserError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let message = message.trim();
        if message.is_empty() {
            anyhow::bail!(UserError::EmptyCommitMessage);
        }

        let (head_oid, _) = self.head_commit()?;
        self.write_commit(vec![head_oid], message.to_string())?;

        Ok(())
    }

    /// Shared trunk of `commit` and the merge auto-commit
    ///
    /// Builds the next snapshot from head plus the staging index, stores the
    /// commit object, advances the active branch and clears the staging
    /// index — then persists the state record exactly once. Blobs were
    /// already stored at staging time, so the commit object write is the
    /// single point of publication: a crash before it leaves the previous
    /// state intact, a crash after it leaves an unreachable object at worst.
    pub(crate) fn write_commit(
        &mut self,
        parents: Vec<ObjectId>,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        if self.state().staging().is_empty() {
            anyhow::bail!(UserError::NoChanges);
        }

        let (_, head) = self.head_commit()?;
        let tracked = self.state().staging().apply_to(head.tracked());

        let commit = Commit::new(
            parents,
            tracked,
            message,
            chrono::Local::now().fixed_offset(),
        );
        let commit_oid = commit.object_id()?;
        self.database().store(commit)?;

        let current_branch = self.state().current_branch().clone();
        let state = self.state_mut();
        state.record_commit(commit_oid.clone());
        state.advance_branch(&current_branch, commit_oid.clone());
        state.staging_mut().clear();

        self.save_state()?;

        Ok(commit_oid)
    }
}
