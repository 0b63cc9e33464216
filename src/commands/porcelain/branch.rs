use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::UserError;

impl Repository {
    /// Create a new branch pointing at the current head
    ///
    /// The branch is only a pointer; nothing else changes, and the working
    /// directory stays on the active branch.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(UserError::IncorrectOperands);
        };

        if self.state().has_branch(&branch_name) {
            anyhow::bail!(UserError::BranchExists);
        }

        let head_oid = self.state().head_oid()?;
        self.state_mut().create_branch(branch_name, head_oid);

        self.save_state()
    }
}
