use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::UserError;

impl Repository {
    /// Delete a branch pointer
    ///
    /// Only the pointer goes away — the commits it pointed at stay in the
    /// object store, and ancestry keeps working because it is derived from
    /// parent links, not from the branch table.
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(UserError::NoSuchBranch);
        };

        if &branch_name == self.state().current_branch() {
            anyhow::bail!(UserError::CannotRemoveCurrentBranch);
        }

        if !self.state_mut().remove_branch(&branch_name) {
            anyhow::bail!(UserError::NoSuchBranch);
        }

        self.save_state()
    }
}
