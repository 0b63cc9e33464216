use crate::areas::repository::Repository;
use crate::artifacts::core::UserError;
use std::io::Write;

impl Repository {
    /// Print the ids of every commit whose message matches exactly
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut found = false;

        for oid in self.state().commits() {
            let commit = self.load_commit(oid)?;
            if commit.message() == message {
                writeln!(self.writer(), "{}", oid)?;
                found = true;
            }
        }

        if !found {
            anyhow::bail!(UserError::NoCommitWithMessage);
        }

        Ok(())
    }
}
