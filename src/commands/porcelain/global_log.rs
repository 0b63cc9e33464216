use crate::areas::repository::Repository;

impl Repository {
    /// Print every commit the repository knows about, in no particular order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for oid in self.state().commits() {
            let commit = self.load_commit(oid)?;
            self.show_commit_block(oid, &commit)?;
        }

        Ok(())
    }
}
