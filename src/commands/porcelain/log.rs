use crate::areas::repository::Repository;
use crate::artifacts::graph::history::History;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the active branch's commit chain, most recent first
    ///
    /// Merge commits contribute only their first parent, so the chain shows
    /// the lineage of the branch itself.
    pub fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.state().head_oid()?;
        let history = History::new(|oid: &ObjectId| self.load_commit(oid), Some(head_oid));

        for entry in history {
            let (oid, commit) = entry?;
            self.show_commit_block(&oid, &commit)?;
        }

        Ok(())
    }

    pub(crate) fn show_commit_block(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "Commit {}", oid.as_ref().yellow())?;
        writeln!(self.writer(), "{}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
