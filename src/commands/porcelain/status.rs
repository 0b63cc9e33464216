use crate::areas::repository::Repository;
use crate::artifacts::status::StatusReport;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let report = StatusReport::gather(
            self.state().branches(),
            self.state().current_branch(),
            self.state().staging(),
        );

        writeln!(self.writer(), "=== Branches ===")?;
        for (branch, active) in report.branches() {
            if active {
                writeln!(self.writer(), "*{}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "{}", branch)?;
            }
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Staged Files ===")?;
        for path in report.staged() {
            writeln!(self.writer(), "{}", path.display())?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Removed Files ===")?;
        for path in report.removed() {
            writeln!(self.writer(), "{}", path.display())?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Modifications Not Staged For Commit ===")?;
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Untracked Files ===")?;
        writeln!(self.writer())?;

        Ok(())
    }
}
