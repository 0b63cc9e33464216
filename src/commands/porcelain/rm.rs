use crate::areas::repository::Repository;
use crate::artifacts::core::UserError;
use std::path::PathBuf;

impl Repository {
    /// Stage a file for removal
    ///
    /// A head-tracked file loses its working copy and is marked for removal
    /// in the next commit. A file that is only staged is merely unstaged.
    /// Anything else is nothing to remove.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let file_path = PathBuf::from(path);
        let (_, head) = self.head_commit()?;

        if head.is_tracked(&file_path) {
            self.workspace().remove_file(&file_path)?;
            self.state_mut().staging_mut().stage_removal(file_path);
        } else if self.state().staging().is_staged(&file_path) {
            self.state_mut().staging_mut().unstage(&file_path);
        } else {
            anyhow::bail!(UserError::NothingToRemove);
        }

        self.save_state()
    }
}
