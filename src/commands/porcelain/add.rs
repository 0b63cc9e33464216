use crate::areas::repository::Repository;
use crate::artifacts::core::UserError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::path::PathBuf;

impl Repository {
    /// Stage a workspace file for the next commit
    ///
    /// Re-adding a file marked for removal clears that mark. Staging content
    /// identical to what head already tracks is a no-op and drops any stale
    /// staged entry, so commits never record a change that is not one.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let file_path = PathBuf::from(path);

        if !self.workspace().file_exists(&file_path) {
            anyhow::bail!(UserError::FileNotFound);
        }

        let content = self.workspace().read_file(&file_path)?;
        let blob = Blob::new(content);
        let blob_oid = blob.object_id()?;

        let (_, head) = self.head_commit()?;
        let unchanged = head.tracked_oid(&file_path) == Some(&blob_oid);

        if !unchanged {
            self.database().store(blob)?;
        }

        let staging = self.state_mut().staging_mut();
        staging.clear_removal(&file_path);
        if unchanged {
            staging.unstage(&file_path);
        } else {
            staging.stage_addition(file_path, blob_oid);
        }

        self.save_state()
    }
}
