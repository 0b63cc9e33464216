use crate::areas::REPOSITORY_DIR;
use crate::areas::database::Database;
use crate::areas::repository::Repository;
use crate::areas::state::{RepositoryState, STATE_FILE_NAME};
use crate::artifacts::core::UserError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::fs;
use std::path::Path;

impl Repository {
    /// Initialize a new repository rooted at `path`
    ///
    /// Creates the repository directory, the object store, the root commit
    /// and the state record with the default branch pointing at it. The
    /// only constructor path that does not go through [`Repository::open`].
    pub fn init(path: &str) -> anyhow::Result<()> {
        let path = Path::new(path);
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let repository_path = path.join(REPOSITORY_DIR);

        if repository_path.exists() {
            anyhow::bail!(UserError::AlreadyInitialized);
        }

        let objects_path = repository_path.join("objects");
        fs::create_dir_all(&objects_path).context("Failed to create objects directory")?;
        let database = Database::new(objects_path.into_boxed_path());

        let root_commit = Commit::root(chrono::Local::now().fixed_offset());
        let root_oid = root_commit.object_id()?;
        database.store(root_commit)?;

        let state = RepositoryState::bootstrap(root_oid)?;
        state.save(&repository_path.join(STATE_FILE_NAME))?;

        Ok(())
    }
}
