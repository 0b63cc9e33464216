use crate::areas::REPOSITORY_DIR;
use crate::areas::database::Database;
use crate::areas::state::{RepositoryState, STATE_FILE_NAME};
use crate::areas::workspace::Workspace;
use crate::artifacts::core::UserError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// One repository, explicitly threaded through every operation
///
/// Constructed from the persisted store at the start of a command, mutated
/// in memory, persisted once at the end — there is no ambient global state.
/// A later command must construct a fresh value; nothing here survives the
/// load-mutate-persist cycle.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    state: RepositoryState,
}

impl Repository {
    /// Open an existing repository rooted at `path`
    ///
    /// Fails with [`UserError::NotARepository`] when no repository has been
    /// initialized there.
    pub fn open(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let repository_path = path.join(REPOSITORY_DIR);

        if !repository_path.join(STATE_FILE_NAME).exists() {
            anyhow::bail!(UserError::NotARepository);
        }

        let state = RepositoryState::load(&repository_path.join(STATE_FILE_NAME))?;
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        // every branch must reference a commit the object store holds;
        // a dangling pointer is corruption, not something to repair
        for (branch, oid) in state.branches() {
            if !database.contains(oid) {
                anyhow::bail!(
                    "Corrupt repository: branch '{}' references missing commit {}",
                    branch,
                    oid
                );
            }
        }

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            state,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    /// Persist the in-memory state record; the single point every command
    /// calls exactly once on success
    pub fn save_state(&self) -> anyhow::Result<()> {
        self.state
            .save(&self.repository_path().join(STATE_FILE_NAME))
    }

    /// Load a commit object, treating a dangling reference as corruption
    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(oid)?
            .ok_or_else(|| anyhow::anyhow!("Object is not a commit: {}", oid))
    }

    /// The commit the active branch points at, with its id
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head_oid = self.state.head_oid()?;
        let commit = self.load_commit(&head_oid)?;

        Ok((head_oid, commit))
    }
}
