use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".gitlet", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List every workspace file, as paths relative to the workspace root
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect::<Vec<_>>())
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(content)
    }

    pub fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&full_path, content)
            .context(format!("Unable to write file {}", full_path.display()))?;

        Ok(())
    }

    /// Delete a working file; a path that is already gone is not an error
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.exists() {
            std::fs::remove_file(&full_path)
                .context(format!("Unable to remove file {}", full_path.display()))?;
        }

        self.prune_empty_directories(file_path);

        Ok(())
    }

    /// Apply a planned migration: deletions first, then every write
    pub fn apply_migration(
        &self,
        migration: &Migration,
        database: &Database,
    ) -> anyhow::Result<()> {
        for file_path in migration.deletes() {
            self.remove_file(file_path)?;
        }

        for (file_path, oid) in migration.writes() {
            let blob = database
                .parse_object_as_blob(oid)?
                .ok_or_else(|| anyhow::anyhow!("Object is not a blob: {}", oid))?;
            self.write_file(file_path, blob.content())?;
        }

        Ok(())
    }

    // walk back up towards the root, dropping directories a deletion emptied
    fn prune_empty_directories(&self, file_path: &Path) {
        let mut dir = file_path.parent();

        while let Some(relative_dir) = dir {
            if relative_dir.as_os_str().is_empty() {
                break;
            }
            if std::fs::remove_dir(self.path.join(relative_dir)).is_err() {
                break;
            }
            dir = relative_dir.parent();
        }
    }

    fn is_ignored(path: &Path) -> bool {
        // check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() && !Self::is_ignored(path) {
            Some(path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf())
        } else {
            None
        }
    }
}
