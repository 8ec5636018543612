//! JSON persistence for the folder map.
//!
//! The store is a single document mapping folder name to folder,
//! written atomically (temp file, then rename). The core treats this
//! as an opaque round trip; every field must come back unchanged.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use passfold_core::Folder;

/// A store file and its in-memory folder map.
pub struct Store {
    path: PathBuf,
    folders: BTreeMap<String, Folder>,
}

impl Store {
    /// Load the store at `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let folders = if path.exists() {
            let data = fs::read(path)
                .with_context(|| format!("reading store {}", path.display()))?;
            serde_json::from_slice(&data)
                .with_context(|| format!("parsing store {}", path.display()))?
        } else {
            log::debug!("store {} not found, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            folders,
        })
    }

    /// Persist the store atomically.
    pub fn save(&self) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(&self.folders)
            .context("serializing store")?;
        let temp = self.path.with_extension("tmp");
        fs::write(&temp, &data)
            .with_context(|| format!("writing {}", temp.display()))?;
        rename_with_fallback(&temp, &self.path)
            .with_context(|| format!("replacing store {}", self.path.display()))?;
        log::debug!(
            "saved {} folders to {}",
            self.folders.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    pub fn folders_mut(&mut self) -> impl Iterator<Item = &mut Folder> {
        self.folders.values_mut()
    }

    pub fn folder(&self, name: &str) -> anyhow::Result<&Folder> {
        match self.folders.get(name) {
            Some(folder) => Ok(folder),
            None => bail!("no such folder: {name}"),
        }
    }

    pub fn folder_mut(&mut self, name: &str) -> anyhow::Result<&mut Folder> {
        match self.folders.get_mut(name) {
            Some(folder) => Ok(folder),
            None => bail!("no such folder: {name}"),
        }
    }

    /// Create a new empty folder.
    pub fn create_folder(&mut self, name: &str) -> anyhow::Result<()> {
        if self.folders.contains_key(name) {
            bail!("folder already exists: {name}");
        }
        self.folders.insert(name.to_string(), Folder::new(name));
        Ok(())
    }

    /// Remove a folder entirely. Locked folders cannot be dropped.
    pub fn remove_folder(&mut self, name: &str) -> anyhow::Result<Folder> {
        if self.folder(name)?.is_locked() {
            bail!("cannot delete a locked folder: {name}");
        }
        Ok(self
            .folders
            .remove(name)
            .expect("checked above that the folder exists"))
    }
}

/// Atomically rename a file, with a fallback for platforms where rename
/// fails if the target exists (notably Windows). The temp file is
/// cleaned up if the rename ultimately fails.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_store_is_empty() {
        let dir = tempdir().unwrap();
        let store = Store::load(&dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_and_remove_folder() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("s.json")).unwrap();

        store.create_folder("mail").unwrap();
        assert!(store.create_folder("mail").is_err());
        assert_eq!(store.folder("mail").unwrap().name(), "mail");

        store.remove_folder("mail").unwrap();
        assert!(store.folder("mail").is_err());
    }

    #[test]
    fn test_locked_folder_cannot_be_dropped() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("s.json")).unwrap();
        store.create_folder("mail").unwrap();
        store.folder_mut("mail").unwrap().lock("some key!").unwrap();

        assert!(store.remove_folder("mail").is_err());
        assert!(store.folder("mail").is_ok());
    }

    #[test]
    fn test_locked_folder_survives_save_and_load() {
        use passfold_core::Entry;

        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");

        let mut store = Store::load(&path).unwrap();
        store.create_folder("mail").unwrap();
        let folder = store.folder_mut("mail").unwrap();
        folder
            .add_entry(Entry::new("gmail", "alice", "hunter2"))
            .unwrap();
        folder.lock("Tr0ub4dor&3").unwrap();
        let ciphered = folder.entries().to_vec();
        store.save().unwrap();

        let mut store = Store::load(&path).unwrap();
        let folder = store.folder_mut("mail").unwrap();
        assert!(folder.is_locked());
        assert_eq!(folder.entries(), ciphered.as_slice());

        folder.unlock("Tr0ub4dor&3").unwrap();
        assert_eq!(folder.entries()[0].password, "hunter2");
    }

    #[test]
    fn test_save_overwrites_atomically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");

        let mut store = Store::load(&path).unwrap();
        store.create_folder("one").unwrap();
        store.save().unwrap();

        let mut store = Store::load(&path).unwrap();
        store.create_folder("two").unwrap();
        store.save().unwrap();

        let store = Store::load(&path).unwrap();
        assert_eq!(store.folders().count(), 2);
        assert!(!path.with_extension("tmp").exists());
    }
}
