//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use schemafit_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        {
            let mut inner = self.inner.write().unwrap();
            let mut current = PathBuf::new();
            if let Some(parent) = path.parent() {
                for component in parent.components() {
                    current.push(component);
                    inner.directories.insert(current.clone());
                }
            }
            inner.files.insert(path, content.into());
        }
        self.clone()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> schemafit_core::error::SchemafitResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            schemafit_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> schemafit_core::error::SchemafitResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        // Parents are implicit; real project trees always have them by the
        // time patching runs.
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> schemafit_core::error::SchemafitResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn poisoned(path: &Path) -> schemafit_core::error::SchemafitError {
    schemafit_core::application::ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_files_are_readable_and_exist() {
        let fs = MemoryFilesystem::new().seed_file("/proj/pom.xml", "<project/>");
        assert!(fs.exists(Path::new("/proj/pom.xml")));
        assert!(fs.exists(Path::new("/proj")));
        assert_eq!(
            fs.read_to_string(Path::new("/proj/pom.xml")).unwrap(),
            "<project/>"
        );
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        fs.write_file(Path::new("/a/b.txt"), "shared").unwrap();
        assert_eq!(clone.read_file(Path::new("/a/b.txt")).unwrap(), "shared");
    }

    #[test]
    fn clear_empties_everything() {
        let fs = MemoryFilesystem::new().seed_file("/x/y.txt", "z");
        fs.clear();
        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("/x/y.txt")));
    }
}
