use super::FileTree;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A [`FileTree`] backed by a directory on the local filesystem.
#[derive(Debug)]
pub struct DiskTree {
    root: PathBuf,
    dry_run: bool,
}

impl DiskTree {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into(), dry_run: false }
    }

    /// Reads go to disk as usual, writes are only logged.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileTree for DiskTree {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(self.resolve(path)).map_err(Error::from)
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        let dest_path = self.resolve(path);

        if self.dry_run {
            log::debug!("Dry run, not writing {} bytes to '{}'", content.len(), dest_path.display());
            return Ok(());
        }

        // Ensure parent directory exists
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(dest_path, content).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_nested_files_under_root() {
        let tmp = TempDir::new().unwrap();
        let mut tree = DiskTree::new(tmp.path());

        tree.write(Path::new("a/b/c.txt"), b"hello").unwrap();

        assert!(tree.exists(Path::new("a/b/c.txt")));
        assert_eq!(std::fs::read(tmp.path().join("a/b/c.txt")).unwrap(), b"hello");
        assert_eq!(tree.read_to_string(Path::new("a/b/c.txt")).unwrap(), "hello");
    }

    #[test]
    fn directories_do_not_count_as_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("pom.xml")).unwrap();
        let tree = DiskTree::new(tmp.path());
        assert!(!tree.exists(Path::new("pom.xml")));
    }

    #[test]
    fn dry_run_leaves_disk_untouched() {
        let tmp = TempDir::new().unwrap();
        let mut tree = DiskTree::new(tmp.path()).dry_run(true);

        tree.write(Path::new("Jenkinsfile"), b"pipeline {}").unwrap();

        assert!(!tmp.path().join("Jenkinsfile").exists());
    }

    #[test]
    fn overwrite_requires_existing_file() {
        let tmp = TempDir::new().unwrap();
        let mut tree = DiskTree::new(tmp.path());

        let err = tree.overwrite(Path::new("pom.xml"), b"<project/>").unwrap_err();
        assert!(matches!(err, Error::IoError(e) if e.kind() == std::io::ErrorKind::NotFound));

        std::fs::write(tmp.path().join("pom.xml"), "old").unwrap();
        tree.overwrite(Path::new("pom.xml"), b"new").unwrap();
        assert_eq!(std::fs::read_to_string(tmp.path().join("pom.xml")).unwrap(), "new");
    }
}
