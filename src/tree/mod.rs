//! The mutable file tree a generation run writes into.
//!
//! All paths handed to a [`FileTree`] are relative to the tree's root.

use crate::error::{Error, Result};
use std::path::Path;

pub mod disk;
pub mod memory;

pub use disk::DiskTree;
pub use memory::MemoryTree;

/// Storage the generator reads the descriptor from and writes files into.
pub trait FileTree {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the raw content of the file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Creates or replaces the file at `path`, creating parent directories as needed.
    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()>;

    /// Reads the file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read(path)?).map_err(|e| {
            Error::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("'{}' is not valid UTF-8: {e}", path.display()),
            ))
        })
    }

    /// Replaces the content of an existing file.
    ///
    /// Fails with [`std::io::ErrorKind::NotFound`] when there is nothing to overwrite.
    fn overwrite(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        if !self.exists(path) {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("cannot overwrite missing file '{}'", path.display()),
            )));
        }
        self.write(path, content)
    }
}
