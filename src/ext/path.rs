use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};

/// Extension trait for Path with the conversions template processing needs
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use devon4j_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Whether the file name carries the template suffix (`.j2`).
    fn is_template_file(&self) -> bool;

    /// The path with the template suffix removed from the file name, if present.
    ///
    /// # Examples
    /// ```
    /// use devon4j_init::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(Path::new("ci/Jenkinsfile.j2").without_template_suffix(), PathBuf::from("ci/Jenkinsfile"));
    /// assert_eq!(Path::new(".gitignore").without_template_suffix(), PathBuf::from(".gitignore"));
    /// ```
    fn without_template_suffix(&self) -> PathBuf;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn is_template_file(&self) -> bool {
        self.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX))
    }

    fn without_template_suffix(&self) -> PathBuf {
        match self.file_name().and_then(|n| n.to_str()) {
            Some(name) if self.is_template_file() => {
                self.with_file_name(&name[..name.len() - TEMPLATE_SUFFIX.len()])
            }
            _ => self.to_path_buf(),
        }
    }
}
