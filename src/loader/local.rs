use crate::error::{Error, Result};
use crate::loader::interface::{TemplateFile, TemplateLoader};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Loader for template sets from the local filesystem.
pub struct LocalLoader<P: AsRef<std::path::Path>> {
    path: P,
}

impl<P: AsRef<std::path::Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<std::path::Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self) -> Result<Vec<TemplateFile>> {
        let root = self.path.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError { template_dir: self.describe() });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::ProcessError {
                source_path: root.display().to_string(),
                e: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path: PathBuf = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::ProcessError {
                    source_path: entry.path().display().to_string(),
                    e: e.to_string(),
                })?
                .to_path_buf();
            let content = std::fs::read(entry.path())?;
            files.push(TemplateFile { path, content });
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn describe(&self) -> String {
        self.path.as_ref().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn lists_files_relative_to_root() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("ci")).unwrap();
        std::fs::write(tmp.path().join("ci/Jenkinsfile.j2"), "x").unwrap();
        std::fs::write(tmp.path().join(".gitignore"), "target/").unwrap();

        let files = LocalLoader::new(tmp.path()).load().unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(paths, vec![Path::new(".gitignore"), Path::new("ci/Jenkinsfile.j2")]);
        assert_eq!(files[0].content, b"target/");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalLoader::new(tmp.path().join("nope")).load().unwrap_err();
        assert!(matches!(err, Error::TemplateDoesNotExistsError { .. }));
    }
}
