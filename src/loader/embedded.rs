use crate::error::{Error, Result};
use crate::loader::interface::{TemplateFile, TemplateLoader};
use include_dir::{Dir, DirEntry};

/// Loader for template sets compiled into the binary.
pub struct EmbeddedLoader {
    root: &'static Dir<'static>,
    name: &'static str,
}

impl EmbeddedLoader {
    /// Loads the sub-directory `name` of `root`.
    pub fn new(root: &'static Dir<'static>, name: &'static str) -> Self {
        Self { root, name }
    }
}

fn collect(dir: &'static Dir<'static>, files: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect(sub, files),
            DirEntry::File(file) => files.push(TemplateFile {
                path: file.path().to_path_buf(),
                content: file.contents().to_vec(),
            }),
        }
    }
}

impl TemplateLoader for EmbeddedLoader {
    fn load(&self) -> Result<Vec<TemplateFile>> {
        let set = self.root.get_dir(self.name).ok_or_else(|| {
            Error::TemplateDoesNotExistsError { template_dir: self.describe() }
        })?;

        let mut files = Vec::new();
        collect(set, &mut files);
        // Entry paths include the set directory itself; make them set-relative.
        for file in &mut files {
            if let Ok(relative) = file.path.strip_prefix(self.name) {
                file.path = relative.to_path_buf();
            }
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn describe(&self) -> String {
        format!("embedded:{}", self.name)
    }
}
