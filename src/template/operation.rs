use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    /// Verbatim copy of a non-template file.
    Copy { source: PathBuf, target: PathBuf, content: Vec<u8>, target_exists: bool },
    /// Rendered template content.
    Write { source: PathBuf, target: PathBuf, content: Vec<u8>, target_exists: bool },
    /// The rendered path collapsed, so the file is not part of this run.
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `overwrite` - Whether existing files are replaced
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, overwrite: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Copy { source, target, target_exists, .. } => {
                match (*target_exists, overwrite) {
                    (true, true) => format!(
                        "{}Copying '{}' to '{}' (overwriting existing file)",
                        prefix,
                        source.display(),
                        target.display()
                    ),
                    (true, false) => format!(
                        "{}Skipping copy of '{}' to '{}' (target already exists)",
                        prefix,
                        source.display(),
                        target.display()
                    ),
                    _ => format!(
                        "{}Copying '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    ),
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                match (*target_exists, overwrite) {
                    (true, true) => format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    ),
                    (true, false) => format!(
                        "{}Skipping write to '{}' (target already exists)",
                        prefix,
                        target.display()
                    ),
                    _ => format!("{}Writing to '{}'", prefix, target.display()),
                }
            }

            TemplateOperation::Ignore { source } => {
                format!("{}Ignoring '{}' (rendered path is empty)", prefix, source.display())
            }
        }
    }
}
