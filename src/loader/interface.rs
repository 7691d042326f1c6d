use crate::error::Result;
use std::path::PathBuf;

/// A file of a template set: path relative to the set root, raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Trait for loading template sets from different sources.
pub trait TemplateLoader {
    /// Lists every file of the set, sorted by path.
    fn load(&self) -> Result<Vec<TemplateFile>>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}
