//! Sources of the template sets a run renders.

use crate::constants::template_sets;
use crate::error::Result;
use include_dir::{include_dir, Dir};
use std::path::PathBuf;

pub mod embedded;
pub mod interface;
pub mod local;

pub use embedded::EmbeddedLoader;
pub use interface::{TemplateFile, TemplateLoader};
pub use local::LocalLoader;

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The template sets known to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSet {
    /// CI files, always applied.
    Base,
    /// Container and OpenShift files, applied with `docker` or `openshift`.
    Infrastructure,
}

impl TemplateSet {
    /// Directory name of the set below a template root.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateSet::Base => template_sets::BASE,
            TemplateSet::Infrastructure => template_sets::INFRASTRUCTURE,
        }
    }
}

impl std::fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSet::Base => write!(f, "base"),
            TemplateSet::Infrastructure => write!(f, "infrastructure"),
        }
    }
}

/// Where template sets are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The sets shipped inside the binary.
    #[default]
    Embedded,
    /// A directory holding one sub-directory per set.
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Embedded => write!(f, "embedded templates"),
            TemplateSource::FileSystem(path) => write!(f, "local path: '{}'", path.display()),
        }
    }
}

impl TemplateSource {
    /// Returns the loader for `set`.
    pub fn loader(&self, set: TemplateSet) -> Box<dyn TemplateLoader> {
        match self {
            TemplateSource::Embedded => Box::new(EmbeddedLoader::new(&TEMPLATES, set.dir_name())),
            TemplateSource::FileSystem(root) => Box::new(LocalLoader::new(root.join(set.dir_name()))),
        }
    }

    /// Loads all files of `set`.
    pub fn load(&self, set: TemplateSet) -> Result<Vec<TemplateFile>> {
        let loader = self.loader(set);
        log::debug!("Loading {set} templates from {}", loader.describe());
        loader.load()
    }
}
