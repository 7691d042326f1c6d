//! Reading and patching the Maven build descriptor.
//!
//! Both the artifact id lookup and the patch work on the raw text instead of
//! a parsed document, so every byte outside the inserted block is preserved.

use crate::constants::{
    ARTIFACT_ID_PATTERN, DESCRIPTOR_FILE, DISTRIBUTION_MARKER, PROJECT_CLOSING_TAG,
};
use crate::error::{Error, Result};
use crate::tree::FileTree;
use log::{debug, warn};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static ARTIFACT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ARTIFACT_ID_PATTERN).expect("artifactId pattern is valid"));

/// Publishing target inserted before the closing `</project>` tag.
pub const DISTRIBUTION_BLOCK: &str = r#"  <distributionManagement>
    <repository>
      <id>pl-nexus</id>
      <name>PL Releases</name>
      <url>http://nexus3-core:8081/nexus3/repository/maven-releases</url>
    </repository>
    <snapshotRepository>
      <id>pl-nexus</id>
      <name>PL Snapshots</name>
      <url>http://nexus3-core:8081/nexus3/repository/maven-snapshots</url>
    </snapshotRepository>
  </distributionManagement>
"#;

/// The descriptor as it was on disk before the run touched anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    content: String,
    artifact_id: String,
}

impl Descriptor {
    /// Loads `pom.xml` from the root of `tree` and extracts its artifact id.
    ///
    /// # Errors
    /// * [`Error::NotAProjectDirectory`] if there is no descriptor
    /// * [`Error::MissingArtifactId`] if it has no `artifactId` element
    pub fn load(tree: &dyn FileTree, root: &str) -> Result<Self> {
        let path = Path::new(DESCRIPTOR_FILE);
        if !tree.exists(path) {
            return Err(Error::NotAProjectDirectory { root: root.to_string() });
        }
        let content = tree.read_to_string(path)?;
        Self::parse(content)
    }

    /// Builds a descriptor from already loaded text.
    pub fn parse(content: String) -> Result<Self> {
        let artifact_id = artifact_id(&content)?;
        debug!("Found artifactId '{artifact_id}' in {DESCRIPTOR_FILE}");
        Ok(Self { content, artifact_id })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

/// Returns the text of the first `<artifactId>` element.
///
/// Only the first occurrence is considered. In a POM with a `<parent>` block
/// listed before the project's own coordinates this is the parent's id.
pub fn artifact_id(content: &str) -> Result<String> {
    ARTIFACT_ID
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(Error::MissingArtifactId)
}

/// Result of [`patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// The document already declares a distribution block; nothing to do.
    Unchanged,
    /// There is no `</project>` to insert before; nothing was changed.
    NoClosingTag,
    /// The block was inserted; holds the new document.
    Inserted(String),
}

impl Patch {
    /// The document to persist, given the input that produced this patch.
    pub fn apply_to(self, original: &str) -> String {
        match self {
            Patch::Unchanged | Patch::NoClosingTag => original.to_string(),
            Patch::Inserted(content) => content,
        }
    }
}

/// Adds [`DISTRIBUTION_BLOCK`] to `content` unless a `<distributionManagement>`
/// element is already present in any letter casing.
///
/// The block goes right before the first `</project>`. Documents with the
/// closing tag inside a comment, or more than one of them, get a misplaced
/// block. A document without the closing tag yields [`Patch::NoClosingTag`].
pub fn patch(content: &str) -> Patch {
    if content.to_lowercase().contains(DISTRIBUTION_MARKER) {
        debug!("{DESCRIPTOR_FILE} already declares distributionManagement");
        return Patch::Unchanged;
    }

    if !content.contains(PROJECT_CLOSING_TAG) {
        warn!("{DESCRIPTOR_FILE} has no {PROJECT_CLOSING_TAG} tag, leaving it as is");
        return Patch::NoClosingTag;
    }

    let replacement = format!("{DISTRIBUTION_BLOCK}{PROJECT_CLOSING_TAG}");
    Patch::Inserted(content.replacen(PROJECT_CLOSING_TAG, &replacement, 1))
}
