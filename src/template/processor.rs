use std::path::{Component, Path, PathBuf};

use crate::constants::DESCRIPTOR_FILE;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::loader::TemplateFile;
use crate::renderer::TemplateRenderer;
use crate::tree::FileTree;

use super::operation::TemplateOperation;

pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    context: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, context: &'a serde_json::Value) -> Self {
        Self { engine, context }
    }

    /// Validates that no component of `rendered_path` was rendered away.
    ///
    /// # Examples
    ///
    /// Valid case:
    /// - Template path: `{% if openshift %}openshift{% endif %}/build.yaml.j2`
    /// - Rendered path (when openshift=true): `openshift/build.yaml.j2`
    ///
    /// Invalid case:
    /// - Template path: `{% if openshift %}openshift{% endif %}/build.yaml.j2`
    /// - Rendered path (when openshift=false): `/build.yaml.j2` (contains empty part)
    fn has_valid_rendered_path_parts(&self, template_path: &str, rendered_path: &str) -> bool {
        let is_separator = |c: char| c == '/' || c == std::path::MAIN_SEPARATOR;
        let template_parts: Vec<&str> = template_path.split(is_separator).collect();
        let rendered_parts: Vec<&str> = rendered_path.split(is_separator).collect();

        template_parts.len() == rendered_parts.len()
            && template_parts
                .iter()
                .zip(rendered_parts.iter())
                .all(|(template_part, rendered_part)| {
                    template_part.is_empty() || !rendered_part.trim().is_empty()
                })
    }

    /// Renders the template path; `None` when a path component renders empty.
    fn render_template_entry(&self, template_entry: &Path) -> Result<Option<PathBuf>> {
        let rendered_entry = self.engine.render_path(template_entry, self.context)?;

        if !self.has_valid_rendered_path_parts(template_entry.to_str_checked()?, &rendered_entry) {
            return Ok(None);
        }

        let rendered = PathBuf::from(rendered_entry);
        if !rendered.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
            return Err(Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: format!("rendered path '{}' leaves the project root", rendered.display()),
            });
        }

        // `./pom.xml` and `pom.xml` must name the same target.
        let normalized: PathBuf =
            rendered.components().filter(|c| matches!(c, Component::Normal(_))).collect();
        if normalized.as_os_str().is_empty() {
            return Err(Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: format!("rendered path '{}' names no file", rendered.display()),
            });
        }

        Ok(Some(normalized))
    }

    /// Processes a template file and determines the operation to perform on `tree`.
    pub fn process(&self, file: &TemplateFile, tree: &dyn FileTree) -> Result<TemplateOperation> {
        let Some(rendered_entry) = self.render_template_entry(&file.path)? else {
            return Ok(TemplateOperation::Ignore { source: file.path.clone() });
        };

        let target = rendered_entry.without_template_suffix();
        if target == Path::new(DESCRIPTOR_FILE) {
            return Err(Error::ProtectedPath {
                source_path: file.path.display().to_string(),
                target: DESCRIPTOR_FILE.to_string(),
            });
        }
        let target_exists = tree.exists(&target);

        if file.path.is_template_file() {
            let template = std::str::from_utf8(&file.content).map_err(|e| Error::ProcessError {
                source_path: file.path.display().to_string(),
                e: e.to_string(),
            })?;
            let content = self.engine.render(template, self.context, file.path.to_str())?;
            Ok(TemplateOperation::Write {
                source: file.path.clone(),
                target,
                content: content.into_bytes(),
                target_exists,
            })
        } else {
            Ok(TemplateOperation::Copy {
                source: file.path.clone(),
                target,
                content: file.content.clone(),
                target_exists,
            })
        }
    }

    /// Processes every file of a set. Fails before any write if one file is invalid.
    pub fn plan(&self, files: &[TemplateFile], tree: &dyn FileTree) -> Result<Vec<TemplateOperation>> {
        files.iter().map(|file| self.process(file, tree)).collect()
    }
}
