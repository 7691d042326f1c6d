//! Composition of the steps a run applies to the file tree.
//!
//! A [`Rule`] is the ordered list of [`Step`]s decided up front from the
//! options. Applying it runs the steps in sequence against one tree.

use crate::constants::{DESCRIPTOR_FILE, PROJECT_CLOSING_TAG};
use crate::descriptor::{self, Descriptor, Patch};
use crate::error::Result;
use crate::loader::{TemplateSet, TemplateSource};
use crate::options::Options;
use crate::renderer::{TemplateContext, TemplateRenderer};
use crate::template::{TemplateOperation, TemplateProcessor};
use crate::tree::FileTree;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// One mutation of the file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Render a template set into the tree.
    Render(TemplateSet),
    /// Insert the distribution block into the descriptor read at the start of the run.
    PatchDescriptor(Descriptor),
}

/// Ordered steps of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    steps: Vec<Step>,
}

/// What happened to the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorOutcome {
    /// The descriptor already had a distribution block.
    AlreadyPresent,
    /// The distribution block was inserted.
    Patched,
    /// The descriptor has no `</project>` tag, so nothing was inserted.
    Skipped,
}

/// Summary of an applied rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub ignored: Vec<PathBuf>,
    pub descriptor: Option<DescriptorOutcome>,
}

/// Everything the steps need besides the tree.
pub struct StepContext<'a> {
    pub engine: &'a dyn TemplateRenderer,
    pub source: &'a TemplateSource,
    pub context: &'a TemplateContext,
    /// Replace files that already exist instead of skipping them.
    pub force: bool,
    /// Only used to label log messages; the tree decides whether writes happen.
    pub dry_run: bool,
}

impl Rule {
    /// Builds the steps for `options`.
    ///
    /// The base set always comes first, the infrastructure set only with
    /// `docker` or `openshift`, and the descriptor patch always last so it is
    /// decided on the descriptor as read before any template was written.
    pub fn compose(options: &Options, descriptor: Descriptor) -> Self {
        let mut steps = vec![Step::Render(TemplateSet::Base)];
        if options.needs_infrastructure() {
            steps.push(Step::Render(TemplateSet::Infrastructure));
        }
        steps.push(Step::PatchDescriptor(descriptor));
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Applies every step in order. Stops at the first failing step.
    pub fn apply(&self, tree: &mut dyn FileTree, ctx: &StepContext<'_>) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        for step in &self.steps {
            debug!("Applying step {step:?}");
            match step {
                Step::Render(set) => render_set(*set, tree, ctx, &mut report)?,
                Step::PatchDescriptor(descriptor) => {
                    report.descriptor = Some(patch_descriptor(descriptor, tree, ctx.dry_run)?);
                }
            }
        }
        Ok(report)
    }
}

impl std::fmt::Debug for StepContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepContext")
            .field("source", &self.source)
            .field("force", &self.force)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

fn render_set(
    set: TemplateSet,
    tree: &mut dyn FileTree,
    ctx: &StepContext<'_>,
    report: &mut GenerationReport,
) -> Result<()> {
    let files = ctx.source.load(set)?;
    let processor = TemplateProcessor::new(ctx.engine, ctx.context.as_value());
    let operations = processor.plan(&files, tree)?;

    for operation in operations {
        info!("{}", operation.get_message(ctx.force, ctx.dry_run));
        match operation {
            TemplateOperation::Copy { target, content, target_exists, .. }
            | TemplateOperation::Write { target, content, target_exists, .. } => {
                if target_exists && !ctx.force {
                    report.skipped.push(target);
                    continue;
                }
                tree.write(&target, &content)?;
                report.written.push(target);
            }
            TemplateOperation::Ignore { source } => report.ignored.push(source),
        }
    }
    Ok(())
}

fn patch_descriptor(
    descriptor: &Descriptor,
    tree: &mut dyn FileTree,
    dry_run: bool,
) -> Result<DescriptorOutcome> {
    let prefix = if dry_run { "[DRY RUN] " } else { "" };
    match descriptor::patch(descriptor.content()) {
        Patch::Unchanged => {
            info!("{prefix}Keeping {DESCRIPTOR_FILE} (distributionManagement already present)");
            Ok(DescriptorOutcome::AlreadyPresent)
        }
        Patch::NoClosingTag => {
            info!("{prefix}Skipping {DESCRIPTOR_FILE} (no {PROJECT_CLOSING_TAG} to insert before)");
            Ok(DescriptorOutcome::Skipped)
        }
        Patch::Inserted(content) => {
            tree.overwrite(Path::new(DESCRIPTOR_FILE), content.as_bytes())?;
            info!("{prefix}Added distributionManagement to {DESCRIPTOR_FILE}");
            Ok(DescriptorOutcome::Patched)
        }
    }
}
