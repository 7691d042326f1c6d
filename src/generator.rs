//! The generation pipeline: validate, read the descriptor, compose, apply.

use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::loader::TemplateSource;
use crate::options::Options;
use crate::renderer::{MiniJinjaRenderer, TemplateContext, TemplateRenderer};
use crate::rule::{GenerationReport, Rule, StepContext};
use crate::tree::FileTree;
use log::info;

/// Runs the scaffolding against a file tree.
pub struct Generator {
    engine: Box<dyn TemplateRenderer>,
    source: TemplateSource,
    force: bool,
    dry_run: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(TemplateSource::default())
    }
}

impl Generator {
    pub fn new(source: TemplateSource) -> Self {
        Self { engine: Box::new(MiniJinjaRenderer::new()), source, force: false, dry_run: false }
    }

    /// Replace existing files instead of skipping them.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Label log messages as a dry run.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generates into `tree`.
    ///
    /// `root` only names the tree in error messages. Options are validated
    /// before the tree is touched, and the tree is left alone unless the
    /// descriptor can be read and carries an artifact id.
    pub fn run(&self, options: &Options, tree: &mut dyn FileTree, root: &str) -> Result<GenerationReport> {
        options.validate()?;

        let descriptor = Descriptor::load(tree, root)?;
        let context = TemplateContext::new(options, descriptor.artifact_id());
        info!("Generating files for '{}' from {}", descriptor.artifact_id(), self.source);

        let rule = Rule::compose(options, descriptor);
        let ctx = StepContext {
            engine: self.engine.as_ref(),
            source: &self.source,
            context: &context,
            force: self.force,
            dry_run: self.dry_run,
        };
        rule.apply(tree, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DISTRIBUTION_BLOCK;
    use crate::error::{Error, ErrorKind};
    use crate::rule::DescriptorOutcome;
    use crate::tree::MemoryTree;
    use std::path::PathBuf;

    const POM: &str = r#"<project>
  <groupId>com.acme</groupId>
  <artifactId>foo-bar</artifactId>
</project>
"#;

    fn project() -> MemoryTree {
        MemoryTree::new().with_file("pom.xml", POM)
    }

    #[test]
    fn base_run_renders_base_set_and_patches_descriptor() {
        let mut tree = project();
        let report = Generator::default().run(&Options::new("com.acme"), &mut tree, ".").unwrap();

        let jenkinsfile = tree.get("Jenkinsfile").unwrap();
        assert!(jenkinsfile.contains("APP_NAME = 'foo-bar'"));
        assert!(jenkinsfile.contains("GROUP_ID = 'com.acme'"));
        assert!(!jenkinsfile.contains("DOCKER_IMAGE"));
        assert!(tree.get(".gitignore").is_some());
        assert!(tree.get(".mvn/ci-settings.xml").is_some());
        assert!(tree.get("Dockerfile").is_none());

        let expected = POM.replace("</project>", &format!("{DISTRIBUTION_BLOCK}</project>"));
        assert_eq!(tree.get("pom.xml"), Some(expected.as_str()));
        assert_eq!(report.descriptor, Some(DescriptorOutcome::Patched));
        assert!(report.written.contains(&PathBuf::from("Jenkinsfile")));
    }

    #[test]
    fn docker_run_adds_infrastructure_without_openshift_files() {
        let options = Options {
            docker: true,
            plurl: Some("registry.acme.com".into()),
            ..Options::new("com.acme")
        };
        let mut tree = project();
        let report = Generator::default().run(&options, &mut tree, ".").unwrap();

        let dockerfile = tree.get("Dockerfile").unwrap();
        assert!(dockerfile.contains("/app/foo-bar.jar"));
        assert!(tree.get(".dockerignore").is_some());
        assert!(tree.get("Jenkinsfile").unwrap().contains("registry.acme.com/foo-bar"));
        assert!(!tree.paths().any(|p| p.starts_with("openshift")));
        assert_eq!(report.ignored.len(), 1);
    }

    #[test]
    fn openshift_run_adds_build_config() {
        let options = Options {
            openshift: true,
            ocurl: Some("https://oc.acme.com".into()),
            ocn: Some("acme-dev".into()),
            ..Options::new("com.acme")
        };
        let mut tree = project();
        Generator::default().run(&options, &mut tree, ".").unwrap();

        let build_config = tree.get("openshift/foo-bar-buildconfig.yaml").unwrap();
        assert!(build_config.contains("namespace: acme-dev"));
        assert!(tree.get("Dockerfile").is_some());
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut tree = project();
        let generator = Generator::default();
        generator.run(&Options::new("com.acme"), &mut tree, ".").unwrap();
        let after_first = tree.clone();

        let report = generator.run(&Options::new("com.acme"), &mut tree, ".").unwrap();

        assert_eq!(tree, after_first);
        assert!(report.written.is_empty());
        assert_eq!(report.descriptor, Some(DescriptorOutcome::AlreadyPresent));
    }

    #[test]
    fn descriptor_without_closing_tag_is_reported_as_skipped() {
        let pom = "<project>\n  <artifactId>demo</artifactId>\n";
        let mut tree = MemoryTree::new().with_file("pom.xml", pom);

        let report = Generator::default().run(&Options::new("com.acme"), &mut tree, ".").unwrap();

        assert_eq!(report.descriptor, Some(DescriptorOutcome::Skipped));
        assert_eq!(tree.get("pom.xml"), Some(pom));
        assert!(tree.get("Jenkinsfile").is_some());
    }

    #[test]
    fn invalid_options_leave_tree_untouched() {
        let options = Options { docker: true, ..Options::new("com.acme") };
        let mut tree = project();

        let err = Generator::default().run(&options, &mut tree, ".").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(tree, project());
    }

    #[test]
    fn missing_descriptor_is_a_precondition_error() {
        let mut tree = MemoryTree::new();
        let err = Generator::default().run(&Options::new("g"), &mut tree, "/work").unwrap_err();
        assert!(matches!(err, Error::NotAProjectDirectory { .. }));
        assert!(tree.is_empty());
    }

    #[test]
    fn descriptor_without_artifact_id_is_rejected_before_writes() {
        let mut tree = MemoryTree::new().with_file("pom.xml", "<project></project>");
        let err = Generator::default().run(&Options::new("g"), &mut tree, ".").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DescriptorParse);
        assert_eq!(tree.len(), 1);
    }
}
