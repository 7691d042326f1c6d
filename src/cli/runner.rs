use crate::{
    cli::Args,
    constants::{ANSWERS_FILE_EXTENSIONS, STDIN_INDICATOR},
    error::{Error, Result},
    generator::Generator,
    loader::TemplateSource,
    options::{Options, PartialOptions},
    rule::GenerationReport,
    tree::DiskTree,
};
use std::path::Path;

/// Main CLI runner that orchestrates option collection and generation
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<GenerationReport> {
        let options = self.collect_options()?;

        let source = match &self.args.templates {
            Some(dir) => TemplateSource::FileSystem(dir.clone()),
            None => TemplateSource::Embedded,
        };
        let generator = Generator::new(source).force(self.args.force).dry_run(self.args.dry_run);

        let mut tree = DiskTree::new(&self.args.path).dry_run(self.args.dry_run);
        let report =
            generator.run(&options, &mut tree, &self.args.path.display().to_string())?;

        log::debug!("Generation report: {report:?}");
        println!("{}", summary(&self.args.path, &report, self.args.dry_run));
        Ok(report)
    }

    /// Merges the answers file, the answers string and the explicit flags, in that order.
    fn collect_options(&self) -> Result<Options> {
        let mut layers = PartialOptions::default();

        if let Some(path) = &self.args.answers_file {
            log::debug!("Reading answers from '{}'", path.display());
            layers = layers.merge(read_answers_file(path)?);
        }

        if let Some(answers) = &self.args.answers {
            let buf = if answers == STDIN_INDICATOR {
                read_from(std::io::stdin())?
            } else {
                answers.clone()
            };
            layers = layers.merge(PartialOptions::from_json(&buf)?);
        }

        layers.merge(self.args.flag_options()).build()
    }
}

fn summary(path: &Path, report: &GenerationReport, dry_run: bool) -> String {
    if dry_run {
        format!(
            "[DRY RUN] Generation checked in {} ({} would be written, {} skipped).",
            path.display(),
            report.written.len(),
            report.skipped.len()
        )
    } else {
        format!(
            "Generation completed successfully in {} ({} written, {} skipped).",
            path.display(),
            report.written.len(),
            report.skipped.len()
        )
    }
}

fn read_answers_file(path: &Path) -> Result<PartialOptions> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if !ANSWERS_FILE_EXTENSIONS.contains(&extension) {
        return Err(Error::AnswersParse(format!(
            "'{}' must have one of the extensions: {}",
            path.display(),
            ANSWERS_FILE_EXTENSIONS.join(", ")
        )));
    }

    let content = std::fs::read_to_string(path)?;
    match extension {
        "json" => PartialOptions::from_json(&content),
        _ => PartialOptions::from_yaml(&content),
    }
}

fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<GenerationReport> {
    let runner = Runner::new(args);
    runner.run()
}
