use crate::constants::{exit_codes, DESCRIPTOR_FILE};
use thiserror::Error;

/// Broad classification of [`Error`] values.
///
/// None of these are retried; they differ only in what the user has to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required companion option is missing or the options are malformed.
    Configuration,
    /// The target directory is not a project directory.
    Precondition,
    /// The build descriptor lacks an expected element.
    DescriptorParse,
    /// A template could not be loaded or rendered.
    Template,
    /// Reading from or writing to the file tree failed.
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("When docker is true, plurl is required.")]
    MissingPublishUrl,

    #[error(
        "When openshift is true, ocurl and ocn parameters are required (missing: {}).",
        .missing.join(", ")
    )]
    MissingOpenshiftParams { missing: Vec<&'static str> },

    #[error("Missing required option '{0}'.")]
    MissingOption(&'static str),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParse(String),

    #[error(
        "You are not inside a devon4j folder ('{root}' has no {}). \
         Please change to a devon4j folder and execute the command again.",
        DESCRIPTOR_FILE
    )]
    NotAProjectDirectory { root: String },

    #[error("No <artifactId> element found in {}.", DESCRIPTOR_FILE)]
    MissingArtifactId,

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Template '{source_path}' would write to the protected path '{target}'.")]
    ProtectedPath { source_path: String, target: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Classifies the error for callers that present or exit differently per kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingPublishUrl
            | Error::MissingOpenshiftParams { .. }
            | Error::MissingOption(_)
            | Error::AnswersParse(_) => ErrorKind::Configuration,
            Error::NotAProjectDirectory { .. } => ErrorKind::Precondition,
            Error::MissingArtifactId => ErrorKind::DescriptorParse,
            Error::MinijinjaError(_)
            | Error::TemplateDoesNotExistsError { .. }
            | Error::ProtectedPath { .. }
            | Error::ProcessError { .. } => ErrorKind::Template,
            Error::IoError(_) | Error::Other(_) => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// This is the only place the process is terminated on failure; library code
/// always hands the error back to its caller.
pub fn default_error_handler(err: Error) {
    log::debug!("Run failed with {:?} error: {err:?}", err.kind());
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
