use crate::constants::verbosity;
use crate::options::PartialOptions;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Adds CI/CD, container and publishing setup to an existing devon4j project.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory containing the pom.xml.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Generate container build files. Requires --plurl.
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,

    /// Turn docker off even when the answers enable it.
    #[arg(long = "no-docker", overrides_with = "docker")]
    pub no_docker: bool,

    /// Registry the docker image is published to.
    #[arg(long, alias = "plrul", value_name = "URL")]
    pub plurl: Option<String>,

    /// Generate OpenShift deployment files. Requires --ocurl and --ocn.
    #[arg(long, overrides_with = "no_openshift")]
    pub openshift: bool,

    /// Turn openshift off even when the answers enable it.
    #[arg(long = "no-openshift", overrides_with = "openshift")]
    pub no_openshift: bool,

    /// OpenShift cluster URL.
    #[arg(long, value_name = "URL")]
    pub ocurl: Option<String>,

    /// OpenShift namespace.
    #[arg(long, value_name = "NAMESPACE")]
    pub ocn: Option<String>,

    /// Maven group id of the project.
    #[arg(long, value_name = "GROUP_ID")]
    pub groupid: Option<String>,

    /// Send build notifications to Microsoft Teams.
    #[arg(long, overrides_with = "no_teams")]
    pub teams: bool,

    /// Turn Teams notifications off even when the answers enable them.
    #[arg(long = "no-teams", overrides_with = "teams")]
    pub no_teams: bool,

    /// Name shown in Teams notifications.
    #[arg(long, value_name = "NAME")]
    pub teamsname: Option<String>,

    /// Teams incoming webhook URL.
    #[arg(long, value_name = "URL")]
    pub teamsurl: Option<String>,

    /// Options as a JSON object, or `-` to read them from stdin.
    ///
    /// Explicit flags take precedence over these values.
    ///
    /// > devon4j-init --answers='{"groupid": "com.acme", "docker": true, "plurl": "registry.acme.com"}'
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Options from a JSON or YAML file. `--answers` and flags take precedence.
    #[arg(long = "answers-file", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Read template sets from `<DIR>/files` and `<DIR>/docker` instead of the built-in ones.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Overwrite files that already exist in the project.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    /// The options given as explicit flags. Unset flags stay absent so lower layers show through;
    /// `--no-<flag>` sets the value to `false`.
    pub fn flag_options(&self) -> PartialOptions {
        PartialOptions {
            docker: switch(self.docker, self.no_docker),
            plurl: self.plurl.clone(),
            openshift: switch(self.openshift, self.no_openshift),
            ocurl: self.ocurl.clone(),
            ocn: self.ocn.clone(),
            groupid: self.groupid.clone(),
            teams: switch(self.teams, self.no_teams),
            teamsname: self.teamsname.clone(),
            teamsurl: self.teamsurl.clone(),
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["devon4j-init", "--groupid", "com.acme"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.groupid.as_deref(), Some("com.acme"));
        assert!(!args.docker);
        assert_eq!(args.flag_options().docker, None);
    }

    #[test]
    fn accepts_plrul_alias() {
        let args = Args::parse_from(["devon4j-init", "--docker", "--plrul", "registry"]);
        assert_eq!(args.plurl.as_deref(), Some("registry"));
        assert_eq!(args.flag_options().docker, Some(true));
    }

    #[test]
    fn negated_flags_turn_options_off() {
        let args = Args::parse_from(["devon4j-init", "--no-docker", "--no-teams"]);
        let layer = args.flag_options();
        assert_eq!(layer.docker, Some(false));
        assert_eq!(layer.teams, Some(false));
        assert_eq!(layer.openshift, None);
    }

    #[test]
    fn last_of_flag_and_negation_wins() {
        let args = Args::parse_from(["devon4j-init", "--docker", "--no-docker"]);
        assert_eq!(args.flag_options().docker, Some(false));
        let args = Args::parse_from(["devon4j-init", "--no-openshift", "--openshift"]);
        assert_eq!(args.flag_options().openshift, Some(true));
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "devon4j-init",
            "--path",
            "project",
            "--openshift",
            "--ocurl",
            "https://oc.acme.com",
            "--ocn",
            "acme",
            "--teams",
            "--teamsurl",
            "https://hooks.acme.com",
            "--answers",
            "{\"groupid\":\"com.acme\"}",
            "--templates",
            "my-templates",
            "--force",
            "-vvv",
            "--dry-run",
        ]);
        assert_eq!(args.path, PathBuf::from("project"));
        assert!(args.openshift);
        assert_eq!(args.ocn.as_deref(), Some("acme"));
        assert!(args.teams);
        assert_eq!(args.answers, Some("{\"groupid\":\"com.acme\"}".to_string()));
        assert_eq!(args.templates, Some(PathBuf::from("my-templates")));
        assert!(args.force);
        assert_eq!(args.verbose, 3);
        assert!(args.dry_run);
    }
}
