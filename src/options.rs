//! Generation options and the checks that run before any file is touched.
//!
//! [`Options`] is the validated, immutable input of a run. It is assembled
//! from one or more [`PartialOptions`] layers (answers file, answers JSON,
//! command-line flags), each overriding the previous one.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options controlling which files are generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Generate the container build files.
    pub docker: bool,
    /// Registry the docker image is published to. Required with `docker`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plurl: Option<String>,
    /// Generate the OpenShift deployment files.
    pub openshift: bool,
    /// OpenShift cluster URL. Required with `openshift`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocurl: Option<String>,
    /// OpenShift namespace. Required with `openshift`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocn: Option<String>,
    /// Maven group id of the project.
    pub groupid: String,
    /// Send build notifications to Microsoft Teams.
    pub teams: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teamsname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teamsurl: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl Options {
    /// Creates options with only the required group id set.
    pub fn new(groupid: impl Into<String>) -> Self {
        Self { groupid: groupid.into(), ..Default::default() }
    }

    /// Rejects contradictory or incomplete option combinations.
    ///
    /// An empty string counts as absent.
    pub fn validate(&self) -> Result<()> {
        if self.docker && is_blank(&self.plurl) {
            return Err(Error::MissingPublishUrl);
        }

        if self.openshift {
            let missing: Vec<&'static str> = [("ocurl", &self.ocurl), ("ocn", &self.ocn)]
                .into_iter()
                .filter(|(_, value)| is_blank(value))
                .map(|(name, _)| name)
                .collect();
            if !missing.is_empty() {
                return Err(Error::MissingOpenshiftParams { missing });
            }
        }

        Ok(())
    }

    /// Whether the infrastructure template set applies to this run.
    pub fn needs_infrastructure(&self) -> bool {
        self.docker || self.openshift
    }
}

/// One layer of user-supplied options where every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    pub docker: Option<bool>,
    #[serde(alias = "plrul")]
    pub plurl: Option<String>,
    pub openshift: Option<bool>,
    pub ocurl: Option<String>,
    pub ocn: Option<String>,
    pub groupid: Option<String>,
    pub teams: Option<bool>,
    pub teamsname: Option<String>,
    pub teamsurl: Option<String>,
}

impl PartialOptions {
    /// Parses a layer from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::AnswersParse(e.to_string()))
    }

    /// Parses a layer from a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::AnswersParse(e.to_string()))
    }

    /// Returns `self` with every field present in `other` replaced.
    pub fn merge(self, other: PartialOptions) -> Self {
        Self {
            docker: other.docker.or(self.docker),
            plurl: other.plurl.or(self.plurl),
            openshift: other.openshift.or(self.openshift),
            ocurl: other.ocurl.or(self.ocurl),
            ocn: other.ocn.or(self.ocn),
            groupid: other.groupid.or(self.groupid),
            teams: other.teams.or(self.teams),
            teamsname: other.teamsname.or(self.teamsname),
            teamsurl: other.teamsurl.or(self.teamsurl),
        }
    }

    /// Finalizes the layers into [`Options`]. Absent flags default to `false`.
    pub fn build(self) -> Result<Options> {
        let groupid = self
            .groupid
            .filter(|g| !g.trim().is_empty())
            .ok_or(Error::MissingOption("groupid"))?;

        Ok(Options {
            docker: self.docker.unwrap_or_default(),
            plurl: self.plurl,
            openshift: self.openshift.unwrap_or_default(),
            ocurl: self.ocurl,
            ocn: self.ocn,
            groupid,
            teams: self.teams.unwrap_or_default(),
            teamsname: self.teamsname,
            teamsurl: self.teamsurl,
        })
    }
}
