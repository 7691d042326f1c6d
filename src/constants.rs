//! Constants used throughout devon4j-init

/// Build descriptor that must exist at the project root
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Closing tag of the descriptor's root element
pub const PROJECT_CLOSING_TAG: &str = "</project>";

/// Opening tag of the distribution block, lowercased for case-insensitive lookup
pub const DISTRIBUTION_MARKER: &str = "<distributionmanagement>";

/// Pattern capturing the text of the first `artifactId` element
pub const ARTIFACT_ID_PATTERN: &str = r"<artifactId>(.*?)</artifactId>";

/// Suffix marking a file whose content is rendered rather than copied
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Template directory names
pub mod template_sets {
    pub const BASE: &str = "files";
    pub const INFRASTRUCTURE: &str = "docker";
}

/// Answers file extensions
pub const ANSWERS_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
