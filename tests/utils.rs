#![allow(dead_code)]

use devon4j_init::cli::Args;
use std::path::Path;
use tempfile::TempDir;

pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.acme</groupId>
  <artifactId>foo-bar</artifactId>
  <version>1.0.0-SNAPSHOT</version>
</project>
"#;

/// Creates a temporary project directory holding `pom`.
pub fn project_with(pom: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pom.xml"), pom).unwrap();
    dir
}

pub fn project() -> TempDir {
    project_with(POM)
}

/// Arguments for a non-interactive run against `path`.
pub fn args_for(path: &Path) -> Args {
    Args { path: path.to_path_buf(), groupid: Some("com.acme".to_string()), ..Default::default() }
}

pub fn read(dir: &TempDir, path: &str) -> String {
    std::fs::read_to_string(dir.path().join(path)).unwrap()
}

pub fn count_marker(content: &str) -> usize {
    content.to_lowercase().matches("<distributionmanagement>").count()
}
