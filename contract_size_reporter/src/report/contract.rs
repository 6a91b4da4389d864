//!
//! The per-contract report row.
//!

use std::path::Path;

use crate::artifact::Artifact;
use crate::config::Config;

use super::status::Status;

///
/// The per-contract report row.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractReport {
    /// The source path relative to the project root, starting with `.`.
    pub source_path: String,
    /// The creation bytecode size in bytes.
    pub bytecode_length: usize,
    /// The runtime bytecode size in bytes.
    pub deployed_bytecode_length: usize,
    /// The runtime bytecode size as a rounded percentage of the limit.
    pub capacity_percent: usize,
    /// The size status.
    pub status: Status,
}

impl ContractReport {
    ///
    /// Derives the report row from an artifact.
    ///
    pub fn new(artifact: Artifact, root: &Path, config: &Config) -> Self {
        let deployed_bytecode_length = artifact.deployed_bytecode_length();
        Self {
            source_path: Self::relative_source_path(artifact.source_path.as_str(), root),
            bytecode_length: artifact.bytecode_length(),
            deployed_bytecode_length,
            capacity_percent: config.capacity_percent(deployed_bytecode_length),
            status: Status::classify(deployed_bytecode_length, config),
        }
    }

    ///
    /// Rewrites `source_path` relative to `root`, replacing the root with `.`.
    ///
    /// Paths outside the root are returned unchanged.
    ///
    pub fn relative_source_path(source_path: &str, root: &Path) -> String {
        match Path::new(source_path).strip_prefix(root) {
            Ok(relative) if relative.as_os_str().is_empty() => ".".to_owned(),
            Ok(relative) => Path::new(".").join(relative).to_string_lossy().into_owned(),
            Err(_) => source_path.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ContractReport;
    use crate::artifact::Artifact;
    use crate::config::Config;
    use crate::report::status::Status;

    fn artifact(bytecode_bytes: usize, deployed_bytes: usize) -> Artifact {
        Artifact {
            source_path: "/home/user/project/contracts/Token.sol".to_owned(),
            bytecode: "00".repeat(bytecode_bytes),
            deployed_bytecode: "00".repeat(deployed_bytes),
        }
    }

    #[test]
    fn over_limit() {
        let report = ContractReport::new(
            artifact(25000, 24577),
            Path::new("/home/user/project"),
            &Config::default(),
        );

        assert_eq!(report.source_path, "./contracts/Token.sol");
        assert_eq!(report.bytecode_length, 25000);
        assert_eq!(report.deployed_bytecode_length, 24577);
        assert_eq!(report.capacity_percent, 100);
        assert_eq!(report.status, Status::OverLimit);
    }

    #[test]
    fn at_limit() {
        let report = ContractReport::new(
            artifact(24600, 24576),
            Path::new("/home/user/project"),
            &Config::default(),
        );

        assert_eq!(report.capacity_percent, 100);
        assert_eq!(report.status, Status::NearLimit);
    }

    #[test]
    fn empty_bytecode() {
        let report = ContractReport::new(
            artifact(0, 0),
            Path::new("/home/user/project"),
            &Config::default(),
        );

        assert_eq!(report.bytecode_length, 0);
        assert_eq!(report.deployed_bytecode_length, 0);
        assert_eq!(report.capacity_percent, 0);
        assert_eq!(report.status, Status::Ok);
    }

    #[test]
    fn relative_source_path_trailing_separator() {
        assert_eq!(
            ContractReport::relative_source_path(
                "/home/user/project/contracts/Token.sol",
                Path::new("/home/user/project/"),
            ),
            "./contracts/Token.sol"
        );
    }

    #[test]
    fn relative_source_path_outside_root() {
        assert_eq!(
            ContractReport::relative_source_path(
                "/home/user/projects/contracts/Token.sol",
                Path::new("/home/user/project"),
            ),
            "/home/user/projects/contracts/Token.sol"
        );
    }

    #[test]
    fn relative_source_path_root_itself() {
        assert_eq!(
            ContractReport::relative_source_path("/home/user/project", Path::new("/home/user/project")),
            "."
        );
    }
}
