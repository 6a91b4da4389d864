//!
//! The compiled artifacts directory.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The compiled artifacts directory.
///
#[derive(Debug, Clone)]
pub struct ArtifactsDirectory {
    /// The artifacts directory path.
    pub path: PathBuf,
}

impl ArtifactsDirectory {
    /// The build directory name, relative to the project root.
    pub const BUILD_DIRECTORY: &'static str = "build";

    /// The artifacts directory name, relative to the build directory.
    pub const CONTRACTS_DIRECTORY: &'static str = "contracts";

    ///
    /// Resolves the artifacts directory of the project at `root`.
    ///
    pub fn resolve(root: &Path) -> Result<Self, Error> {
        let path = root
            .join(Self::BUILD_DIRECTORY)
            .join(Self::CONTRACTS_DIRECTORY);
        if !path.is_dir() {
            return Err(Error::DirectoryMissing { path });
        }
        Ok(Self { path })
    }

    ///
    /// Lists the artifact files, sorted by name.
    ///
    /// Subdirectories are skipped. Every other entry is treated as an artifact.
    ///
    pub fn files(&self) -> Result<Vec<PathBuf>, Error> {
        let map_error = |error| Error::Directory {
            error,
            path: self.path.clone(),
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(self.path.as_path()).map_err(map_error)? {
            let entry = entry.map_err(map_error)?;
            if entry.file_type().map_err(map_error)?.is_dir() {
                continue;
            }
            files.push(entry.path());
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::ArtifactsDirectory;
    use crate::error::Error;

    #[test]
    fn error_missing() {
        let root = tempfile::tempdir().expect("Temporary directory creation");

        let result = ArtifactsDirectory::resolve(root.path());

        match result {
            Err(error @ Error::DirectoryMissing { .. }) => assert!(error.is_fatal()),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn files_sorted_without_subdirectories() {
        let root = tempfile::tempdir().expect("Temporary directory creation");
        let contracts = root.path().join("build").join("contracts");
        std::fs::create_dir_all(contracts.join("nested")).expect("Directory creation");
        for name in ["Token.json", "Crowdsale.json", "Migrations.json"] {
            std::fs::write(contracts.join(name), "{}").expect("File writing");
        }

        let directory = ArtifactsDirectory::resolve(root.path()).expect("Existing directory");
        let files = directory.files().expect("Readable directory");

        assert_eq!(
            files,
            vec![
                contracts.join("Crowdsale.json"),
                contracts.join("Migrations.json"),
                contracts.join("Token.json"),
            ]
        );
    }
}
