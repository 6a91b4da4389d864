//!
//! The contract size reporter error.
//!

use std::path::PathBuf;

use crate::artifact::error::Error as ArtifactError;

///
/// The contract size reporter error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The artifacts directory does not exist. Fatal.
    #[error("Nothing found in the build directory {path:?}. Please compile your project first.")]
    DirectoryMissing {
        /// The expected artifacts directory path.
        path: PathBuf,
    },
    /// The artifacts directory cannot be listed. Fatal.
    #[error("Reading artifacts directory {path:?}: {error}")]
    Directory {
        /// The underlying IO error.
        error: std::io::Error,
        /// The artifacts directory path.
        path: PathBuf,
    },
    /// A single artifact cannot be read. The artifact is skipped.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

impl Error {
    ///
    /// Whether the error stops the whole run.
    ///
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DirectoryMissing { .. } => true,
            Self::Directory { .. } => true,
            Self::Artifact(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Error;
    use crate::artifact::error::Error as ArtifactError;

    #[test]
    fn fatality() {
        let missing = Error::DirectoryMissing {
            path: PathBuf::from("/project/build/contracts"),
        };
        let skipped = Error::from(ArtifactError::EmptyFile {
            path: PathBuf::from("/project/build/contracts/Token.json"),
        });

        assert!(missing.is_fatal());
        assert!(!skipped.is_fatal());
    }
}
