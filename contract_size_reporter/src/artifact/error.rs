//!
//! Artifact reading error.
//!

use std::path::PathBuf;

///
/// Artifact reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the artifact file.
    #[error("Reading artifact file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Artifact file {path:?} is empty")]
    EmptyFile {
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// Error parsing the artifact file.
    /// Also covers missing required fields and fields of a wrong type.
    #[error("Parsing artifact file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// A hex-encoded bytecode field has an odd number of digits.
    #[error("Artifact file {path:?}: field `{field}` has an odd hex length {length}")]
    OddBytecodeLength {
        /// The path to the artifact file.
        path: PathBuf,
        /// The offending field name.
        field: &'static str,
        /// The hex string length.
        length: usize,
    },
}

impl Error {
    ///
    /// Returns the path of the artifact that caused the error.
    ///
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Reading { path, .. } => path,
            Self::EmptyFile { path } => path,
            Self::Parsing { path, .. } => path,
            Self::OddBytecodeLength { path, .. } => path,
        }
    }
}
