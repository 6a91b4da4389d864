//!
//! Compiled contract artifact.
//!

pub mod error;

use std::path::Path;

use self::error::Error as ArtifactError;

///
/// Compiled contract artifact.
///
/// Only the fields used by the report are read, the rest of the artifact is ignored.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Absolute path to the contract source file, as recorded at compile time.
    pub source_path: String,
    /// Hex-encoded creation bytecode.
    pub bytecode: String,
    /// Hex-encoded runtime bytecode.
    pub deployed_bytecode: String,
}

impl Artifact {
    ///
    /// Returns the creation bytecode size in bytes.
    ///
    pub fn bytecode_length(&self) -> usize {
        self.bytecode.len() / 2
    }

    ///
    /// Returns the runtime bytecode size in bytes.
    ///
    pub fn deployed_bytecode_length(&self) -> usize {
        self.deployed_bytecode.len() / 2
    }

    ///
    /// Checks that both bytecode fields have an even number of hex digits.
    ///
    fn validate(self, path: &Path) -> Result<Self, ArtifactError> {
        for (field, value) in [
            ("bytecode", self.bytecode.as_str()),
            ("deployedBytecode", self.deployed_bytecode.as_str()),
        ] {
            if value.len() % 2 != 0 {
                return Err(ArtifactError::OddBytecodeLength {
                    path: path.to_path_buf(),
                    field,
                    length: value.len(),
                });
            }
        }
        Ok(self)
    }
}

impl TryFrom<&Path> for Artifact {
    type Error = ArtifactError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| ArtifactError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(ArtifactError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let artifact: Self =
            serde_json::from_str(text.as_str()).map_err(|error| ArtifactError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        artifact.validate(path)
    }
}
