//!
//! The in-memory output sink.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::report::table::Table;
use crate::sink::Sink;

///
/// The in-memory output sink.
///
#[derive(Debug, Default)]
pub struct MemorySink {
    /// The reported error messages, in order.
    pub errors: Vec<String>,
    /// The paths of the skipped artifacts, in order.
    pub skipped: Vec<PathBuf>,
    /// The reported banners and tables, in order.
    pub tables: Vec<(String, Table)>,
}

impl MemorySink {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for MemorySink {
    fn report_error(&mut self, error: &Error) {
        if let Error::Artifact(artifact_error) = error {
            self.skipped.push(artifact_error.path().to_path_buf());
        }
        self.errors.push(error.to_string());
    }

    fn report_table(&mut self, banner: &str, table: &Table) {
        self.tables.push((banner.to_owned(), table.clone()));
    }
}
