//!
//! The contract size report.
//!

pub mod contract;
pub mod status;
pub mod table;

use std::path::Path;
use std::path::PathBuf;

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::artifact::Artifact;
use crate::config::Config;
use crate::directory::ArtifactsDirectory;
use crate::error::Error;
use crate::sink::Sink;

use self::contract::ContractReport;
use self::table::Table;

///
/// The contract size report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// The contract rows, in collection order until sorted.
    pub contracts: Vec<ContractReport>,
}

impl Report {
    ///
    /// Reports the artifacts directory of the project at `root`.
    ///
    /// The root is canonicalized before source paths are rewritten against it.
    /// Fails only if the directory is missing or cannot be listed.
    ///
    pub fn run_directory(
        root: &Path,
        config: &Config,
        detailed: bool,
        sink: &mut dyn Sink,
    ) -> Result<Self, Error> {
        let directory = ArtifactsDirectory::resolve(root)?;
        let root = std::fs::canonicalize(root).map_err(|error| Error::Directory {
            error,
            path: root.to_path_buf(),
        })?;
        let paths = directory.files()?;
        Ok(Self::run(
            paths.as_slice(),
            root.as_path(),
            config,
            detailed,
            sink,
        ))
    }

    ///
    /// Collects, filters, sorts, and prints the report for the artifact files.
    ///
    pub fn run(
        paths: &[PathBuf],
        root: &Path,
        config: &Config,
        detailed: bool,
        sink: &mut dyn Sink,
    ) -> Self {
        let mut report = Self::collect(paths, root, config, sink);
        report.filter(config, detailed);
        report.sort();
        report.print(config, sink);
        report
    }

    ///
    /// Reads the artifacts in parallel and derives the rows.
    ///
    /// Unreadable artifacts are reported to the sink in input order and skipped.
    ///
    pub fn collect(paths: &[PathBuf], root: &Path, config: &Config, sink: &mut dyn Sink) -> Self {
        let results: Vec<Result<ContractReport, Error>> = paths
            .par_iter()
            .map(|path| {
                Artifact::try_from(path.as_path())
                    .map(|artifact| ContractReport::new(artifact, root, config))
                    .map_err(Error::from)
            })
            .collect();

        let mut contracts = Vec::with_capacity(results.len());
        for result in results.into_iter() {
            match result {
                Ok(contract) => contracts.push(contract),
                Err(error) => sink.report_error(&error),
            }
        }
        Self { contracts }
    }

    ///
    /// Outside detailed mode, drops the contracts below the display threshold.
    ///
    pub fn filter(&mut self, config: &Config, detailed: bool) {
        if detailed {
            return;
        }
        let threshold = config.display_threshold();
        self.contracts
            .retain(|contract| (contract.deployed_bytecode_length as f64) >= threshold);
    }

    ///
    /// Sorts the contracts by deployed size, largest first.
    ///
    /// The sort is stable, so equal sizes keep the collection order.
    ///
    pub fn sort(&mut self) {
        self.contracts
            .sort_by(|a, b| b.deployed_bytecode_length.cmp(&a.deployed_bytecode_length));
    }

    ///
    /// Returns the rendered table.
    ///
    pub fn table(&self, config: &Config) -> Table {
        Table::new(self.contracts.as_slice(), config)
    }

    ///
    /// Prints the banner and the table to the sink, if there is anything to show.
    ///
    pub fn print(&self, config: &Config, sink: &mut dyn Sink) {
        let table = self.table(config);
        if table.is_empty() {
            return;
        }
        sink.report_table(crate::BANNER, &table);
    }
}
