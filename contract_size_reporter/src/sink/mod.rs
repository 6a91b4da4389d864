//!
//! The report output sink.
//!

pub mod memory;
pub mod terminal;

use crate::error::Error;
use crate::report::table::Table;

///
/// The report output sink.
///
/// Separates the report logic from the terminal, so the report can be collected in memory.
///
pub trait Sink {
    ///
    /// Reports an error, fatal or per-artifact.
    ///
    fn report_error(&mut self, error: &Error);

    ///
    /// Reports a non-empty table, preceded by the banner.
    ///
    fn report_table(&mut self, banner: &str, table: &Table);
}
