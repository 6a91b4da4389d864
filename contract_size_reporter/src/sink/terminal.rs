//!
//! The terminal output sink.
//!

use colored::Colorize;

use crate::error::Error;
use crate::report::table::Table;
use crate::sink::Sink;

///
/// The terminal output sink.
///
/// Writes errors to stderr and the table to stdout, colored by status.
///
#[derive(Debug, Default)]
pub struct TerminalSink;

impl Sink for TerminalSink {
    fn report_error(&mut self, error: &Error) {
        eprintln!("{} {}", "error:".bright_red().bold(), error.to_string().red());
    }

    fn report_table(&mut self, banner: &str, table: &Table) {
        println!("{}", banner.bold());
        for line in table.lines() {
            match line.status {
                Some(status) => println!("{}", line.text.color(status.color())),
                None if line.is_header => println!("{}", line.text.bold()),
                None => println!("{}", line.text),
            }
        }
    }
}
