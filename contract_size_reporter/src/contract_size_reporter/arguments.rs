//!
//! The contract size reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The contract size reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The project root directory with `build/contracts` inside.
    /// Defaults to the current working directory.
    pub root: Option<PathBuf>,

    /// Show all contracts regardless of their size: `true` or `false`.
    #[arg(value_parser = parse_detailed)]
    pub detailed: Option<bool>,

    /// The deployed bytecode size limit in bytes.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Sets the number of threads reading the artifacts.
    #[arg(short, long)]
    pub threads: Option<usize>,
}

///
/// Parses the detailed mode flag, case-insensitively.
///
fn parse_detailed(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        value => Err(format!(
            "Invalid detailed mode flag `{value}`. Expected `true` or `false`"
        )),
    }
}
