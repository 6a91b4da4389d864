//!
//! The contract size reporter binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use contract_size_reporter::Sink;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => error.exit(),
    };
    let exit_code = match main_inner(arguments) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{error:?}");
            contract_size_reporter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<i32> {
    if let Some(threads) = arguments.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let current_directory = std::env::current_dir()?;
    let root = match arguments.root {
        Some(root) => current_directory.join(root),
        None => current_directory,
    };
    let config = match arguments.limit {
        Some(limit) => contract_size_reporter::Config::with_limit(limit),
        None => contract_size_reporter::Config::default(),
    };
    let detailed = arguments.detailed.unwrap_or_default();

    let mut sink = contract_size_reporter::TerminalSink;
    match contract_size_reporter::Report::run_directory(
        root.as_path(),
        &config,
        detailed,
        &mut sink,
    ) {
        Ok(_report) => Ok(contract_size_reporter::EXIT_CODE_SUCCESS),
        Err(error) => {
            sink.report_error(&error);
            Ok(if error.is_fatal() {
                contract_size_reporter::EXIT_CODE_FAILURE
            } else {
                contract_size_reporter::EXIT_CODE_SUCCESS
            })
        }
    }
}
