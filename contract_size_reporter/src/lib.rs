//!
//! The contract size reporter library.
//!

pub mod artifact;
pub mod config;
pub mod directory;
pub mod error;
pub mod report;
pub mod sink;
pub mod util;

pub use crate::artifact::error::Error as ArtifactError;
pub use crate::artifact::Artifact;
pub use crate::config::messages::Messages;
pub use crate::config::Config;
pub use crate::directory::ArtifactsDirectory;
pub use crate::error::Error;
pub use crate::report::contract::ContractReport;
pub use crate::report::status::Status;
pub use crate::report::table::Line as TableLine;
pub use crate::report::table::Table;
pub use crate::report::Report;
pub use crate::sink::memory::MemorySink;
pub use crate::sink::terminal::TerminalSink;
pub use crate::sink::Sink;

/// The banner printed before a non-empty report table.
pub const BANNER: &str = "Please review the following contracts!!!";

/// The exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The exit code on a fatal error.
pub const EXIT_CODE_FAILURE: i32 = 1;
