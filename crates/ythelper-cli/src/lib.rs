//! Command-line adapter for ythelper.
//!
//! Parses arguments, composes the runtime adapters in [`bootstrap`], and runs
//! the download pipeline in [`handlers::download`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary entry point
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::{CliError, EXIT_FAILURE};
pub use handlers::{DownloadArgs, DownloadReport};
pub use parser::{Cli, PlaylistNamePolicy};
