//! OS adapters for ythelper.
//!
//! Implements the ports declared in `ythelper-core`:
//! - [`DefaultSystemProbe`] resolves the external tools on `PATH`
//! - [`SystemExecutor`] runs the download tool and reports how it ended
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

pub mod process;
pub mod system;

pub use process::{SystemExecutor, exit_status_to_result};
pub use system::DefaultSystemProbe;
