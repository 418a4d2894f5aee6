//! Ports implemented by the runtime crate.

mod dependency_probe;
mod executor;

pub use dependency_probe::DependencyProbe;
pub use executor::{CommandExecutor, ExecutionError, ExecutionResult};
