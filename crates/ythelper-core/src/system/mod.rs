//! External tool dependencies.
//!
//! Core defines the types and the check; the runtime crate implements the
//! [`DependencyProbe`](crate::ports::DependencyProbe) that queries the OS.

mod check;
mod types;

pub use check::{
    DependencyError, check_dependencies, required_dependencies, transcoder_override,
};
pub use types::{Dependency, DependencyStatus};
