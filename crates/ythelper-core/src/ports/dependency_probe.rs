//! Dependency probe port.
//!
//! Core owns the trait; the runtime crate resolves executables on the real
//! search path. Presence is checked once and assumed static afterwards.

use std::path::PathBuf;

/// Resolves executables the helper needs.
pub trait DependencyProbe: Send + Sync {
    /// Locate `program` the way a shell's `command -v` would.
    ///
    /// Returns `None` when the program cannot be resolved.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
