//! Dependency probe backed by the `which` crate.

use std::path::PathBuf;

use ythelper_core::ports::DependencyProbe;

/// Default implementation of [`DependencyProbe`].
///
/// Bare names are searched on `PATH`; names containing a path separator are
/// checked directly, mirroring `command -v`.
///
/// # Example
///
/// ```
/// use ythelper_core::ports::DependencyProbe;
/// use ythelper_runtime::DefaultSystemProbe;
///
/// let probe = DefaultSystemProbe::new();
/// assert!(probe.locate("definitely-not-a-real-tool-12345").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new default system probe.
    pub const fn new() -> Self {
        Self
    }
}

impl DependencyProbe for DefaultSystemProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(program, error = %e, "executable lookup failed");
                None
            }
        }
    }
}
