//! Synchronous process execution.
//!
//! The download tool is spawned directly from its argument vector with the
//! terminal's stdio inherited, so its own progress output reaches the user.

use std::process::{Command, ExitStatus};

use ythelper_core::DownloadInvocation;
use ythelper_core::ports::{CommandExecutor, ExecutionError, ExecutionResult};

/// Default implementation of [`CommandExecutor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, invocation: &DownloadInvocation) -> Result<ExecutionResult, ExecutionError> {
        tracing::debug!(
            program = %invocation.program,
            args = ?invocation.args,
            "spawning download tool"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| ExecutionError::SpawnFailed {
                program: invocation.program.clone(),
                source,
            })?;

        let result = exit_status_to_result(status);
        tracing::debug!(?result, "download tool finished");
        Ok(result)
    }
}

/// Translate an OS exit status into an [`ExecutionResult`].
pub fn exit_status_to_result(status: ExitStatus) -> ExecutionResult {
    match status.code() {
        Some(code) => ExecutionResult::exited(code),
        None => ExecutionResult::abnormal(terminating_signal(status)),
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
const fn terminating_signal(_status: ExitStatus) -> Option<i32> {
    None
}
