//! Command execution port.
//!
//! The runtime crate spawns the real process; tests substitute recorders.

use std::io;

use thiserror::Error;

use crate::invocation::DownloadInvocation;

/// How a finished process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code when the process terminated normally.
    pub exit_code: Option<i32>,
    /// Terminating signal, where the platform reports one.
    pub signal: Option<i32>,
    pub terminated_normally: bool,
}

impl ExecutionResult {
    /// Process exited on its own with `code`.
    pub const fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            signal: None,
            terminated_normally: true,
        }
    }

    /// Process was terminated abnormally (e.g. by a signal).
    pub const fn abnormal(signal: Option<i32>) -> Self {
        Self {
            exit_code: None,
            signal,
            terminated_normally: false,
        }
    }

    /// Interpret the result: only a normal exit with code 0 is success.
    pub fn into_outcome(self) -> Result<(), ExecutionError> {
        match (self.terminated_normally, self.exit_code) {
            (true, Some(0)) => Ok(()),
            (true, Some(code)) => Err(ExecutionError::ExternalToolFailed(code)),
            _ => Err(ExecutionError::AbnormalTermination {
                signal: self.signal,
            }),
        }
    }
}

/// Failures while running the download tool.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The process could not be started at all.
    #[error("error executing {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran and exited with a nonzero code.
    #[error("download tool exited with code {0}")]
    ExternalToolFailed(i32),

    /// The tool did not terminate normally.
    #[error("download tool did not terminate normally{}", signal_suffix(.signal))]
    AbnormalTermination { signal: Option<i32> },
}

fn signal_suffix(signal: &Option<i32>) -> String {
    signal.map_or_else(String::new, |s| format!(" (signal {s})"))
}

/// Runs a download invocation to completion.
pub trait CommandExecutor: Send + Sync {
    /// Run synchronously, blocking until the process exits.
    fn execute(&self, invocation: &DownloadInvocation) -> Result<ExecutionResult, ExecutionError>;
}
