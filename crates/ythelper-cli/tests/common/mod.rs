//! Fake ports for driving the download pipeline without real tools.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ythelper_cli::CliContext;
use ythelper_core::ports::{CommandExecutor, DependencyProbe, ExecutionError, ExecutionResult};
use ythelper_core::{DownloadInvocation, HelperSettings};

/// Resolves only the listed programs, under `/usr/bin`.
pub struct FakeProbe {
    installed: Vec<String>,
}

impl FakeProbe {
    pub fn with(installed: &[&str]) -> Self {
        Self {
            installed: installed.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn all_tools() -> Self {
        Self::with(&["yt-dlp", "ffmpeg"])
    }
}

impl DependencyProbe for FakeProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.installed
            .iter()
            .any(|name| name == program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}

/// Records every invocation and replies with a fixed result.
pub struct RecordingExecutor {
    result: ExecutionResult,
    calls: Mutex<Vec<DownloadInvocation>>,
}

impl RecordingExecutor {
    pub fn returning(result: ExecutionResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::returning(ExecutionResult::exited(0))
    }

    pub fn calls(&self) -> Vec<DownloadInvocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, invocation: &DownloadInvocation) -> Result<ExecutionResult, ExecutionError> {
        self.calls.lock().unwrap().push(invocation.clone());
        Ok(self.result)
    }
}

pub fn context(
    settings: HelperSettings,
    probe: FakeProbe,
    executor: &Arc<RecordingExecutor>,
) -> CliContext {
    CliContext::new(settings, Arc::new(probe), executor.clone())
}
