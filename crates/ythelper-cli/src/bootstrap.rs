//! CLI bootstrap - the composition root.
//!
//! Concrete adapters from `ythelper-runtime` are instantiated here and
//! nowhere else. Handlers only see the ports through [`CliContext`].

use std::sync::Arc;

use ythelper_core::ports::{CommandExecutor, DependencyProbe};
use ythelper_core::{DirectoryCreationStrategy, HelperSettings, validate_settings};
use ythelper_runtime::{DefaultSystemProbe, SystemExecutor};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: HelperSettings,
}

impl CliConfig {
    /// Collect settings from parsed flags (which already fold in the
    /// `YTHELPER_*` environment variables).
    pub fn from_cli(cli: &Cli) -> Self {
        let directory_creation = if cli.parents {
            DirectoryCreationStrategy::Recursive
        } else {
            DirectoryCreationStrategy::SingleLevel
        };

        Self {
            settings: HelperSettings {
                custom_name_policy: cli.playlist_name_policy.into(),
                audio_format: cli.audio_format.clone(),
                download_tool: cli.download_tool.clone(),
                transcode_tool: cli.transcode_tool.clone(),
                directory_creation,
            },
        }
    }
}

/// Fully composed context for the download handler.
pub struct CliContext {
    settings: HelperSettings,
    probe: Arc<dyn DependencyProbe>,
    executor: Arc<dyn CommandExecutor>,
}

impl CliContext {
    /// Assemble a context from explicit parts.
    pub fn new(
        settings: HelperSettings,
        probe: Arc<dyn DependencyProbe>,
        executor: Arc<dyn CommandExecutor>,
    ) -> Self {
        Self {
            settings,
            probe,
            executor,
        }
    }

    pub const fn settings(&self) -> &HelperSettings {
        &self.settings
    }

    pub fn probe(&self) -> &dyn DependencyProbe {
        self.probe.as_ref()
    }

    pub fn executor(&self) -> &dyn CommandExecutor {
        self.executor.as_ref()
    }
}

/// Validate the configuration and wire the OS adapters.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let settings = validate_settings(config.settings)?;
    tracing::debug!(?settings, "settings resolved");

    Ok(CliContext::new(
        settings,
        Arc::new(DefaultSystemProbe::new()),
        Arc::new(SystemExecutor::new()),
    ))
}
