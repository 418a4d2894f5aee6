//! The download pipeline.
//!
//! Validate, check tools, prepare the directory, build the command, run it.
//! Each stage short-circuits, so nothing is executed unless every earlier
//! stage succeeded.

use ythelper_core::{
    CommandTemplate, DownloadInvocation, PreparedDirectory, ValidatedRequest, build_invocation,
    check_dependencies, normalize_destination, prepare_destination, select_template,
    transcoder_override, validate_request,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation;

/// Positional arguments as typed by the user.
#[derive(Debug, Clone, Copy)]
pub struct DownloadArgs<'a> {
    pub mode: &'a str,
    pub url: &'a str,
    pub download_path: &'a str,
    pub custom_name: Option<&'a str>,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub template: CommandTemplate,
    pub directory: PreparedDirectory,
    pub invocation: DownloadInvocation,
}

/// Run one download request end to end.
pub fn execute(ctx: &CliContext, args: &DownloadArgs<'_>) -> Result<DownloadReport, CliError> {
    let settings = ctx.settings();

    let ValidatedRequest { request, warnings } = validate_request(
        args.mode,
        args.url,
        args.download_path,
        args.custom_name,
        settings.custom_name_policy,
    )?;
    for warning in &warnings {
        presentation::print_warning(warning);
    }

    let dependencies = check_dependencies(ctx.probe(), settings)?;
    for dep in &dependencies {
        tracing::debug!("{}", presentation::describe_dependency(dep));
    }

    let destination = normalize_destination(&request.destination)?;
    let directory = prepare_destination(&destination, settings.directory_creation)?;
    if directory.created {
        presentation::print_created_directory(&directory.path);
    }

    let template = select_template(
        request.mode,
        request.is_playlist(),
        request.custom_name.is_some(),
    );
    let invocation = build_invocation(
        &request,
        template,
        &directory.path,
        settings,
        transcoder_override(settings, &dependencies),
    );
    tracing::debug!(?template, "command template selected");

    presentation::print_running(&invocation);
    ctx.executor().execute(&invocation)?.into_outcome()?;
    presentation::print_success();

    Ok(DownloadReport {
        template,
        directory,
        invocation,
    })
}
