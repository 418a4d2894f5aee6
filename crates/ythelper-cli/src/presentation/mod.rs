//! Terminal output for the download run.
//!
//! Progress lines go to stdout. Warnings and errors go to stderr, prefixed
//! `warning:` / `error:`, coloured only when stderr is a terminal.

use std::io::IsTerminal;

use ythelper_core::{Dependency, DependencyStatus, DownloadInvocation, RequestWarning};

use crate::error::CliError;

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn label(text: &str, color: &str) -> String {
    if std::io::stderr().is_terminal() {
        format!("{BOLD}{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn print_warning(warning: &RequestWarning) {
    eprintln!("{} {warning}", label("warning:", YELLOW));
}

/// Print a failure and, when there is one, its follow-up hint.
pub fn print_error(err: &CliError) {
    eprintln!("{} {err}", label("error:", RED));
    if let Some(hint) = err.hint() {
        eprintln!("  {hint}");
    }
}

pub fn print_created_directory(path: &std::path::Path) {
    println!("created dir: {}", path.display());
}

pub fn print_running(invocation: &DownloadInvocation) {
    println!("running command: {invocation}");
}

pub fn print_success() {
    println!("command executed successfully.");
}

/// Format one resolved tool for debug logging.
pub fn describe_dependency(dep: &Dependency) -> String {
    match &dep.status {
        DependencyStatus::Present { location } => {
            format!("{:<8} {} ({})", dep.name, location.display(), dep.description)
        }
        DependencyStatus::Missing => format!("{:<8} missing ({})", dep.name, dep.description),
    }
}
