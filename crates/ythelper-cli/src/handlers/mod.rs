//! Command handlers.

pub mod download;

pub use download::{DownloadArgs, DownloadReport, execute as download};
