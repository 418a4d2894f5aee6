//! Core domain for ythelper.
//!
//! Everything here is deterministic given its inputs: validation of the
//! positional arguments, the custom-name policy, selection of the output-path
//! template and construction of the download tool's argument vector. Process
//! spawning and `PATH` lookups sit behind the traits in [`ports`].
#![deny(unused_crate_dependencies)]

pub mod invocation;
pub mod naming;
pub mod paths;
pub mod ports;
pub mod request;
pub mod settings;
pub mod system;
pub mod template;

// Re-export commonly used types for convenience
pub use invocation::{DownloadInvocation, build_invocation};
pub use naming::{CustomNamePolicy, MAX_CUSTOM_NAME_LEN, sanitize_custom_name};
pub use paths::{
    DirectoryCreationStrategy, PathError, PreparedDirectory, normalize_destination,
    prepare_destination,
};
pub use ports::{CommandExecutor, DependencyProbe, ExecutionError, ExecutionResult};
pub use request::{
    Mode, Request, RequestError, RequestWarning, ValidatedRequest, is_playlist_url,
    validate_request,
};
pub use settings::{HelperSettings, SettingsError, validate_settings};
pub use system::{
    Dependency, DependencyError, DependencyStatus, check_dependencies, transcoder_override,
};
pub use template::{CommandTemplate, NamingCase, select_template};
