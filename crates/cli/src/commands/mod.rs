pub mod common;
pub mod lint;
pub mod rules;

use crate::ExitCode;
use graphql_usage_config::ConfigError;
use graphql_usage_linter::{LintConfigError, SourceError};

/// Pick the process exit code for an error that aborted a command.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<ConfigError>().is_some()
        || err.downcast_ref::<LintConfigError>().is_some()
    {
        ExitCode::ConfigError
    } else if err.downcast_ref::<SourceError>().is_some()
        || err.downcast_ref::<std::io::Error>().is_some()
        || err.downcast_ref::<walkdir::Error>().is_some()
    {
        ExitCode::IoError
    } else {
        ExitCode::LintError
    }
}
