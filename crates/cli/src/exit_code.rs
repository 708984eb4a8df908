//! Exit codes for the graphql-usage CLI.
//!
//! Distinct codes let scripts and CI systems tell failure modes apart.

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// No errors
    Success = 0,
    /// At least one diagnostic with error severity
    LintError = 1,
    /// Missing, unreadable or invalid config file
    ConfigError = 2,
    /// I/O error (source file or directory could not be read)
    IoError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}
