//! Exit status codes for the CLI
//!
//! rawk keeps the traditional awk startup conventions:
//! - 0: Success, including "no program supplied" and usage requests
//! - 2: Any fatal startup diagnostic (bad option, missing argument, ...)

use std::process::{ExitCode, Termination};

/// Exit status codes returned by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Startup completed, or there was nothing to run
    Success = 0,
    /// A fatal diagnostic was written to stderr
    Error = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Create an exit status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ExitStatus::from_code(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from_code(2), ExitStatus::Error);
        assert_eq!(ExitStatus::from_code(1), ExitStatus::Error);
    }

    #[test]
    fn test_error_is_two() {
        assert_eq!(ExitStatus::Error.code(), 2);
    }
}
