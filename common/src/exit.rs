//! # Exit Codes
//!
//! The exit code is the machine-readable half of every result, so each
//! failure cause gets its own value. A successful query is the exception: it
//! exits with whatever the query tool returned.

use std::process::ExitCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HelperExit {
    Success = 0,
    /// A required argument is missing or the command line did not parse.
    Usage = 1,
    UnsupportedOperation = 2,
    QueryLaunchFailed = 4,
    ServiceNotAllowed = 10,
    QueryKindNotAllowed = 11,
    ToolPathInvalid = 12,
    AddValidation = 70,
    AddWriteFailed = 71,
    RemoveValidation = 72,
    RemoveWriteFailed = 73,
    Internal = 99,
}

impl HelperExit {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<HelperExit> for ExitCode {
    fn from(exit: HelperExit) -> Self {
        ExitCode::from(exit.code())
    }
}
