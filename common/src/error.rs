use std::path::PathBuf;

use thiserror::Error;

use crate::exit::HelperExit;
use crate::model::Operation;

/// Why a caller-supplied value failed its syntactic check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("domain name is empty")]
    EmptyDomain,
    #[error("domain name is {0} characters long (max 253)")]
    DomainTooLong(usize),
    #[error("domain name '{domain}' contains illegal character {ch:?}")]
    IllegalCharacter { domain: String, ch: char },
    #[error("domain name '{0}' contains '..'")]
    DoubleDot(String),
    #[error("domain name '{0}' starts with '/'")]
    LeadingSlash(String),
    #[error("domain name '{0}' ends with '.'")]
    TrailingDot(String),
    #[error("'{0}' is not a valid IP address")]
    InvalidIp(String),
    #[error("hosts marker {0:?} must start with '#' and contain no control characters")]
    InvalidMarker(String),
}

/// A request the policy gate refused. Nothing has been modified when one of
/// these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unsupported action '{0}'.")]
    UnsupportedOperation(String),
    #[error("Action '{operation}' requires --{argument}.")]
    MissingArgument {
        operation: Operation,
        argument: &'static str,
    },
    #[error("Service '{0}' not allowed.")]
    ServiceNotAllowed(String),
    #[error("Action '{0}' not allowed.")]
    QueryKindNotAllowed(String),
    #[error("systemctl path invalid: {}", .0.display())]
    ToolPathInvalid(PathBuf),
    #[error("Invalid host entry: {0}")]
    InvalidHostEntry(#[source] ValidationError),
    #[error("Invalid host removal: {0}")]
    InvalidHostRemoval(#[source] ValidationError),
}

impl PolicyError {
    pub fn exit_code(&self) -> HelperExit {
        match self {
            PolicyError::UnsupportedOperation(_) => HelperExit::UnsupportedOperation,
            PolicyError::MissingArgument { .. } => HelperExit::Usage,
            PolicyError::ServiceNotAllowed(_) => HelperExit::ServiceNotAllowed,
            PolicyError::QueryKindNotAllowed(_) => HelperExit::QueryKindNotAllowed,
            PolicyError::ToolPathInvalid(_) => HelperExit::ToolPathInvalid,
            PolicyError::InvalidHostEntry(_) => HelperExit::AddValidation,
            PolicyError::InvalidHostRemoval(_) => HelperExit::RemoveValidation,
        }
    }
}
