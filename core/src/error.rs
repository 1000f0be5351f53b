use grazr_helper_common::error::PolicyError;
use grazr_helper_common::exit::HelperExit;
use thiserror::Error;

use crate::hosts::HostsError;
use crate::query::QueryError;

/// Every way a single invocation can fail, each tied to one exit code.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    AddEntry(HostsError),
    #[error(transparent)]
    RemoveEntry(HostsError),
}

impl HelperError {
    pub fn exit_code(&self) -> HelperExit {
        match self {
            HelperError::Policy(err) => err.exit_code(),
            HelperError::Query(_) => HelperExit::QueryLaunchFailed,
            HelperError::AddEntry(_) => HelperExit::AddWriteFailed,
            HelperError::RemoveEntry(_) => HelperExit::RemoveWriteFailed,
        }
    }
}
