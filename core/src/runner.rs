//! Executes authorized actions.

use std::fmt;
use std::path::PathBuf;

use grazr_helper_common::exit::HelperExit;
use grazr_helper_common::model::DomainName;

use crate::error::HelperError;
use crate::hosts::{self, AddOutcome, RemoveOutcome};
use crate::policy::Action;
use crate::query::{self, QueryOutput};

/// The result of a successful invocation.
///
/// `Display` renders the single line meant for the caller's stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Queried(QueryOutput),
    Added { domain: DomainName, path: PathBuf },
    AlreadyPresent { domain: DomainName },
    Removed { domain: DomainName, path: PathBuf, count: usize },
    NotFound { domain: DomainName },
    HostsFileMissing,
}

impl Outcome {
    /// Query outcomes carry the tool's own exit code; everything else is a
    /// plain success.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Queried(output) => {
                u8::try_from(output.exit_code).unwrap_or(HelperExit::Internal.code())
            }
            _ => HelperExit::Success.code(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Queried(output) => write!(f, "Helper Result: {}", output.text),
            Outcome::Added { domain, path } => {
                write!(f, "Helper: Added {domain} to {}.", path.display())
            }
            Outcome::AlreadyPresent { domain } => write!(f, "Helper: Entry for {domain} exists."),
            Outcome::Removed { domain, path, .. } => {
                write!(f, "Helper: Removed {domain} from {}.", path.display())
            }
            Outcome::NotFound { domain } => write!(f, "Helper: Entry for {domain} not found."),
            Outcome::HostsFileMissing => write!(f, "Helper: Hosts file not found."),
        }
    }
}

pub fn execute(action: Action) -> Result<Outcome, HelperError> {
    match action {
        Action::Query {
            kind,
            service,
            tool,
        } => Ok(Outcome::Queried(query::query_service(service, kind, &tool)?)),
        Action::AddEntry { entry, target } => {
            match hosts::add_entry(&entry, &target).map_err(HelperError::AddEntry)? {
                AddOutcome::Added => Ok(Outcome::Added {
                    domain: entry.domain,
                    path: target.path,
                }),
                AddOutcome::AlreadyPresent => Ok(Outcome::AlreadyPresent {
                    domain: entry.domain,
                }),
            }
        }
        Action::RemoveEntry { domain, target } => {
            match hosts::remove_entry(&domain, &target).map_err(HelperError::RemoveEntry)? {
                RemoveOutcome::Removed(count) => Ok(Outcome::Removed {
                    domain,
                    path: target.path,
                    count,
                }),
                RemoveOutcome::NotFound { file_exists: true } => Ok(Outcome::NotFound { domain }),
                RemoveOutcome::NotFound { file_exists: false } => Ok(Outcome::HostsFileMissing),
            }
        }
    }
}
