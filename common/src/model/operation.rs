//! # Operations
//!
//! The closed set of actions the helper will perform. Anything outside of
//! [`Operation`] is rejected before a file is touched or a process started.

use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Read-only service queries, passed verbatim as the first argument of the
/// query tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Status,
    IsActive,
    IsEnabled,
    IsFailed,
}

impl QueryKind {
    pub const ALL: [QueryKind; 4] = [
        QueryKind::Status,
        QueryKind::IsActive,
        QueryKind::IsEnabled,
        QueryKind::IsFailed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Status => "status",
            QueryKind::IsActive => "is-active",
            QueryKind::IsEnabled => "is-enabled",
            QueryKind::IsFailed => "is-failed",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every action the helper recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Query(QueryKind),
    AddHostEntry,
    RemoveHostEntry,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Query(kind) => kind.as_str(),
            Operation::AddHostEntry => "add_host_entry",
            Operation::RemoveHostEntry => "remove_host_entry",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbs the query tool understands but that change system state.
///
/// They are recognised only so they can be refused with a dedicated reason
/// instead of being reported as unknown.
pub const DENIED_QUERY_VERBS: &[&str] = &[
    "start",
    "stop",
    "restart",
    "reload",
    "try-restart",
    "reload-or-restart",
    "try-reload-or-restart",
    "condrestart",
    "force-reload",
    "kill",
    "clean",
    "freeze",
    "thaw",
    "enable",
    "disable",
    "reenable",
    "preset",
    "preset-all",
    "mask",
    "unmask",
    "link",
    "revert",
    "edit",
    "set-property",
    "isolate",
    "reset-failed",
    "daemon-reload",
    "daemon-reexec",
    "set-default",
    "set-environment",
    "unset-environment",
];

impl FromStr for Operation {
    type Err = PolicyError;

    /// Parses an action name.
    ///
    /// * Read-only query kinds and the two hosts actions are accepted.
    /// * Mutating verbs of the query tool yield [`PolicyError::QueryKindNotAllowed`].
    /// * Everything else yields [`PolicyError::UnsupportedOperation`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = QueryKind::ALL.into_iter().find(|kind| kind.as_str() == s) {
            return Ok(Operation::Query(kind));
        }

        match s {
            "add_host_entry" => Ok(Operation::AddHostEntry),
            "remove_host_entry" => Ok(Operation::RemoveHostEntry),
            verb if DENIED_QUERY_VERBS.contains(&verb) => {
                Err(PolicyError::QueryKindNotAllowed(verb.to_string()))
            }
            other => Err(PolicyError::UnsupportedOperation(other.to_string())),
        }
    }
}
