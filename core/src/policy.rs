//! The **policy gate**.
//!
//! Every privileged code path starts from an [`Action`], and the only way to
//! obtain one is [`authorize`]. Allowlist membership, syntactic validation and
//! presence of required arguments are all settled here, before any file is
//! read or any process is spawned.

use std::path::{Path, PathBuf};

use grazr_helper_common::error::PolicyError;
use grazr_helper_common::model::{
    DomainName, HostEntry, HostsMarker, HostsTarget, IpAddress, Operation, QueryKind, Service,
};
use grazr_helper_common::request::Request;
use tracing::debug;

/// A request that passed the gate, carrying only validated values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Query {
        kind: QueryKind,
        service: Service,
        tool: PathBuf,
    },
    AddEntry {
        entry: HostEntry,
        target: HostsTarget,
    },
    RemoveEntry {
        domain: DomainName,
        target: HostsTarget,
    },
}

/// Validates `request` and returns the action it authorizes.
///
/// Pure: inspects the filesystem only to confirm the query tool is a
/// regular file.
pub fn authorize(request: &Request) -> Result<Action, PolicyError> {
    let operation: Operation = request.action.parse()?;
    debug!("Authorizing action '{operation}'");

    match operation {
        Operation::Query(kind) => authorize_query(operation, kind, request),
        Operation::AddHostEntry => authorize_add(operation, request),
        Operation::RemoveHostEntry => authorize_remove(operation, request),
    }
}

fn authorize_query(
    operation: Operation,
    kind: QueryKind,
    request: &Request,
) -> Result<Action, PolicyError> {
    let service = required_str(operation, "service", request.service.as_deref())?;
    let tool = required_path(operation, "systemctl-path", request.tool_path.as_deref())?;

    let service: Service = service.parse()?;

    if !tool.is_file() {
        return Err(PolicyError::ToolPathInvalid(tool.to_path_buf()));
    }

    Ok(Action::Query {
        kind,
        service,
        tool: tool.to_path_buf(),
    })
}

fn authorize_add(operation: Operation, request: &Request) -> Result<Action, PolicyError> {
    let domain = required_str(operation, "domain", request.domain.as_deref())?;
    let path = required_path(operation, "hosts-path", request.hosts_path.as_deref())?;
    let marker = required_str(operation, "hosts-marker", request.hosts_marker.as_deref())?;

    let domain = DomainName::parse(domain).map_err(PolicyError::InvalidHostEntry)?;
    let ip = match request.ip.as_deref() {
        Some(raw) => IpAddress::parse(raw).map_err(PolicyError::InvalidHostEntry)?,
        None => IpAddress::loopback(),
    };
    let marker = HostsMarker::parse(marker).map_err(PolicyError::InvalidHostEntry)?;

    Ok(Action::AddEntry {
        entry: HostEntry::new(ip, domain),
        target: HostsTarget::new(path, marker),
    })
}

fn authorize_remove(operation: Operation, request: &Request) -> Result<Action, PolicyError> {
    let domain = required_str(operation, "domain", request.domain.as_deref())?;
    let path = required_path(operation, "hosts-path", request.hosts_path.as_deref())?;
    let marker = required_str(operation, "hosts-marker", request.hosts_marker.as_deref())?;

    let domain = DomainName::parse(domain).map_err(PolicyError::InvalidHostRemoval)?;
    let marker = HostsMarker::parse(marker).map_err(PolicyError::InvalidHostRemoval)?;

    Ok(Action::RemoveEntry {
        domain,
        target: HostsTarget::new(path, marker),
    })
}

fn required_str<'a>(
    operation: Operation,
    argument: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, PolicyError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(PolicyError::MissingArgument { operation, argument })
}

fn required_path<'a>(
    operation: Operation,
    argument: &'static str,
    value: Option<&'a Path>,
) -> Result<&'a Path, PolicyError> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(PolicyError::MissingArgument { operation, argument })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
