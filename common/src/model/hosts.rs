//! # Hosts Entries
//!
//! A managed entry is a single line `IP<TAB>DOMAIN<TAB>MARKER`. The marker is
//! a comment token, so resolvers ignore it while the editor uses it to tell
//! its own lines apart from everything else in the file.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ValidationError;
use crate::model::{DomainName, IpAddress};

/// Comment token stamped on every managed line.
///
/// Must start with `#` so it stays a comment, and must not contain control
/// characters so it can never break a line in two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostsMarker(String);

impl HostsMarker {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !raw.starts_with('#') || raw.chars().any(char::is_control) {
            return Err(ValidationError::InvalidMarker(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostsMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The file being edited and the marker scoping the edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostsTarget {
    pub path: PathBuf,
    pub marker: HostsMarker,
}

impl HostsTarget {
    pub fn new(path: impl Into<PathBuf>, marker: HostsMarker) -> Self {
        Self {
            path: path.into(),
            marker,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostEntry {
    pub ip: IpAddress,
    pub domain: DomainName,
}

impl HostEntry {
    pub fn new(ip: IpAddress, domain: DomainName) -> Self {
        Self { ip, domain }
    }

    /// Renders the entry as a complete line, newline included.
    pub fn to_line(&self, marker: &HostsMarker) -> String {
        format!("{}\t{}\t{}\n", self.ip, self.domain, marker)
    }
}
