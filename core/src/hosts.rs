//! The **hosts-file editor**.
//!
//! Edits are line based and scoped by a marker comment. Unmanaged lines are
//! kept byte for byte and in order; the whole file is rewritten through
//! [`replace`] so a reader never observes a half-written file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use grazr_helper_common::model::{DomainName, HostEntry, HostsTarget};
use thiserror::Error;
use tracing::info;

mod matcher;
mod replace;

use matcher::{EntryMatcher, RemovalMatcher};

#[derive(Debug, Error)]
pub enum HostsError {
    #[error("Failed updating {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed building line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl HostsError {
    fn io(path: &Path, source: io::Error) -> Self {
        HostsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A live line already maps the IP to the domain. Nothing was written.
    AlreadyPresent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(usize),
    /// No managed line named the domain. Nothing was written.
    NotFound { file_exists: bool },
}

/// Appends `entry` to the target file unless an equivalent line exists.
///
/// A missing file is treated as empty and created.
pub fn add_entry(entry: &HostEntry, target: &HostsTarget) -> Result<AddOutcome, HostsError> {
    let path = target.path();
    info!("Adding host entry: {} {} to {}", entry.ip, entry.domain, path.display());

    let mut contents = read_existing(path)?.unwrap_or_default();
    let matcher = EntryMatcher::new(entry)?;

    if contents.split_inclusive('\n').any(|line| matcher.matches(line)) {
        info!("Entry already exists.");
        return Ok(AddOutcome::AlreadyPresent);
    }

    info!("Adding new line.");
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(&entry.to_line(&target.marker));

    replace::replace_contents(path, &contents).map_err(|err| HostsError::io(path, err))?;
    info!("Added entry.");

    Ok(AddOutcome::Added)
}

/// Drops every live, marker-tagged line naming `domain`.
///
/// Comment lines and lines without the marker survive even when they name
/// the domain.
pub fn remove_entry(
    domain: &DomainName,
    target: &HostsTarget,
) -> Result<RemoveOutcome, HostsError> {
    let path = target.path();
    info!("Removing host entries for: {} from {}", domain, path.display());

    let Some(contents) = read_existing(path)? else {
        info!("Hosts file not found.");
        return Ok(RemoveOutcome::NotFound { file_exists: false });
    };

    let matcher = RemovalMatcher::new(domain, &target.marker)?;
    let mut kept = String::with_capacity(contents.len());
    let mut removed: usize = 0;

    for line in contents.split_inclusive('\n') {
        if matcher.matches(line) {
            info!("Removing: {}", line.trim());
            removed += 1;
        } else {
            kept.push_str(line);
        }
    }

    if removed == 0 {
        info!("No matching entries found.");
        return Ok(RemoveOutcome::NotFound { file_exists: true });
    }

    info!("Removed {removed} entries. Writing updated file.");
    replace::replace_contents(path, &kept).map_err(|err| HostsError::io(path, err))?;

    Ok(RemoveOutcome::Removed(removed))
}

/// Reads the file, mapping "does not exist" to `None`.
fn read_existing(path: &Path) -> Result<Option<String>, HostsError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(HostsError::io(path, err)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
