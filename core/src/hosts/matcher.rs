//! Line predicates for the hosts editor.
//!
//! Adding ignores the marker: any live line mapping the same IP to the same
//! domain counts as already present. Removing requires the marker so lines
//! written by someone else are never touched.

use grazr_helper_common::model::{DomainName, HostEntry, HostsMarker};
use regex::Regex;

pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Finds an existing line for an `(ip, domain)` pair.
pub(crate) struct EntryMatcher {
    pattern: Regex,
}

impl EntryMatcher {
    pub(crate) fn new(entry: &HostEntry) -> Result<Self, regex::Error> {
        // IP first, then the domain as a whole token before any comment.
        let pattern = Regex::new(&format!(
            r"^\s*{}\s+(?:[^#]*\s)?{}(?:\s|#|$)",
            regex::escape(entry.ip.as_str()),
            regex::escape(entry.domain.as_str()),
        ))?;
        Ok(Self { pattern })
    }

    pub(crate) fn matches(&self, line: &str) -> bool {
        !is_comment(line) && self.pattern.is_match(line)
    }
}

/// Finds marker-tagged lines naming a domain.
pub(crate) struct RemovalMatcher<'a> {
    pattern: Regex,
    marker: &'a HostsMarker,
}

impl<'a> RemovalMatcher<'a> {
    pub(crate) fn new(domain: &DomainName, marker: &'a HostsMarker) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"\s{}(?:\s|#|$)",
            regex::escape(domain.as_str())
        ))?;
        Ok(Self { pattern, marker })
    }

    pub(crate) fn matches(&self, line: &str) -> bool {
        !is_comment(line) && line.contains(self.marker.as_str()) && self.pattern.is_match(line)
    }
}
