use std::fmt;

use crate::error::ValidationError;

pub const MAX_DOMAIN_LEN: usize = 253;

/// A domain name safe to write into, or match against, a hosts file.
///
/// Only ASCII letters, digits, `.` and `-` are allowed. The name must not
/// contain `..`, start with `/`, end with `.`, or exceed
/// [`MAX_DOMAIN_LEN`] bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyDomain);
        }
        if raw.len() > MAX_DOMAIN_LEN {
            return Err(ValidationError::DomainTooLong(raw.len()));
        }
        if raw.starts_with('/') {
            return Err(ValidationError::LeadingSlash(raw.to_string()));
        }
        if let Some(ch) = raw
            .chars()
            .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '.' || *ch == '-'))
        {
            return Err(ValidationError::IllegalCharacter {
                domain: raw.to_string(),
                ch,
            });
        }
        if raw.contains("..") {
            return Err(ValidationError::DoubleDot(raw.to_string()));
        }
        if raw.ends_with('.') {
            return Err(ValidationError::TrailingDot(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
