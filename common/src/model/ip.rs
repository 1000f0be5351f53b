use std::fmt;

use crate::error::ValidationError;

/// Address written when the caller does not name one.
pub const LOOPBACK: &str = "127.0.0.1";

/// An address accepted for a hosts entry: the loopback literal or four
/// dot-separated groups of one to three ASCII digits.
///
/// Octet ranges are not checked, `999.0.0.1` is syntactically fine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw == LOOPBACK || is_dotted_quad(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidIp(raw.to_string()))
        }
    }

    pub fn loopback() -> Self {
        Self(LOOPBACK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_dotted_quad(s: &str) -> bool {
    let groups: Vec<&str> = s.split('.').collect();

    groups.len() == 4
        && groups
            .iter()
            .all(|group| (1..=3).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_loopback_and_dotted_quads() {
        for ip in ["127.0.0.1", "10.0.0.1", "192.168.1.254", "999.999.999.999", "0.0.0.0"] {
            assert!(IpAddress::parse(ip).is_ok(), "{ip} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for ip in [
            "",
            "::1",
            "localhost",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.1234",
            "1..2.3",
            "1.2.3.4 ",
            " 1.2.3.4",
            "1.2.3.4\n",
            "a.b.c.d",
            "1.2.3.-4",
        ] {
            assert_eq!(
                IpAddress::parse(ip),
                Err(ValidationError::InvalidIp(ip.to_string())),
                "{ip:?} should be rejected"
            );
        }
    }

    #[test]
    fn loopback_is_valid() {
        assert_eq!(IpAddress::parse(LOOPBACK), Ok(IpAddress::loopback()));
    }
}
