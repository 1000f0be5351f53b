use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Services the helper may query. Adding one is a code change, never a
/// runtime setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Dnsmasq,
    /// Queried to detect conflicts with the bundled web server.
    Nginx,
    Apache2,
}

impl Service {
    pub const ALLOWED: [Service; 3] = [Service::Dnsmasq, Service::Nginx, Service::Apache2];

    pub fn unit_name(self) -> &'static str {
        match self {
            Service::Dnsmasq => "dnsmasq.service",
            Service::Nginx => "nginx.service",
            Service::Apache2 => "apache2.service",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit_name())
    }
}

impl FromStr for Service {
    type Err = PolicyError;

    /// Exact, case-sensitive match against the allowlisted unit names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALLOWED
            .into_iter()
            .find(|service| service.unit_name() == s)
            .ok_or_else(|| PolicyError::ServiceNotAllowed(s.to_string()))
    }
}
