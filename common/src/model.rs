pub mod domain;
pub mod hosts;
pub mod ip;
pub mod operation;
pub mod service;

pub use domain::DomainName;
pub use hosts::{HostEntry, HostsMarker, HostsTarget};
pub use ip::IpAddress;
pub use operation::{Operation, QueryKind};
pub use service::Service;
