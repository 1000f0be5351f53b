//! # Grazr Helper Common
//!
//! Types shared by the policy gate, the hosts editor and the command line.
//!
//! * **[`model`]**: the closed sets (operations, services) and the validated
//!   values (domain names, IP addresses, hosts targets).
//! * **[`request`]**: the untrusted, caller-supplied parameters.
//! * **[`error`]**: validation and policy rejections.
//! * **[`exit`]**: the process exit code for every outcome.

pub mod config;
pub mod error;
pub mod exit;
pub mod model;
pub mod request;
