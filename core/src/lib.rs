//! # Grazr Helper Core
//!
//! Everything that runs with elevated rights lives here.
//!
//! * **[`policy`]**: the gate. Turns an untrusted [`Request`] into an
//!   [`Action`] or refuses it. Nothing else in this crate accepts raw input.
//! * **[`hosts`]**: marker-scoped, idempotent edits of a hosts-style file,
//!   always written through an atomic same-directory replace.
//! * **[`query`]**: read-only service queries through an external tool,
//!   spawned with an argument vector and never a shell.
//! * **[`runner`]**: executes an authorized [`Action`] and reports the
//!   [`Outcome`].
//!
//! [`Request`]: grazr_helper_common::request::Request
//! [`Action`]: policy::Action
//! [`Outcome`]: runner::Outcome

pub mod error;
pub mod hosts;
pub mod policy;
pub mod query;
pub mod runner;

pub use error::HelperError;
