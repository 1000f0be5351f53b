//! End-to-end checks: raw requests through the policy gate and the runner,
//! against real files in scratch directories.

mod gate;
mod hosts;
