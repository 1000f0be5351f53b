//! The primary result channel.
//!
//! Exactly one line per invocation reaches stdout; callers parse it together
//! with the exit code. Diagnostics never go through here.

use std::fmt::Display;

pub fn result<T: Display>(outcome: T) {
    println!("{outcome}");
}
