#![deny(missing_docs)]
#![no_std]

//! Container primitives for single-threaded code.
//!
//! Re-exports the growable stack, the bounded queue decorator and the lazy maps from
//! `stowage-utils-core-rs`.

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
mod tests;

pub use stowage_utils_core_rs::{collections, sync};

/// Returns the version of this crate as recorded in its package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
