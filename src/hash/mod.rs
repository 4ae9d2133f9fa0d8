//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-384 with a pure-Rust, streaming implementation.

pub mod sha384;

/// Re-export of the SHA-384 state and convenience function.
pub use sha384::core::{Sha384, sha384};
