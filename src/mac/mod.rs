//! Message authentication codes exposed by the crate.
//!
//! Currently includes HMAC instantiated with SHA-384.

pub mod hmac384;

/// Re-export of the HMAC-SHA-384 entry points.
pub use hmac384::{
    HMAC_SHA384_SIZE, HmacError, HmacSha384, HmacSha384Context, hmac_sha384, hmac_sha384_multi,
};
