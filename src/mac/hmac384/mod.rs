//! HMAC-SHA-384 (RFC 2104, FIPS 198-1).
//!
//! HMAC authenticates a message under a secret key by nesting two hash
//! computations:
//!
//! ```text
//! HMAC(K, m) = H((K' ⊕ opad) || H((K' ⊕ ipad) || m))
//! ```
//!
//! where `K'` is the key zero-padded to the hash block size (or, for keys
//! longer than one block, the digest of the key, zero-padded).
//!
//! The two padded-key blocks only depend on the key, so their hash states
//! are computed once and kept in the context. Each MAC then costs the
//! message itself plus two finalizations.
//!
//! The module is split into three layers:
//!
//! - `core`: the `HmacSha384Context` state machine
//!   (new / reset / update / finalize)
//! - `oneshot`: stateless functions computing a single tag
//! - `context`: an owned, heap-held handle for issuing many tags under one
//!   key without re-deriving the pads
//!
//! ## Notes
//!
//! - Tags are returned as raw 48-byte arrays. Comparing a received tag
//!   against a computed one in constant time is the caller's job.
//! - Key material and hash states are zeroized when they go out of use.

use crate::hash::sha384::SHA384_DIGEST_SIZE;

/// HMAC-SHA-384 context state machine.
pub mod core;

/// Owned handle for repeated MACs under one key.
pub mod context;

/// Single-call MAC computation.
pub mod oneshot;

/// Size of an HMAC-SHA-384 tag in bytes.
pub const HMAC_SHA384_SIZE: usize = SHA384_DIGEST_SIZE;

pub use self::context::HmacSha384;
pub use self::core::{HmacError, HmacSha384Context};
pub use self::oneshot::{hmac_sha384, hmac_sha384_multi};
